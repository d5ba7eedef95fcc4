use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Game: lookups by parent console
        manager
            .create_index(
                Index::create()
                    .name("idx_game_console")
                    .table(Game::Table)
                    .col(Game::ConsoleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_game_console").table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Game { Table, ConsoleId }
