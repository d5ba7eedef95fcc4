//! Create `game` table.
//! Each game belongs to exactly one console; titles are unique across all consoles.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_len(Game::Title, 256).unique_key().not_null())
                    .col(integer(Game::ConsoleId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_console")
                            .from(Game::Table, Game::ConsoleId)
                            .to(Console::Table, Console::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Game::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Title,
    ConsoleId,
}

#[derive(DeriveIden)]
enum Console { Table, Id }
