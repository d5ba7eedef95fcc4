//! Create `console` table.
//!
//! Parent entity; `game` rows reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Console::Table)
                    .if_not_exists()
                    .col(pk_auto(Console::Id))
                    .col(string_len(Console::Name, 128).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Console::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Console { Table, Id, Name }
