use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .if_not_exists()
                    .col(pk_auto(Clubs::Id))
                    .col(string(Clubs::Name))
                    .col(string_len(Clubs::State, 2))
                    .col(boolean(Clubs::Active).default(true))
                    .col(date(Clubs::FoundedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clubs {
    Table,
    Id,
    Name,
    State,
    Active,
    FoundedAt,
}
