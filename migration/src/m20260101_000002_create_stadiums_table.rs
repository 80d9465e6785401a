use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stadiums::Table)
                    .if_not_exists()
                    .col(pk_auto(Stadiums::Id))
                    .col(string(Stadiums::Name))
                    .col(boolean(Stadiums::Active).default(true))
                    .col(string_null(Stadiums::PostalCode))
                    .col(string_null(Stadiums::Street))
                    .col(string_null(Stadiums::Complement))
                    .col(string_null(Stadiums::District))
                    .col(string_null(Stadiums::City))
                    .col(string_null(Stadiums::State))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stadiums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stadiums {
    Table,
    Id,
    Name,
    Active,
    PostalCode,
    Street,
    Complement,
    District,
    City,
    State,
}
