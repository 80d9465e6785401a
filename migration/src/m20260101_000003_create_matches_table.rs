use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_clubs_table::Clubs, m20260101_000002_create_stadiums_table::Stadiums,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(integer(Matches::HomeClubId))
                    .col(integer(Matches::AwayClubId))
                    .col(integer(Matches::StadiumId))
                    .col(timestamp_with_time_zone(Matches::Kickoff))
                    .col(integer(Matches::HomeGoals))
                    .col(integer(Matches::AwayGoals))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_home_club_id")
                            .from(Matches::Table, Matches::HomeClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_away_club_id")
                            .from(Matches::Table, Matches::AwayClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_stadium_id")
                            .from(Matches::Table, Matches::StadiumId)
                            .to(Stadiums::Table, Stadiums::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    HomeClubId,
    AwayClubId,
    StadiumId,
    Kickoff,
    HomeGoals,
    AwayGoals,
}
