use sea_orm_migration::prelude::*;

use crate::m20260101_000003_create_matches_table::Matches;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rest-window and stadium-day admission checks scan by these columns
        manager
            .create_index(
                Index::create()
                    .name("idx_matches_stadium_id_kickoff")
                    .table(Matches::Table)
                    .col(Matches::StadiumId)
                    .col(Matches::Kickoff)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_home_club_id_kickoff")
                    .table(Matches::Table)
                    .col(Matches::HomeClubId)
                    .col(Matches::Kickoff)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_away_club_id_kickoff")
                    .table(Matches::Table)
                    .col(Matches::AwayClubId)
                    .col(Matches::Kickoff)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_matches_away_club_id_kickoff",
            "idx_matches_home_club_id_kickoff",
            "idx_matches_stadium_id_kickoff",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Matches::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}
