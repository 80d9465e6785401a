use crate::server::{error::AppError, service::retrospect::RetrospectService};
use chrono::Duration;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory, fixture};

mod against;
mod club;
mod opponents;

/// Records a match `days` after the default kickoff at a fresh stadium.
async fn play(
    db: &DatabaseConnection,
    home: i32,
    away: i32,
    score: (i32, i32),
    days: i64,
) -> Result<entity::matches::Model, DbErr> {
    let stadium = factory::create_stadium(db).await?;

    factory::matches::MatchFactory::new(db, home, away, stadium.id)
        .kickoff(fixture::matches::default_kickoff() + Duration::days(days))
        .score(score.0, score.1)
        .build()
        .await
}
