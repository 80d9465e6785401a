//! Match factory for creating test match entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test matches with customizable fields.
///
/// Club and stadium ids are required because the matches table carries foreign keys to
/// both.
///
/// # Example
///
/// ```rust,ignore
/// let played = MatchFactory::new(&db, home.id, away.id, stadium.id)
///     .kickoff(Utc.with_ymd_and_hms(2024, 3, 10, 19, 0, 0).unwrap())
///     .score(2, 1)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::matches::Model,
}

impl<'a> MatchFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        home_club_id: i32,
        away_club_id: i32,
        stadium_id: i32,
    ) -> Self {
        let entity = fixture::matches::entity_builder()
            .clubs(home_club_id, away_club_id)
            .stadium_id(stadium_id)
            .build();

        Self { db, entity }
    }

    pub fn kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.entity.kickoff = kickoff;
        self
    }

    pub fn score(mut self, home_goals: i32, away_goals: i32) -> Self {
        self.entity.home_goals = home_goals;
        self.entity.away_goals = away_goals;
        self
    }

    /// Builds and inserts the match entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::matches::Model)` - Created match entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            id: ActiveValue::NotSet,
            home_club_id: ActiveValue::Set(self.entity.home_club_id),
            away_club_id: ActiveValue::Set(self.entity.away_club_id),
            stadium_id: ActiveValue::Set(self.entity.stadium_id),
            kickoff: ActiveValue::Set(self.entity.kickoff),
            home_goals: ActiveValue::Set(self.entity.home_goals),
            away_goals: ActiveValue::Set(self.entity.away_goals),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a goalless match at the default kickoff.
pub async fn create_match(
    db: &DatabaseConnection,
    home_club_id: i32,
    away_club_id: i32,
    stadium_id: i32,
) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db, home_club_id, away_club_id, stadium_id)
        .build()
        .await
}
