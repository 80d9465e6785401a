//! Match fixtures for creating in-memory test data.
//!
//! Used heavily by the admission and aggregation unit tests, which operate on match
//! lists without a database.

use chrono::{DateTime, TimeZone, Utc};
use entity::matches;

/// Default kickoff used by match fixtures: 2024-05-01 16:00 UTC.
pub fn default_kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 16, 0, 0).unwrap()
}

/// Creates a match entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - home_club_id: `1`
/// - away_club_id: `2`
/// - stadium_id: `1`
/// - kickoff: `2024-05-01T16:00:00Z`
/// - home_goals / away_goals: `0`
pub fn entity() -> matches::Model {
    matches::Model {
        id: 1,
        home_club_id: 1,
        away_club_id: 2,
        stadium_id: 1,
        kickoff: default_kickoff(),
        home_goals: 0,
        away_goals: 0,
    }
}

/// Creates a match entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let derby = fixture::matches::entity_builder()
///     .clubs(1, 2)
///     .score(3, 1)
///     .build();
/// ```
pub fn entity_builder() -> MatchEntityBuilder {
    MatchEntityBuilder::default()
}

/// Builder for customized match entity models.
pub struct MatchEntityBuilder {
    entity: matches::Model,
}

impl Default for MatchEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl MatchEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the home and away club ids.
    pub fn clubs(mut self, home_club_id: i32, away_club_id: i32) -> Self {
        self.entity.home_club_id = home_club_id;
        self.entity.away_club_id = away_club_id;
        self
    }

    pub fn stadium_id(mut self, stadium_id: i32) -> Self {
        self.entity.stadium_id = stadium_id;
        self
    }

    pub fn kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.entity.kickoff = kickoff;
        self
    }

    /// Sets the home and away goals.
    pub fn score(mut self, home_goals: i32, away_goals: i32) -> Self {
        self.entity.home_goals = home_goals;
        self.entity.away_goals = away_goals;
        self
    }

    pub fn build(self) -> matches::Model {
        self.entity
    }
}
