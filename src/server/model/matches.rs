//! Match domain models, parameters and search filters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;

use crate::{
    model::matches::{MatchDto, MatchRequestDto, PaginatedMatchesDto},
    server::{error::AppError, service::outcome},
};

/// A match between two clubs at a stadium.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub home_club_id: i32,
    pub away_club_id: i32,
    pub stadium_id: i32,
    pub kickoff: DateTime<Utc>,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl Match {
    /// Converts an entity model to a match domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Match)` - The converted match
    /// - `Err(DbErr::Custom)` - A stored goal count is negative
    pub fn from_entity(entity: entity::matches::Model) -> Result<Self, DbErr> {
        let home_goals = u32::try_from(entity.home_goals)
            .map_err(|e| DbErr::Custom(format!("Failed to parse home goals: {}", e)))?;
        let away_goals = u32::try_from(entity.away_goals)
            .map_err(|e| DbErr::Custom(format!("Failed to parse away goals: {}", e)))?;

        Ok(Self {
            id: entity.id,
            home_club_id: entity.home_club_id,
            away_club_id: entity.away_club_id,
            stadium_id: entity.stadium_id,
            kickoff: entity.kickoff,
            home_goals,
            away_goals,
        })
    }

    /// Whether the club played in this match on either side.
    pub fn involves(&self, club_id: i32) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }

    /// Side the club played on, if it played at all.
    pub fn side_of(&self, club_id: i32) -> Option<Side> {
        if self.home_club_id == club_id {
            Some(Side::Home)
        } else if self.away_club_id == club_id {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// `(goals scored, goals conceded)` from the perspective of the given side.
    pub fn goals_for(&self, side: Side) -> (u32, u32) {
        match side {
            Side::Home => (self.home_goals, self.away_goals),
            Side::Away => (self.away_goals, self.home_goals),
        }
    }

    /// Id of the club on the other side.
    pub fn opponent_of(&self, side: Side) -> i32 {
        match side {
            Side::Home => self.away_club_id,
            Side::Away => self.home_club_id,
        }
    }
}

/// A match together with the names needed to present it.
#[derive(Debug, Clone)]
pub struct MatchDetails {
    pub fixture: Match,
    pub home_club: String,
    pub away_club: String,
    pub stadium: String,
}

impl MatchDetails {
    /// Projects the match into its response shape, deriving result and winner.
    pub fn into_dto(self) -> MatchDto {
        let result = outcome::format_result(&self.fixture);
        let winner = outcome::determine_winner(&self.fixture, &self.home_club, &self.away_club);

        MatchDto {
            id: self.fixture.id,
            home_club_id: self.fixture.home_club_id,
            home_club: self.home_club,
            away_club_id: self.fixture.away_club_id,
            away_club: self.away_club,
            stadium_id: self.fixture.stadium_id,
            stadium: self.stadium,
            kickoff: self.fixture.kickoff,
            home_goals: self.fixture.home_goals,
            away_goals: self.fixture.away_goals,
            result,
            winner,
        }
    }
}

/// Highest goal count accepted for either side.
pub const MAX_GOALS: u32 = 99;

/// Fields of a match as submitted for create or update.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchParams {
    pub home_club_id: i32,
    pub away_club_id: i32,
    pub stadium_id: i32,
    pub kickoff: DateTime<Utc>,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchParams {
    /// Converts a request DTO, rejecting kickoffs in the future and implausible scores.
    ///
    /// # Returns
    /// - `Ok(MatchParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - Kickoff is later than now or a goal count exceeds
    ///   `MAX_GOALS`
    pub fn from_dto(dto: MatchRequestDto) -> Result<Self, AppError> {
        if dto.kickoff > Utc::now() {
            return Err(AppError::BadRequest(
                "kickoff cannot be in the future".to_string(),
            ));
        }
        if dto.home_goals > MAX_GOALS || dto.away_goals > MAX_GOALS {
            return Err(AppError::BadRequest(format!(
                "goals must be between 0 and {}",
                MAX_GOALS
            )));
        }

        Ok(Self {
            home_club_id: dto.home_club_id,
            away_club_id: dto.away_club_id,
            stadium_id: dto.stadium_id,
            kickoff: dto.kickoff,
            home_goals: dto.home_goals,
            away_goals: dto.away_goals,
        })
    }
}

/// Which side of a match a club played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Parses an optional `side` query parameter. Absent means both sides.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, AppError> {
        value.map(str::parse).transpose()
    }
}

impl FromStr for Side {
    type Err = AppError;

    /// Accepts `home`/`casa` and `away`/`fora` in any letter case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "home" | "casa" => Ok(Self::Home),
            "away" | "fora" => Ok(Self::Away),
            _ => Err(AppError::BadRequest("invalid side".to_string())),
        }
    }
}

/// Optional filters for match search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilter {
    pub club_id: Option<i32>,
    pub stadium_id: Option<i32>,
    /// Only matches decided by three goals or more.
    pub routs: bool,
    /// Restricts `club_id` to one side. Only valid together with `club_id`.
    pub side: Option<Side>,
}

impl MatchFilter {
    pub fn new(
        club_id: Option<i32>,
        stadium_id: Option<i32>,
        routs: bool,
        side: Option<&str>,
    ) -> Result<Self, AppError> {
        let side = Side::parse_optional(side)?;
        if side.is_some() && club_id.is_none() {
            return Err(AppError::BadRequest(
                "side filter requires club_id".to_string(),
            ));
        }

        Ok(Self {
            club_id,
            stadium_id,
            routs,
            side,
        })
    }
}

/// One page of matches with their display names.
#[derive(Debug, Clone)]
pub struct PaginatedMatches {
    pub matches: Vec<MatchDetails>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMatches {
    pub fn into_dto(self) -> PaginatedMatchesDto {
        PaginatedMatchesDto {
            matches: self.matches.into_iter().map(MatchDetails::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
