use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for both creating and replacing a match.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct MatchRequestDto {
    pub home_club_id: i32,
    pub away_club_id: i32,
    pub stadium_id: i32,
    pub kickoff: DateTime<Utc>,
    pub home_goals: u32,
    pub away_goals: u32,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct MatchDto {
    pub id: i32,
    pub home_club_id: i32,
    pub home_club: String,
    pub away_club_id: i32,
    pub away_club: String,
    pub stadium_id: i32,
    pub stadium: String,
    pub kickoff: DateTime<Utc>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub result: String, // "{home_goals} x {away_goals}"
    pub winner: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedMatchesDto {
    pub matches: Vec<MatchDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
