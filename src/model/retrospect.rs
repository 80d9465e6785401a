use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct RetrospectDto {
    pub club_name: String,
    pub matches: u32,
    pub victories: u32,
    pub draws: u32,
    pub defeats: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct OpponentRetrospectDto {
    pub opponent_id: i32,
    pub opponent_name: String,
    pub matches: u32,
    pub victories: u32,
    pub draws: u32,
    pub defeats: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}
