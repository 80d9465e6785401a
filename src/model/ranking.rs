use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct RankingRowDto {
    pub club_id: i32,
    pub club_name: String,
    pub points: u32,
    pub goals: u32,
    pub victories: u32,
    pub matches: u32,
}
