//! Ranking rows and the metric they are ordered by.

use std::str::FromStr;

use crate::{model::ranking::RankingRowDto, server::error::AppError};

/// Per-club totals across every recorded match.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub club_id: i32,
    pub club_name: String,
    pub points: u32,
    pub goals: u32,
    pub victories: u32,
    pub matches: u32,
}

impl RankingRow {
    pub fn into_dto(self) -> RankingRowDto {
        RankingRowDto {
            club_id: self.club_id,
            club_name: self.club_name,
            points: self.points,
            goals: self.goals,
            victories: self.victories,
            matches: self.matches,
        }
    }
}

/// Column a ranking is filtered and sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMetric {
    Points,
    Goals,
    Victories,
    Matches,
}

impl RankingMetric {
    /// Reads the selected metric off a row.
    pub fn value(&self, row: &RankingRow) -> u32 {
        match self {
            Self::Points => row.points,
            Self::Goals => row.goals,
            Self::Victories => row.victories,
            Self::Matches => row.matches,
        }
    }
}

impl FromStr for RankingMetric {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "points" | "pontos" => Ok(Self::Points),
            "goals" | "gols" => Ok(Self::Goals),
            "victories" | "vitorias" => Ok(Self::Victories),
            "matches" | "partidas" => Ok(Self::Matches),
            _ => Err(AppError::BadRequest("invalid filter".to_string())),
        }
    }
}
