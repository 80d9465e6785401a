//! League-wide ranking over every recorded match.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, matches::MatchRepository},
    error::AppError,
    model::{
        club::Club,
        matches::Match,
        ranking::{RankingMetric, RankingRow},
    },
    service::retrospect::tally_for,
};

/// Builds one row per club, in the order the clubs are given.
///
/// Clubs that never played get a row of zeros.
pub fn tally_clubs(clubs: &[Club], matches: &[Match]) -> Vec<RankingRow> {
    clubs
        .iter()
        .map(|club| {
            let tally = tally_for(club.id, matches);

            RankingRow {
                club_id: club.id,
                club_name: club.name.clone(),
                points: tally.points(),
                goals: tally.goals_for,
                victories: tally.victories,
                matches: tally.matches,
            }
        })
        .collect()
}

/// Drops rows whose metric is zero and sorts the rest by it, highest first.
///
/// The sort is stable, so ties keep their incoming order.
pub fn rank(rows: Vec<RankingRow>, metric: RankingMetric) -> Vec<RankingRow> {
    let mut rows: Vec<RankingRow> = rows
        .into_iter()
        .filter(|row| metric.value(row) > 0)
        .collect();

    rows.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));

    rows
}

pub struct RankingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks every club by the metric named in `filter`.
    ///
    /// # Returns
    /// - `Ok(Vec<RankingRow>)` - Clubs with a positive value, best first
    /// - `Err(AppError::BadRequest)` - Unknown metric keyword
    pub async fn ranking(&self, filter: &str) -> Result<Vec<RankingRow>, AppError> {
        let metric: RankingMetric = filter.parse()?;

        let clubs = ClubRepository::new(self.db).get_all().await?;
        let matches = MatchRepository::new(self.db).get_all().await?;

        Ok(rank(tally_clubs(&clubs, &matches), metric))
    }
}
