//! Head-to-head retrospectives folded from a club's match history.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{club::ClubRepository, matches::MatchRepository},
    error::{internal::InternalError, AppError},
    model::{
        club::Club,
        matches::{Match, Side},
        retrospect::{OpponentRetrospect, Retrospect, Tally},
    },
};

/// Folds every match the club played into one tally. Matches without the club are skipped.
pub fn tally_for(club_id: i32, matches: &[Match]) -> Tally {
    matches.iter().fold(Tally::default(), |mut tally, m| {
        if let Some(side) = m.side_of(club_id) {
            let (scored, conceded) = m.goals_for(side);
            tally.record(scored, conceded);
        }
        tally
    })
}

/// Folds the club's matches into one tally per opponent.
///
/// Opponents appear in the order they are first met in `matches`.
pub fn tally_by_opponent(club_id: i32, matches: &[Match]) -> Vec<(i32, Tally)> {
    let mut order: Vec<i32> = Vec::new();
    let mut tallies: HashMap<i32, Tally> = HashMap::new();

    for m in matches {
        let Some(side) = m.side_of(club_id) else {
            continue;
        };
        let opponent = m.opponent_of(side);
        let (scored, conceded) = m.goals_for(side);

        tallies
            .entry(opponent)
            .or_insert_with(|| {
                order.push(opponent);
                Tally::default()
            })
            .record(scored, conceded);
    }

    order
        .into_iter()
        .map(|id| (id, tallies.remove(&id).unwrap_or_default()))
        .collect()
}

/// Attaches opponent names to grouped tallies.
///
/// An opponent without a stored name is a dangling match reference and fails with
/// `InternalError::MissingMatchRelation` for the first match that mentions it.
fn name_opponents(
    grouped: Vec<(i32, Tally)>,
    names: &HashMap<i32, String>,
    matches: &[Match],
) -> Result<Vec<OpponentRetrospect>, AppError> {
    grouped
        .into_iter()
        .map(|(opponent_id, tally)| {
            let opponent_name = names.get(&opponent_id).cloned().ok_or_else(|| {
                let match_id = matches
                    .iter()
                    .find(|fixture| fixture.involves(opponent_id))
                    .map_or(0, |fixture| fixture.id);

                AppError::from(InternalError::MissingMatchRelation {
                    match_id,
                    relation: "club",
                    relation_id: opponent_id,
                })
            })?;

            Ok(OpponentRetrospect {
                opponent_id,
                opponent_name,
                tally,
            })
        })
        .collect()
}

pub struct RetrospectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RetrospectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes every match of a club, optionally only on one side.
    ///
    /// # Returns
    /// - `Ok(Retrospect)` - Club name and totals (all zero when it never played)
    /// - `Err(AppError::NotFound)` - Unknown club
    /// - `Err(AppError::BadRequest)` - `side` is not a known keyword
    pub async fn club(&self, club_id: i32, side: Option<&str>) -> Result<Retrospect, AppError> {
        let club = self.find_club(club_id, "club not found").await?;
        let side = Side::parse_optional(side)?;

        let matches = MatchRepository::new(self.db).for_club(club_id, side).await?;

        Ok(Retrospect {
            club_name: club.name,
            tally: tally_for(club_id, &matches),
        })
    }

    /// Summarizes a club's matches grouped by opponent.
    ///
    /// Rows follow the order opponents were first met by kickoff.
    pub async fn opponents(
        &self,
        club_id: i32,
        side: Option<&str>,
    ) -> Result<Vec<OpponentRetrospect>, AppError> {
        self.find_club(club_id, "club not found").await?;
        let side = Side::parse_optional(side)?;

        let matches = MatchRepository::new(self.db).for_club(club_id, side).await?;
        let grouped = tally_by_opponent(club_id, &matches);

        let names: HashMap<i32, String> = ClubRepository::new(self.db)
            .find_by_ids(grouped.iter().map(|(id, _)| *id).collect())
            .await?
            .into_iter()
            .map(|club| (club.id, club.name))
            .collect();

        name_opponents(grouped, &names, &matches)
    }

    /// Summarizes a club's matches against one opponent.
    ///
    /// An opponent the club never faced yields a row of zeros.
    pub async fn against(
        &self,
        club_id: i32,
        opponent_id: i32,
        side: Option<&str>,
    ) -> Result<OpponentRetrospect, AppError> {
        self.find_club(club_id, "club not found").await?;
        let opponent = self.find_club(opponent_id, "opponent not found").await?;
        let side = Side::parse_optional(side)?;

        let matches = MatchRepository::new(self.db)
            .between_clubs(club_id, opponent_id, side)
            .await?;

        Ok(OpponentRetrospect {
            opponent_id: opponent.id,
            opponent_name: opponent.name,
            tally: tally_for(club_id, &matches),
        })
    }

    async fn find_club(&self, id: i32, missing: &str) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(missing.to_string()))
    }
}
