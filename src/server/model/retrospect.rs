//! Retrospective tallies folded from a club's match history.

use crate::model::retrospect::{OpponentRetrospectDto, RetrospectDto};

/// Win/draw/loss and goal totals from one club's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub matches: u32,
    pub victories: u32,
    pub draws: u32,
    pub defeats: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Tally {
    /// Adds one match with the given score from the club's perspective.
    ///
    /// Totals saturate at `u32::MAX`.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.matches = self.matches.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        let outcome = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => &mut self.victories,
            std::cmp::Ordering::Equal => &mut self.draws,
            std::cmp::Ordering::Less => &mut self.defeats,
        };
        *outcome = outcome.saturating_add(1);
    }

    /// 3 points per victory and 1 per draw.
    pub fn points(&self) -> u32 {
        self.victories.saturating_mul(3).saturating_add(self.draws)
    }
}

/// Summary of a club's matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Retrospect {
    pub club_name: String,
    pub tally: Tally,
}

impl Retrospect {
    pub fn into_dto(self) -> RetrospectDto {
        RetrospectDto {
            club_name: self.club_name,
            matches: self.tally.matches,
            victories: self.tally.victories,
            draws: self.tally.draws,
            defeats: self.tally.defeats,
            goals_for: self.tally.goals_for,
            goals_against: self.tally.goals_against,
        }
    }
}

/// Summary of a club's matches against a single opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentRetrospect {
    pub opponent_id: i32,
    pub opponent_name: String,
    pub tally: Tally,
}

impl OpponentRetrospect {
    pub fn into_dto(self) -> OpponentRetrospectDto {
        OpponentRetrospectDto {
            opponent_id: self.opponent_id,
            opponent_name: self.opponent_name,
            matches: self.tally.matches,
            victories: self.tally.victories,
            draws: self.tally.draws,
            defeats: self.tally.defeats,
            goals_for: self.tally.goals_for,
            goals_against: self.tally.goals_against,
        }
    }
}
