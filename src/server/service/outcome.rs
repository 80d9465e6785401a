//! Result and winner strings derived from a match's score.

use crate::server::model::matches::Match;

/// Winner label used when neither side scored more.
pub const DRAW: &str = "Draw";

/// Formats the score as `"{home_goals} x {away_goals}"`.
pub fn format_result(fixture: &Match) -> String {
    format!("{} x {}", fixture.home_goals, fixture.away_goals)
}

/// Name of the club that scored more, or [`DRAW`].
pub fn determine_winner(fixture: &Match, home_name: &str, away_name: &str) -> String {
    match fixture.home_goals.cmp(&fixture.away_goals) {
        std::cmp::Ordering::Greater => home_name.to_string(),
        std::cmp::Ordering::Less => away_name.to_string(),
        std::cmp::Ordering::Equal => DRAW.to_string(),
    }
}
