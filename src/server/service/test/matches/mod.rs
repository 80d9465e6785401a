use crate::server::{
    error::AppError,
    model::matches::{MatchFilter, MatchParams},
    service::matches::MatchService,
};
use chrono::{Duration, NaiveDate};
use test_utils::{builder::TestBuilder, factory, fixture};

mod delete;

fn params(home: i32, away: i32, stadium: i32) -> MatchParams {
    MatchParams {
        home_club_id: home,
        away_club_id: away,
        stadium_id: stadium,
        kickoff: fixture::matches::default_kickoff(),
        home_goals: 2,
        away_goals: 1,
    }
}
