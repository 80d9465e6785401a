use crate::{
    model::club::StateCode,
    server::{
        error::AppError,
        model::club::{ClubFilter, CreateClubParams, UpdateClubParams},
        service::club::ClubService,
    },
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;

fn flamengo() -> CreateClubParams {
    CreateClubParams {
        name: "Flamengo".to_string(),
        state: StateCode::Rj,
        founded_at: NaiveDate::from_ymd_opt(1895, 11, 17).unwrap(),
    }
}
