use crate::server::{error::AppError, service::ranking::RankingService};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory, fixture};

mod rank;
