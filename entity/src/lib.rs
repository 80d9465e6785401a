//! SeaORM entity models for the matchboard database.

pub mod prelude;

pub mod clubs;
pub mod matches;
pub mod stadiums;
