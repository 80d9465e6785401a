//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let club = fixture::club::entity();
//!
//! // Create with custom fields
//! let retired = fixture::club::entity_builder()
//!     .active(false)
//!     .build();
//! ```

pub mod club;
pub mod matches;
pub mod stadium;

pub use club::{entity as club_entity, entity_builder as club_entity_builder};
pub use matches::{entity as match_entity, entity_builder as match_entity_builder};
pub use stadium::{entity as stadium_entity, entity_builder as stadium_entity_builder};
