//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Match admission rules, soft-delete lifecycle, uniqueness checks
//! - **Aggregation**: Retrospectives and the ranking, folded from raw match history
//! - **Orchestration**: Coordinating repositories and the external address lookup
//! - **Transaction Management**: Match create/update resolve, validate and save atomically

pub mod address;
pub mod admission;
pub mod club;
pub mod matches;
pub mod outcome;
pub mod ranking;
pub mod retrospect;
pub mod stadium;
