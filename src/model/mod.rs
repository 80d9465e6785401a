//! Data transfer objects shared by the HTTP layer.
//!
//! These types describe the JSON bodies accepted and returned by the API and carry the
//! `utoipa` schema derives used to build the OpenAPI document.

pub mod api;
pub mod club;
pub mod matches;
pub mod ranking;
pub mod retrospect;
pub mod stadium;
