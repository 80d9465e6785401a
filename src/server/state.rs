//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::address::ViaCepClient;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ViaCepClient` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Postal code lookup used when stadiums are created or moved.
    pub address_lookup: ViaCepClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, address_lookup: ViaCepClient) -> Self {
        Self { db, address_lookup }
    }
}
