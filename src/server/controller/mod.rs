//! HTTP request handlers.
//!
//! Controllers extract path, query and body parameters, convert DTOs into domain
//! parameters, call a service and convert the result back into a DTO. Every handler is
//! annotated with `utoipa::path` so it appears in the generated OpenAPI document.

pub mod club;
pub mod matches;
pub mod ranking;
pub mod retrospect;
pub mod stadium;

use serde::Deserialize;

use crate::server::util::parse::page_request;

#[derive(Deserialize)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub entries: Option<u64>,
}

impl PaginationParams {
    /// `(page, per_page)` with defaults applied and the page size clamped.
    pub fn resolve(&self) -> (u64, u64) {
        page_request(self.page, self.entries)
    }
}

#[derive(Deserialize)]
pub struct SideParams {
    pub side: Option<String>,
}
