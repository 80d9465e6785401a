use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored match references a club or stadium that no longer exists.
    ///
    /// Foreign keys should make this impossible. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error("Match {match_id} references missing {relation} {relation_id}")]
    MissingMatchRelation {
        /// The match being enriched
        match_id: i32,
        /// Which reference was dangling ("club" or "stadium")
        relation: &'static str,
        /// The id that could not be resolved
        relation_id: i32,
    },

    /// The configured address lookup URL cannot carry path segments.
    #[error("Address lookup URL '{url}' cannot be used as a base URL")]
    InvalidLookupUrl {
        /// The configured URL
        url: String,
    },
}
