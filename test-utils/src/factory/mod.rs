//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible
//! defaults, reducing boilerplate in tests. Default values are sourced from the fixtures
//! with unique names so that several records can coexist without tripping uniqueness
//! rules.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let club = factory::create_club(&db).await?;
//!     let stadium = factory::create_stadium(&db).await?;
//!
//!     // Create two clubs, a stadium and a match between them
//!     let (home, away, stadium, fixture) =
//!         factory::helpers::create_match_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let club = factory::club::ClubFactory::new(&db)
//!     .name("Grêmio")
//!     .state("RS")
//!     .build()
//!     .await?;
//! ```

pub mod club;
pub mod helpers;
pub mod matches;
pub mod stadium;

// Re-export commonly used factory functions for concise usage
pub use club::create_club;
pub use matches::create_match;
pub use stadium::create_stadium;
