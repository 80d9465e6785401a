//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for clubs,
//! stadiums and matches. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait` so the same code runs against the
//! connection pool or inside a transaction.

pub mod club;
pub mod matches;
pub mod stadium;

#[cfg(test)]
mod test;
