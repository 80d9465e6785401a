//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two clubs, a stadium and a default match between them.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((home, away, stadium, match))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::clubs::Model,
        entity::clubs::Model,
        entity::stadiums::Model,
        entity::matches::Model,
    ),
    DbErr,
> {
    let home = crate::factory::club::create_club(db).await?;
    let away = crate::factory::club::create_club(db).await?;
    let stadium = crate::factory::stadium::create_stadium(db).await?;
    let fixture = crate::factory::matches::create_match(db, home.id, away.id, stadium.id).await?;

    Ok((home, away, stadium, fixture))
}
