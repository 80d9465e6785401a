//! Club factory for creating test club entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test clubs with customizable fields.
///
/// Defaults come from `fixture::club::entity()` with a unique name per instance.
///
/// # Example
///
/// ```rust,ignore
/// let club = ClubFactory::new(&db)
///     .name("Santos")
///     .founded_at(NaiveDate::from_ymd_opt(1912, 4, 14).unwrap())
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::clubs::Model,
}

impl<'a> ClubFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::club::entity_builder()
            .name(format!("Club {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the two-letter state code.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.entity.state = state.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub fn founded_at(mut self, founded_at: NaiveDate) -> Self {
        self.entity.founded_at = founded_at;
        self
    }

    /// Builds and inserts the club entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::clubs::Model)` - Created club entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::clubs::Model, DbErr> {
        entity::clubs::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            state: ActiveValue::Set(self.entity.state),
            active: ActiveValue::Set(self.entity.active),
            founded_at: ActiveValue::Set(self.entity.founded_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active club with default values.
///
/// Shorthand for `ClubFactory::new(db).build().await`.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::clubs::Model, DbErr> {
    ClubFactory::new(db).build().await
}
