//! Stadium factory for creating test stadium entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test stadiums with customizable fields.
pub struct StadiumFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::stadiums::Model,
}

impl<'a> StadiumFactory<'a> {
    /// Creates a factory for an active stadium with a unique name and no address.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::stadium::entity_builder()
            .name(format!("Stadium {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    /// Gives the stadium a full address for the given postal code.
    pub fn address(mut self, postal_code: impl Into<String>) -> Self {
        self.entity = fixture::stadium::entity_builder()
            .name(self.entity.name)
            .active(self.entity.active)
            .address(postal_code)
            .build();
        self
    }

    /// Builds and inserts the stadium entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::stadiums::Model)` - Created stadium entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::stadiums::Model, DbErr> {
        entity::stadiums::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            active: ActiveValue::Set(self.entity.active),
            postal_code: ActiveValue::Set(self.entity.postal_code),
            street: ActiveValue::Set(self.entity.street),
            complement: ActiveValue::Set(self.entity.complement),
            district: ActiveValue::Set(self.entity.district),
            city: ActiveValue::Set(self.entity.city),
            state: ActiveValue::Set(self.entity.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active stadium with default values.
pub async fn create_stadium(db: &DatabaseConnection) -> Result<entity::stadiums::Model, DbErr> {
    StadiumFactory::new(db).build().await
}
