//! Stadium fixtures for creating in-memory test data.

use entity::stadiums;

/// Default test stadium name.
pub const DEFAULT_NAME: &str = "Test Stadium";

/// Creates a stadium entity model with default values.
///
/// The default stadium is active and has no address.
pub fn entity() -> stadiums::Model {
    stadiums::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        active: true,
        postal_code: None,
        street: None,
        complement: None,
        district: None,
        city: None,
        state: None,
    }
}

pub fn entity_builder() -> StadiumEntityBuilder {
    StadiumEntityBuilder::default()
}

/// Builder for customized stadium entity models.
pub struct StadiumEntityBuilder {
    entity: stadiums::Model,
}

impl Default for StadiumEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl StadiumEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    /// Fills every address column with plausible values for the given postal code.
    pub fn address(mut self, postal_code: impl Into<String>) -> Self {
        self.entity.postal_code = Some(postal_code.into());
        self.entity.street = Some("Avenida Paulista".to_string());
        self.entity.complement = Some(String::new());
        self.entity.district = Some("Bela Vista".to_string());
        self.entity.city = Some("São Paulo".to_string());
        self.entity.state = Some("SP".to_string());
        self
    }

    pub fn build(self) -> stadiums::Model {
        self.entity
    }
}
