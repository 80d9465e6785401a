//! Club fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::clubs;

/// Default test club name.
pub const DEFAULT_NAME: &str = "Test Club";

/// Default state code for test clubs.
pub const DEFAULT_STATE: &str = "SP";

/// Default founding date, well before any kickoff used in tests.
pub fn default_founded_at() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Creates a club entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Club"`
/// - state: `"SP"`
/// - active: `true`
/// - founded_at: `1900-01-01`
pub fn entity() -> clubs::Model {
    clubs::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        state: DEFAULT_STATE.to_string(),
        active: true,
        founded_at: default_founded_at(),
    }
}

/// Creates a club entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let club = fixture::club::entity_builder()
///     .id(7)
///     .name("Flamengo")
///     .state("RJ")
///     .build();
/// ```
pub fn entity_builder() -> ClubEntityBuilder {
    ClubEntityBuilder::default()
}

/// Builder for customized club entity models.
pub struct ClubEntityBuilder {
    entity: clubs::Model,
}

impl Default for ClubEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl ClubEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

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

    pub fn build(self) -> clubs::Model {
        self.entity
    }
}
