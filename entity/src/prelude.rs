pub use super::clubs::Entity as Clubs;
pub use super::matches::Entity as Matches;
pub use super::stadiums::Entity as Stadiums;
