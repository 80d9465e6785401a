//! Club domain models and parameters.
//!
//! Provides the club domain model with its soft-delete lifecycle, parameter types for
//! create/update operations with request validation, and search filters.

use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::club::{ClubDto, CreateClubDto, PaginatedClubsDto, StateCode, UpdateClubDto},
    server::{error::AppError, model::Lifecycle},
};

/// Minimum length of a club name after trimming.
const MIN_NAME_LEN: usize = 2;

/// Football club registered in a Brazilian state.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    /// Unique identifier for the club.
    pub id: i32,
    /// Display name, unique per state (case-insensitive).
    pub name: String,
    /// State the club is registered in.
    pub state: StateCode,
    /// Whether the club is active or soft-deleted.
    pub lifecycle: Lifecycle,
    /// Founding date; no match may be played before it.
    pub founded_at: NaiveDate,
}

impl Club {
    /// Converts an entity model to a club domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Club)` - The converted club domain model
    /// - `Err(DbErr::Custom)` - The stored state code is not a known state
    pub fn from_entity(entity: entity::clubs::Model) -> Result<Self, DbErr> {
        let state = entity
            .state
            .parse::<StateCode>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse club state: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            state,
            lifecycle: Lifecycle::from_flag(entity.active),
            founded_at: entity.founded_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            state: self.state,
            active: self.lifecycle.is_active(),
            founded_at: self.founded_at,
        }
    }
}

/// Parameters for registering a new club.
#[derive(Debug, Clone)]
pub struct CreateClubParams {
    pub name: String,
    pub state: StateCode,
    pub founded_at: NaiveDate,
}

impl CreateClubParams {
    /// Validates and converts a creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateClubParams)` - Name trimmed, founding date checked
    /// - `Err(AppError::BadRequest)` - Name too short or founding date in the future
    pub fn from_dto(dto: CreateClubDto) -> Result<Self, AppError> {
        let name = validate_name(&dto.name)?;
        validate_founding_date(dto.founded_at)?;

        Ok(Self {
            name,
            state: dto.state,
            founded_at: dto.founded_at,
        })
    }
}

/// Parameters for replacing a club's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateClubParams {
    pub id: i32,
    pub name: String,
    pub state: StateCode,
    pub founded_at: NaiveDate,
}

impl UpdateClubParams {
    pub fn from_dto(id: i32, dto: UpdateClubDto) -> Result<Self, AppError> {
        let name = validate_name(&dto.name)?;
        validate_founding_date(dto.founded_at)?;

        Ok(Self {
            id,
            name,
            state: dto.state,
            founded_at: dto.founded_at,
        })
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "club name must have at least {} characters",
            MIN_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

fn validate_founding_date(founded_at: NaiveDate) -> Result<(), AppError> {
    if founded_at > Utc::now().date_naive() {
        return Err(AppError::BadRequest(
            "founding date cannot be in the future".to_string(),
        ));
    }

    Ok(())
}

/// Optional filters for club search. `None` fields do not restrict the result.
#[derive(Debug, Clone, Default)]
pub struct ClubFilter {
    /// Case-insensitive substring of the club name.
    pub name: Option<String>,
    pub state: Option<StateCode>,
    pub active: Option<bool>,
}

/// One page of clubs with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedClubs {
    pub clubs: Vec<Club>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedClubs {
    pub fn into_dto(self) -> PaginatedClubsDto {
        PaginatedClubsDto {
            clubs: self.clubs.into_iter().map(Club::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
