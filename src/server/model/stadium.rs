//! Stadium domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::stadium::{
        AddressDto, CreateStadiumDto, PaginatedStadiumsDto, StadiumDto, UpdateStadiumDto,
    },
    server::{error::AppError, model::Lifecycle, util::parse::normalize_postal_code},
};

/// Minimum length of a stadium name after trimming.
const MIN_NAME_LEN: usize = 3;

/// Postal address resolved from a postal code by the address lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    /// Postal code with the hyphen removed (8 digits).
    pub postal_code: String,
    pub street: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    /// Two-letter state code as returned by the lookup.
    pub state: String,
}

impl Address {
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            postal_code: self.postal_code,
            street: self.street,
            complement: self.complement,
            district: self.district,
            city: self.city,
            state: self.state,
        }
    }
}

/// Venue where matches are played. At most one match per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Stadium {
    pub id: i32,
    /// Display name, unique among stadiums (case-insensitive).
    pub name: String,
    pub lifecycle: Lifecycle,
    /// Absent when the stadium was stored without a postal code.
    pub address: Option<Address>,
}

impl Stadium {
    /// Converts an entity model to a stadium domain model at the repository boundary.
    ///
    /// The address columns are all-or-nothing: a stored postal code means the rest of the
    /// address was resolved alongside it.
    pub fn from_entity(entity: entity::stadiums::Model) -> Result<Self, DbErr> {
        let address = entity.postal_code.map(|postal_code| Address {
            postal_code,
            street: entity.street.unwrap_or_default(),
            complement: entity.complement.unwrap_or_default(),
            district: entity.district.unwrap_or_default(),
            city: entity.city.unwrap_or_default(),
            state: entity.state.unwrap_or_default(),
        });

        Ok(Self {
            id: entity.id,
            name: entity.name,
            lifecycle: Lifecycle::from_flag(entity.active),
            address,
        })
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn into_dto(self) -> StadiumDto {
        StadiumDto {
            id: self.id,
            name: self.name,
            address: self.address.map(Address::into_dto),
            active: self.lifecycle.is_active(),
        }
    }
}

/// Parameters for registering a new stadium.
#[derive(Debug, Clone)]
pub struct CreateStadiumParams {
    pub name: String,
    /// Normalized 8-digit postal code.
    pub postal_code: String,
}

impl CreateStadiumParams {
    /// Validates and converts a creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateStadiumParams)` - Name trimmed, postal code normalized
    /// - `Err(AppError::BadRequest)` - Name too short or malformed postal code
    pub fn from_dto(dto: CreateStadiumDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            postal_code: normalize_postal_code(&dto.postal_code)?,
        })
    }
}

/// Parameters for a partial stadium update. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateStadiumParams {
    pub id: i32,
    pub name: Option<String>,
    pub postal_code: Option<String>,
}

impl UpdateStadiumParams {
    pub fn from_dto(id: i32, dto: UpdateStadiumDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.as_deref().map(validate_name).transpose()?,
            postal_code: dto
                .postal_code
                .as_deref()
                .map(normalize_postal_code)
                .transpose()?,
        })
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "stadium name must have at least {} characters",
            MIN_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

/// One page of stadiums with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedStadiums {
    pub stadiums: Vec<Stadium>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStadiums {
    pub fn into_dto(self) -> PaginatedStadiumsDto {
        PaginatedStadiumsDto {
            stadiums: self.stadiums.into_iter().map(Stadium::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
