use sea_orm::DatabaseConnection;

use crate::server::{
    data::stadium::StadiumRepository,
    error::AppError,
    model::{
        stadium::{CreateStadiumParams, PaginatedStadiums, Stadium, UpdateStadiumParams},
        total_pages,
    },
    service::address::AddressLookup,
};

/// Stadium CRUD. Addresses are resolved through `L` whenever a postal code changes.
pub struct StadiumService<'a, L: AddressLookup> {
    db: &'a DatabaseConnection,
    address_lookup: &'a L,
}

impl<'a, L: AddressLookup> StadiumService<'a, L> {
    pub fn new(db: &'a DatabaseConnection, address_lookup: &'a L) -> Self {
        Self { db, address_lookup }
    }

    /// Registers a new active stadium at the address of its postal code
    ///
    /// # Returns
    /// - `Ok(Stadium)` - The created stadium
    /// - `Err(AppError::Conflict)` - Another stadium already uses this name
    /// - `Err(AppError::NotFound)` - The postal code does not resolve
    pub async fn create(&self, params: CreateStadiumParams) -> Result<Stadium, AppError> {
        let repo = StadiumRepository::new(self.db);

        if repo.name_exists(&params.name, None).await? {
            return Err(duplicate_stadium());
        }

        let address = self.address_lookup.resolve(&params.postal_code).await?;
        let stadium = repo.create(params.name, address).await?;

        tracing::info!("Created stadium {} ({})", stadium.id, stadium.name);

        Ok(stadium)
    }

    /// Gets an active stadium by ID; inactive stadiums are reported as not found
    pub async fn get_by_id(&self, id: i32) -> Result<Stadium, AppError> {
        StadiumRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(Stadium::is_active)
            .ok_or_else(stadium_not_found)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedStadiums, AppError> {
        let (stadiums, total) = StadiumRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedStadiums {
            stadiums,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Renames and/or moves a stadium.
    ///
    /// Uniqueness is re-checked only when the name actually changes, and the address is
    /// re-resolved only when the postal code differs from the stored one.
    pub async fn update(&self, params: UpdateStadiumParams) -> Result<Stadium, AppError> {
        let repo = StadiumRepository::new(self.db);

        let current = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(stadium_not_found)?;

        let name = match params.name {
            Some(name) if name.to_lowercase() != current.name.to_lowercase() => {
                if repo.name_exists(&name, Some(current.id)).await? {
                    return Err(duplicate_stadium());
                }
                Some(name)
            }
            // Same name in another letter case
            Some(name) if name != current.name => Some(name),
            _ => None,
        };

        let stored_code = current.address.as_ref().map(|a| a.postal_code.as_str());
        let address = match params.postal_code {
            Some(code) if Some(code.as_str()) != stored_code => {
                Some(self.address_lookup.resolve(&code).await?)
            }
            _ => None,
        };

        let stadium = repo.update(current.id, name, address).await?;

        tracing::info!("Updated stadium {}", stadium.id);

        Ok(stadium)
    }

    /// Soft-deletes a stadium by marking it inactive
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StadiumRepository::new(self.db);

        let stadium = repo.find_by_id(id).await?.ok_or_else(stadium_not_found)?;
        if !stadium.is_active() {
            return Err(AppError::Conflict("stadium already inactive".to_string()));
        }

        repo.set_active(id, false).await?;

        tracing::info!("Deactivated stadium {}", id);

        Ok(())
    }
}

fn stadium_not_found() -> AppError {
    AppError::NotFound("stadium not found".to_string())
}

fn duplicate_stadium() -> AppError {
    AppError::Conflict("stadium already exists".to_string())
}
