use sea_orm::DatabaseConnection;

use crate::server::{
    data::club::ClubRepository,
    error::AppError,
    model::{
        club::{Club, ClubFilter, CreateClubParams, PaginatedClubs, UpdateClubParams},
        total_pages,
    },
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new active club
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club
    /// - `Err(AppError::Conflict)` - Another club already uses this name in this state
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, AppError> {
        let repo = ClubRepository::new(self.db);

        if repo
            .name_exists_in_state(&params.name, params.state.as_str(), None)
            .await?
        {
            return Err(duplicate_club());
        }

        let club = repo.create(params).await?;

        tracing::info!("Created club {} ({}, {})", club.id, club.name, club.state);

        Ok(club)
    }

    /// Gets an active club by ID; inactive clubs are reported as not found
    pub async fn get_by_id(&self, id: i32) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(Club::is_active)
            .ok_or_else(club_not_found)
    }

    /// Gets one page of clubs matching the filter
    pub async fn search(
        &self,
        filter: ClubFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedClubs, AppError> {
        let (clubs, total) = ClubRepository::new(self.db)
            .search(filter, page, per_page)
            .await?;

        Ok(PaginatedClubs {
            clubs,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Replaces a club's name, state and founding date.
    ///
    /// Inactive clubs may be updated too.
    pub async fn update(&self, params: UpdateClubParams) -> Result<Club, AppError> {
        let repo = ClubRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(club_not_found());
        }

        if repo
            .name_exists_in_state(&params.name, params.state.as_str(), Some(params.id))
            .await?
        {
            return Err(duplicate_club());
        }

        let club = repo.update(params).await?;

        tracing::info!("Updated club {}", club.id);

        Ok(club)
    }

    /// Soft-deletes a club by marking it inactive
    ///
    /// # Returns
    /// - `Ok(())` - The club is now inactive
    /// - `Err(AppError::NotFound)` - Unknown club
    /// - `Err(AppError::Conflict)` - The club was already inactive
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClubRepository::new(self.db);

        let club = repo.find_by_id(id).await?.ok_or_else(club_not_found)?;
        if !club.is_active() {
            return Err(AppError::Conflict("club already inactive".to_string()));
        }

        repo.set_active(id, false).await?;

        tracing::info!("Deactivated club {}", id);

        Ok(())
    }
}

fn club_not_found() -> AppError {
    AppError::NotFound("club not found".to_string())
}

fn duplicate_club() -> AppError {
    AppError::Conflict("club with this name and state already exists".to_string())
}
