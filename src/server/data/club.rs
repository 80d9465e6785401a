use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::club::{Club, ClubFilter, CreateClubParams, UpdateClubParams};

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active club
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, DbErr> {
        let entity = entity::clubs::ActiveModel {
            name: ActiveValue::Set(params.name),
            state: ActiveValue::Set(params.state.as_str().to_string()),
            active: ActiveValue::Set(true),
            founded_at: ActiveValue::Set(params.founded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Club::from_entity(entity)
    }

    /// Gets a club by ID regardless of its lifecycle
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Club>, DbErr> {
        entity::prelude::Clubs::find_by_id(id)
            .one(self.db)
            .await?
            .map(Club::from_entity)
            .transpose()
    }

    /// Gets every club whose ID is in `ids`, in ID order
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Club>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Clubs::find()
            .filter(entity::clubs::Column::Id.is_in(ids))
            .order_by_asc(entity::clubs::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Club::from_entity)
            .collect()
    }

    /// Gets every club, active or not, in ID order
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        entity::prelude::Clubs::find()
            .order_by_asc(entity::clubs::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Club::from_entity)
            .collect()
    }

    /// Gets one page of clubs matching the filter, returning the page and the total count.
    ///
    /// The name filter is a case-insensitive substring match folded in Rust, since SQLite
    /// `LIKE` only folds ASCII and treats `%` and `_` as wildcards.
    pub async fn search(
        &self,
        filter: ClubFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Club>, u64), DbErr> {
        let mut query = entity::prelude::Clubs::find();

        if let Some(state) = filter.state {
            query = query.filter(entity::clubs::Column::State.eq(state.as_str()));
        }
        if let Some(active) = filter.active {
            query = query.filter(entity::clubs::Column::Active.eq(active));
        }

        let Some(name) = filter.name else {
            let paginator = query
                .order_by_asc(entity::clubs::Column::Id)
                .paginate(self.db, per_page);

            let total = paginator.num_items().await?;
            let clubs = paginator
                .fetch_page(page)
                .await?
                .into_iter()
                .map(Club::from_entity)
                .collect::<Result<Vec<_>, _>>()?;

            return Ok((clubs, total));
        };

        let needle = name.trim().to_lowercase();
        let matching: Vec<entity::clubs::Model> = query
            .order_by_asc(entity::clubs::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|club| club.name.to_lowercase().contains(&needle))
            .collect();

        let total = matching.len() as u64;
        let skip = usize::try_from(page.saturating_mul(per_page)).unwrap_or(usize::MAX);
        let take = usize::try_from(per_page).unwrap_or(usize::MAX);
        let clubs = matching
            .into_iter()
            .skip(skip)
            .take(take)
            .map(Club::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((clubs, total))
    }

    /// Checks whether another club already uses this name in this state.
    ///
    /// Names are compared case-insensitively. `excluding` skips the club being updated.
    pub async fn name_exists_in_state(
        &self,
        name: &str,
        state: &str,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Clubs::find().filter(entity::clubs::Column::State.eq(state));

        if let Some(id) = excluding {
            query = query.filter(entity::clubs::Column::Id.ne(id));
        }

        let name = name.to_lowercase();
        let clubs = query.all(self.db).await?;

        Ok(clubs.iter().any(|club| club.name.to_lowercase() == name))
    }

    /// Replaces a club's name, state and founding date
    pub async fn update(&self, params: UpdateClubParams) -> Result<Club, DbErr> {
        let club = entity::prelude::Clubs::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Club {} not found", params.id)))?;

        let mut active_model = club.into_active_model();
        active_model.name = ActiveValue::Set(params.name);
        active_model.state = ActiveValue::Set(params.state.as_str().to_string());
        active_model.founded_at = ActiveValue::Set(params.founded_at);

        let entity = active_model.update(self.db).await?;

        Club::from_entity(entity)
    }

    /// Sets the active flag of a club
    pub async fn set_active(&self, id: i32, active: bool) -> Result<Club, DbErr> {
        let club = entity::prelude::Clubs::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Club {} not found", id)))?;

        let mut active_model = club.into_active_model();
        active_model.active = ActiveValue::Set(active);

        let entity = active_model.update(self.db).await?;

        Club::from_entity(entity)
    }
}
