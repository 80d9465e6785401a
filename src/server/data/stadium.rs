use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::stadium::{Address, Stadium};

pub struct StadiumRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StadiumRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active stadium at the given address
    pub async fn create(&self, name: String, address: Address) -> Result<Stadium, DbErr> {
        let entity = entity::stadiums::ActiveModel {
            name: ActiveValue::Set(name),
            active: ActiveValue::Set(true),
            postal_code: ActiveValue::Set(Some(address.postal_code)),
            street: ActiveValue::Set(Some(address.street)),
            complement: ActiveValue::Set(Some(address.complement)),
            district: ActiveValue::Set(Some(address.district)),
            city: ActiveValue::Set(Some(address.city)),
            state: ActiveValue::Set(Some(address.state)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Stadium::from_entity(entity)
    }

    /// Gets a stadium by ID regardless of its lifecycle
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Stadium>, DbErr> {
        entity::prelude::Stadiums::find_by_id(id)
            .one(self.db)
            .await?
            .map(Stadium::from_entity)
            .transpose()
    }

    /// Gets every stadium whose ID is in `ids`
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Stadium>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Stadiums::find()
            .filter(entity::stadiums::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(Stadium::from_entity)
            .collect()
    }

    /// Gets one page of stadiums in ID order, returning the page and the total count
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Stadium>, u64), DbErr> {
        let paginator = entity::prelude::Stadiums::find()
            .order_by_asc(entity::stadiums::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let stadiums = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Stadium::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((stadiums, total))
    }

    /// Checks whether another stadium already uses this name (case-insensitive).
    pub async fn name_exists(&self, name: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        // SQLite LIKE only folds ASCII case, so names are compared here instead
        let mut query = entity::prelude::Stadiums::find();

        if let Some(id) = excluding {
            query = query.filter(entity::stadiums::Column::Id.ne(id));
        }

        let name = name.to_lowercase();
        let stadiums = query.all(self.db).await?;

        Ok(stadiums
            .iter()
            .any(|stadium| stadium.name.to_lowercase() == name))
    }

    /// Updates the name and/or address of a stadium. `None` leaves a field unchanged.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        address: Option<Address>,
    ) -> Result<Stadium, DbErr> {
        let stadium = entity::prelude::Stadiums::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Stadium {} not found", id)))?;

        let mut active_model = stadium.into_active_model();
        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(address) = address {
            active_model.postal_code = ActiveValue::Set(Some(address.postal_code));
            active_model.street = ActiveValue::Set(Some(address.street));
            active_model.complement = ActiveValue::Set(Some(address.complement));
            active_model.district = ActiveValue::Set(Some(address.district));
            active_model.city = ActiveValue::Set(Some(address.city));
            active_model.state = ActiveValue::Set(Some(address.state));
        }

        let entity = active_model.update(self.db).await?;

        Stadium::from_entity(entity)
    }

    /// Sets the active flag of a stadium
    pub async fn set_active(&self, id: i32, active: bool) -> Result<Stadium, DbErr> {
        let stadium = entity::prelude::Stadiums::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Stadium {} not found", id)))?;

        let mut active_model = stadium.into_active_model();
        active_model.active = ActiveValue::Set(active);

        let entity = active_model.update(self.db).await?;

        Stadium::from_entity(entity)
    }
}
