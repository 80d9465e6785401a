use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::matches::{Match, MatchFilter, MatchParams, Side};

use entity::matches::Column;

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new match
    pub async fn create(&self, params: MatchParams) -> Result<Match, DbErr> {
        let entity = entity::matches::ActiveModel {
            home_club_id: ActiveValue::Set(params.home_club_id),
            away_club_id: ActiveValue::Set(params.away_club_id),
            stadium_id: ActiveValue::Set(params.stadium_id),
            kickoff: ActiveValue::Set(params.kickoff),
            home_goals: ActiveValue::Set(goals_to_column(params.home_goals)?),
            away_goals: ActiveValue::Set(goals_to_column(params.away_goals)?),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Match::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        entity::prelude::Matches::find_by_id(id)
            .one(self.db)
            .await?
            .map(Match::from_entity)
            .transpose()
    }

    /// Rewrites every field of an existing match
    pub async fn update(&self, id: i32, params: MatchParams) -> Result<Match, DbErr> {
        let fixture = entity::prelude::Matches::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Match {} not found", id)))?;

        let mut active_model = fixture.into_active_model();
        active_model.home_club_id = ActiveValue::Set(params.home_club_id);
        active_model.away_club_id = ActiveValue::Set(params.away_club_id);
        active_model.stadium_id = ActiveValue::Set(params.stadium_id);
        active_model.kickoff = ActiveValue::Set(params.kickoff);
        active_model.home_goals = ActiveValue::Set(goals_to_column(params.home_goals)?);
        active_model.away_goals = ActiveValue::Set(goals_to_column(params.away_goals)?);

        let entity = active_model.update(self.db).await?;

        Match::from_entity(entity)
    }

    /// Deletes a match, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Matches::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets matches of any of the given clubs with kickoff strictly inside `(from, to)`.
    ///
    /// `excluding` skips the match being updated.
    pub async fn for_clubs_between(
        &self,
        club_ids: &[i32],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        excluding: Option<i32>,
    ) -> Result<Vec<Match>, DbErr> {
        let clubs = Condition::any()
            .add(Column::HomeClubId.is_in(club_ids.iter().copied()))
            .add(Column::AwayClubId.is_in(club_ids.iter().copied()));

        let query = entity::prelude::Matches::find()
            .filter(clubs)
            .filter(Column::Kickoff.gt(from))
            .filter(Column::Kickoff.lt(to));

        exclude(query, excluding)
            .order_by_asc(Column::Kickoff)
            .all(self.db)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect()
    }

    /// Gets matches at a stadium with kickoff in `[from, to)`.
    pub async fn for_stadium_between(
        &self,
        stadium_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        excluding: Option<i32>,
    ) -> Result<Vec<Match>, DbErr> {
        let query = entity::prelude::Matches::find()
            .filter(Column::StadiumId.eq(stadium_id))
            .filter(Column::Kickoff.gte(from))
            .filter(Column::Kickoff.lt(to));

        exclude(query, excluding)
            .order_by_asc(Column::Kickoff)
            .all(self.db)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect()
    }

    /// Gets every match of a club, optionally restricted to one side, in kickoff order
    pub async fn for_club(&self, club_id: i32, side: Option<Side>) -> Result<Vec<Match>, DbErr> {
        entity::prelude::Matches::find()
            .filter(club_condition(club_id, side))
            .order_by_asc(Column::Kickoff)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect()
    }

    /// Gets every match between two clubs in kickoff order.
    ///
    /// `side` refers to the side `club_id` played on.
    pub async fn between_clubs(
        &self,
        club_id: i32,
        opponent_id: i32,
        side: Option<Side>,
    ) -> Result<Vec<Match>, DbErr> {
        let pairing = match side {
            Some(Side::Home) => Condition::all()
                .add(Column::HomeClubId.eq(club_id))
                .add(Column::AwayClubId.eq(opponent_id)),
            Some(Side::Away) => Condition::all()
                .add(Column::HomeClubId.eq(opponent_id))
                .add(Column::AwayClubId.eq(club_id)),
            None => Condition::any()
                .add(
                    Condition::all()
                        .add(Column::HomeClubId.eq(club_id))
                        .add(Column::AwayClubId.eq(opponent_id)),
                )
                .add(
                    Condition::all()
                        .add(Column::HomeClubId.eq(opponent_id))
                        .add(Column::AwayClubId.eq(club_id)),
                ),
        };

        entity::prelude::Matches::find()
            .filter(pairing)
            .order_by_asc(Column::Kickoff)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect()
    }

    /// Gets every recorded match in kickoff order
    pub async fn get_all(&self) -> Result<Vec<Match>, DbErr> {
        entity::prelude::Matches::find()
            .order_by_asc(Column::Kickoff)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect()
    }

    /// Gets one page of matches matching the filter, returning the page and the total count
    pub async fn search(
        &self,
        filter: MatchFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Match>, u64), DbErr> {
        let mut query = entity::prelude::Matches::find();

        if let Some(club_id) = filter.club_id {
            query = query.filter(club_condition(club_id, filter.side));
        }
        if let Some(stadium_id) = filter.stadium_id {
            query = query.filter(Column::StadiumId.eq(stadium_id));
        }
        if filter.routs {
            query = query.filter(Expr::cust("ABS(home_goals - away_goals) >= 3"));
        }

        let paginator = query
            .order_by_asc(Column::Kickoff)
            .order_by_asc(Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let matches = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((matches, total))
    }
}

fn club_condition(club_id: i32, side: Option<Side>) -> Condition {
    match side {
        Some(Side::Home) => Condition::all().add(Column::HomeClubId.eq(club_id)),
        Some(Side::Away) => Condition::all().add(Column::AwayClubId.eq(club_id)),
        None => Condition::any()
            .add(Column::HomeClubId.eq(club_id))
            .add(Column::AwayClubId.eq(club_id)),
    }
}

fn exclude(
    query: Select<entity::prelude::Matches>,
    excluding: Option<i32>,
) -> Select<entity::prelude::Matches> {
    match excluding {
        Some(id) => query.filter(Column::Id.ne(id)),
        None => query,
    }
}

fn goals_to_column(goals: u32) -> Result<i32, DbErr> {
    i32::try_from(goals).map_err(|e| DbErr::Custom(format!("Goal count out of range: {}", e)))
}
