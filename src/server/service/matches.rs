use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{club::ClubRepository, matches::MatchRepository, stadium::StadiumRepository},
    error::{internal::InternalError, AppError},
    model::{
        matches::{Match, MatchDetails, MatchFilter, MatchParams, PaginatedMatches},
        total_pages,
    },
    service::admission::{Admitted, MatchAdmission},
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Admits and stores a new match.
    ///
    /// Resolution, validation and the insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(MatchDetails)` - The stored match with club and stadium names
    /// - `Err(AppError::BadRequest)` - Unknown club/stadium or same club twice
    /// - `Err(AppError::Conflict)` - An admission rule failed
    pub async fn create(&self, params: MatchParams) -> Result<MatchDetails, AppError> {
        let txn = self.db.begin().await?;

        let admitted = MatchAdmission::new(&txn).validate(&params, None).await?;
        let fixture = MatchRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Created match {}: {} vs {}",
            fixture.id,
            admitted.home.name,
            admitted.away.name
        );

        Ok(details(fixture, admitted))
    }

    /// Re-admits and rewrites every field of an existing match.
    ///
    /// The match being updated does not count against its own rest or stadium checks.
    pub async fn update(&self, id: i32, params: MatchParams) -> Result<MatchDetails, AppError> {
        let txn = self.db.begin().await?;

        let repo = MatchRepository::new(&txn);
        if repo.find_by_id(id).await?.is_none() {
            return Err(match_not_found());
        }

        let admitted = MatchAdmission::new(&txn)
            .validate(&params, Some(id))
            .await?;
        let fixture = repo.update(id, params).await?;

        txn.commit().await?;

        tracing::info!("Updated match {}", fixture.id);

        Ok(details(fixture, admitted))
    }

    /// Permanently removes a match
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MatchRepository::new(self.db).delete(id).await? {
            return Err(match_not_found());
        }

        tracing::info!("Deleted match {}", id);

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MatchDetails, AppError> {
        let fixture = MatchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(match_not_found)?;

        let mut enriched = self.with_names(vec![fixture]).await?;

        enriched.pop().ok_or_else(match_not_found)
    }

    /// Gets one page of matches in kickoff order.
    ///
    /// # Returns
    /// - `Ok(PaginatedMatches)` - The page, possibly empty
    /// - `Err(AppError::NotFound)` - `club_id` or `stadium_id` does not exist
    pub async fn search(
        &self,
        filter: MatchFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMatches, AppError> {
        if let Some(club_id) = filter.club_id {
            if ClubRepository::new(self.db).find_by_id(club_id).await?.is_none() {
                return Err(AppError::NotFound("club not found".to_string()));
            }
        }
        if let Some(stadium_id) = filter.stadium_id {
            if StadiumRepository::new(self.db)
                .find_by_id(stadium_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("stadium not found".to_string()));
            }
        }

        let (matches, total) = MatchRepository::new(self.db)
            .search(filter, page, per_page)
            .await?;

        Ok(PaginatedMatches {
            matches: self.with_names(matches).await?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Attaches club and stadium names, fetching each referenced record once.
    async fn with_names(&self, matches: Vec<Match>) -> Result<Vec<MatchDetails>, AppError> {
        let mut club_ids: Vec<i32> = matches
            .iter()
            .flat_map(|m| [m.home_club_id, m.away_club_id])
            .collect();
        club_ids.sort_unstable();
        club_ids.dedup();

        let mut stadium_ids: Vec<i32> = matches.iter().map(|m| m.stadium_id).collect();
        stadium_ids.sort_unstable();
        stadium_ids.dedup();

        let clubs: HashMap<i32, String> = ClubRepository::new(self.db)
            .find_by_ids(club_ids)
            .await?
            .into_iter()
            .map(|club| (club.id, club.name))
            .collect();
        let stadiums: HashMap<i32, String> = StadiumRepository::new(self.db)
            .find_by_ids(stadium_ids)
            .await?
            .into_iter()
            .map(|stadium| (stadium.id, stadium.name))
            .collect();

        matches
            .into_iter()
            .map(|fixture| {
                let home_club = lookup(&clubs, &fixture, "club", fixture.home_club_id)?;
                let away_club = lookup(&clubs, &fixture, "club", fixture.away_club_id)?;
                let stadium = lookup(&stadiums, &fixture, "stadium", fixture.stadium_id)?;

                Ok(MatchDetails {
                    fixture,
                    home_club,
                    away_club,
                    stadium,
                })
            })
            .collect()
    }
}

fn details(fixture: Match, admitted: Admitted) -> MatchDetails {
    MatchDetails {
        fixture,
        home_club: admitted.home.name,
        away_club: admitted.away.name,
        stadium: admitted.stadium.name,
    }
}

fn lookup(
    names: &HashMap<i32, String>,
    fixture: &Match,
    relation: &'static str,
    relation_id: i32,
) -> Result<String, AppError> {
    names.get(&relation_id).cloned().ok_or_else(|| {
        InternalError::MissingMatchRelation {
            match_id: fixture.id,
            relation,
            relation_id,
        }
        .into()
    })
}

fn match_not_found() -> AppError {
    AppError::NotFound("match not found".to_string())
}
