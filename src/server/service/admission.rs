//! Admission rules applied before a match is created or updated.
//!
//! Each rule is a pure function over already-fetched records so it can be tested without
//! a database. `MatchAdmission` resolves the referenced records, fetches the relevant
//! slices of match history and runs the rules in a fixed fail-fast order:
//!
//! 1. Distinct clubs
//! 2. Both clubs active
//! 3. Kickoff not before either club's foundation
//! 4. Neither club has another match within 48 hours
//! 5. Stadium has no other match on the same UTC calendar day

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{club::ClubRepository, matches::MatchRepository, stadium::StadiumRepository},
    error::AppError,
    model::{club::Club, matches::Match, matches::MatchParams, stadium::Stadium},
};

/// Minimum gap between two matches of the same club. A gap of exactly this long is allowed.
pub const REST_HOURS: i64 = 48;

pub fn ensure_distinct_clubs(home: &Club, away: &Club) -> Result<(), AppError> {
    if home.id == away.id {
        return Err(AppError::BadRequest("clubs must differ".to_string()));
    }

    Ok(())
}

pub fn ensure_clubs_active(home: &Club, away: &Club) -> Result<(), AppError> {
    if !home.is_active() || !away.is_active() {
        return Err(AppError::Conflict("inactive club".to_string()));
    }

    Ok(())
}

/// Compares the kickoff's UTC calendar day with both founding dates.
pub fn ensure_after_foundation(
    kickoff: DateTime<Utc>,
    home: &Club,
    away: &Club,
) -> Result<(), AppError> {
    let day = kickoff.date_naive();
    if day < home.founded_at || day < away.founded_at {
        return Err(AppError::Conflict(
            "match predates club foundation".to_string(),
        ));
    }

    Ok(())
}

/// Rejects the kickoff if any match in `history` involving one of `club_ids` is less than
/// [`REST_HOURS`] away from it.
pub fn ensure_rested(
    kickoff: DateTime<Utc>,
    club_ids: [i32; 2],
    history: &[Match],
    excluding: Option<i32>,
) -> Result<(), AppError> {
    let rest = Duration::hours(REST_HOURS);

    let clash = history
        .iter()
        .filter(|m| Some(m.id) != excluding)
        .filter(|m| club_ids.iter().any(|id| m.involves(*id)))
        .any(|m| (m.kickoff - kickoff).abs() < rest);

    if clash {
        return Err(AppError::Conflict(
            "club has a match within 48 hours".to_string(),
        ));
    }

    Ok(())
}

/// Rejects the kickoff if the stadium already hosts a match on the same UTC date.
pub fn ensure_stadium_free(
    stadium_id: i32,
    kickoff: DateTime<Utc>,
    history: &[Match],
    excluding: Option<i32>,
) -> Result<(), AppError> {
    let day = kickoff.date_naive();

    let booked = history
        .iter()
        .filter(|m| Some(m.id) != excluding)
        .any(|m| m.stadium_id == stadium_id && m.kickoff.date_naive() == day);

    if booked {
        return Err(AppError::Conflict(
            "stadium already booked that day".to_string(),
        ));
    }

    Ok(())
}

/// Records resolved while admitting a match, reused to present the saved match.
#[derive(Debug, Clone)]
pub struct Admitted {
    pub home: Club,
    pub away: Club,
    pub stadium: Stadium,
}

/// Runs every admission rule against the database state visible through `db`.
pub struct MatchAdmission<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchAdmission<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// A missing club is a malformed reference in the request, not a missing resource.
    pub async fn find_club_or_fail(&self, id: i32) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest("club not found".to_string()))
    }

    pub async fn find_stadium_or_fail(&self, id: i32) -> Result<Stadium, AppError> {
        StadiumRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest("stadium not found".to_string()))
    }

    /// Validates a candidate match.
    ///
    /// # Arguments
    /// - `params` - The match as it would be stored
    /// - `excluding` - ID of the match being updated, left out of the history checks
    ///
    /// # Returns
    /// - `Ok(Admitted)` - Every rule passed
    /// - `Err(AppError::BadRequest)` - Unknown club/stadium or same club on both sides
    /// - `Err(AppError::Conflict)` - A scheduling or lifecycle rule failed
    pub async fn validate(
        &self,
        params: &MatchParams,
        excluding: Option<i32>,
    ) -> Result<Admitted, AppError> {
        let result = self.run_rules(params, excluding).await;

        if let Err(AppError::BadRequest(reason) | AppError::Conflict(reason)) = &result {
            tracing::debug!(
                "Rejected match {} vs {} at {}: {}",
                params.home_club_id,
                params.away_club_id,
                params.kickoff,
                reason
            );
        }

        result
    }

    async fn run_rules(
        &self,
        params: &MatchParams,
        excluding: Option<i32>,
    ) -> Result<Admitted, AppError> {
        let home = self.find_club_or_fail(params.home_club_id).await?;
        let away = self.find_club_or_fail(params.away_club_id).await?;
        let stadium = self.find_stadium_or_fail(params.stadium_id).await?;

        ensure_distinct_clubs(&home, &away)?;
        ensure_clubs_active(&home, &away)?;
        ensure_after_foundation(params.kickoff, &home, &away)?;

        let repo = MatchRepository::new(self.db);
        let rest = Duration::hours(REST_HOURS);

        let nearby = repo
            .for_clubs_between(
                &[home.id, away.id],
                params.kickoff - rest,
                params.kickoff + rest,
                excluding,
            )
            .await?;
        ensure_rested(params.kickoff, [home.id, away.id], &nearby, excluding)?;

        let day_start = params.kickoff.date_naive().and_time(NaiveTime::MIN).and_utc();
        let same_day = repo
            .for_stadium_between(
                stadium.id,
                day_start,
                day_start + Duration::days(1),
                excluding,
            )
            .await?;
        ensure_stadium_free(stadium.id, params.kickoff, &same_day, excluding)?;

        Ok(Admitted {
            home,
            away,
            stadium,
        })
    }
}
