use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        matches::{MatchDto, MatchRequestDto, PaginatedMatchesDto},
    },
    server::{
        error::AppError,
        model::matches::{MatchFilter, MatchParams},
        service::matches::MatchService,
        state::AppState,
        util::parse::page_request,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

#[derive(Deserialize)]
pub struct MatchSearchParams {
    pub club_id: Option<i32>,
    pub stadium_id: Option<i32>,
    pub routs: Option<bool>,
    pub side: Option<String>,
    pub page: Option<u64>,
    pub entries: Option<u64>,
}

/// Record a played match.
///
/// The match is admitted only if the clubs differ and are active, the kickoff is not
/// before either club's foundation, neither club played within 48 hours and the stadium
/// hosts no other match that day.
///
/// # Returns
/// - `201 Created` - The stored match with result and winner
/// - `400 Bad Request` - Unknown club or stadium, same club twice, or future kickoff
/// - `409 Conflict` - An admission rule failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = MatchRequestDto,
    responses(
        (status = 201, description = "Successfully created match", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 409, description = "Match rejected by admission rules", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<MatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MatchService::new(&state.db);

    let params = MatchParams::from_dto(payload)?;

    let fixture = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(fixture.into_dto())))
}

/// Search matches in kickoff order.
///
/// `routs=true` keeps only matches decided by three goals or more. `side` restricts
/// `club_id` to home or away matches and requires `club_id`.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(
        ("club_id" = Option<i32>, Query, description = "Club on either side"),
        ("stadium_id" = Option<i32>, Query, description = "Stadium"),
        ("routs" = Option<bool>, Query, description = "Only wins by three goals or more"),
        ("side" = Option<String>, Query, description = "home/casa or away/fora"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved matches", body = PaginatedMatchesDto),
        (status = 400, description = "Invalid side", body = ErrorDto),
        (status = 404, description = "Club or stadium not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = MatchService::new(&state.db);

    let filter = MatchFilter::new(
        params.club_id,
        params.stadium_id,
        params.routs.unwrap_or(false),
        params.side.as_deref(),
    )?;
    let (page, per_page) = page_request(params.page, params.entries);

    let matches = service.search(filter, page, per_page).await?;

    Ok((StatusCode::OK, Json(matches.into_dto())))
}

/// Get a match by ID.
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_by_id(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MatchService::new(&state.db);

    let fixture = service.get_by_id(match_id).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Rewrite every field of a match.
///
/// The same admission rules as creation apply; the match does not conflict with itself.
#[utoipa::path(
    put,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    request_body = MatchRequestDto,
    responses(
        (status = 200, description = "Successfully updated match", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 409, description = "Match rejected by admission rules", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
    Json(payload): Json<MatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MatchService::new(&state.db);

    let params = MatchParams::from_dto(payload)?;

    let fixture = service.update(match_id, params).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Delete a match permanently.
#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted match"),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MatchService::new(&state.db);

    service.delete(match_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
