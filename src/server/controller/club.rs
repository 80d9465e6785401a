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
        club::{ClubDto, CreateClubDto, PaginatedClubsDto, StateCode, UpdateClubDto},
    },
    server::{
        error::AppError,
        model::club::{ClubFilter, CreateClubParams, UpdateClubParams},
        service::club::ClubService,
        state::AppState,
        util::parse::page_request,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

#[derive(Deserialize)]
pub struct ClubSearchParams {
    pub name: Option<String>,
    pub state: Option<String>,
    pub active: Option<bool>,
    pub page: Option<u64>,
    pub entries: Option<u64>,
}

/// Register a new club.
///
/// # Returns
/// - `201 Created` - The created club
/// - `400 Bad Request` - Name too short or founding date in the future
/// - `409 Conflict` - Another club already uses this name in this state
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Successfully created club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 409, description = "Duplicate name in state", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let params = CreateClubParams::from_dto(payload)?;

    let club = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// Search clubs.
///
/// All filters are optional. `name` matches any part of the club name regardless of
/// letter case.
#[utoipa::path(
    get,
    path = "/api/clubs",
    tag = CLUB_TAG,
    params(
        ("name" = Option<String>, Query, description = "Substring of the club name"),
        ("state" = Option<String>, Query, description = "Two-letter state code"),
        ("active" = Option<bool>, Query, description = "Lifecycle filter"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved clubs", body = PaginatedClubsDto),
        (status = 400, description = "Unknown state code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(
    State(state): State<AppState>,
    Query(params): Query<ClubSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let state_code = params
        .state
        .as_deref()
        .map(str::parse::<StateCode>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let filter = ClubFilter {
        name: params.name,
        state: state_code,
        active: params.active,
    };
    let (page, per_page) = page_request(params.page, params.entries);

    let clubs = service.search(filter, page, per_page).await?;

    Ok((StatusCode::OK, Json(clubs.into_dto())))
}

/// Get an active club by ID.
///
/// # Returns
/// - `200 OK` - Club details
/// - `404 Not Found` - Club does not exist or is inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}",
    tag = CLUB_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved club", body = ClubDto),
        (status = 404, description = "Club not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_by_id(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let club = service.get_by_id(club_id).await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// Replace a club's name, state and founding date.
#[utoipa::path(
    put,
    path = "/api/clubs/{club_id}",
    tag = CLUB_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Successfully updated club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 409, description = "Duplicate name in state", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
    Json(payload): Json<UpdateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    let params = UpdateClubParams::from_dto(club_id, payload)?;

    let club = service.update(params).await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// Deactivate a club.
///
/// Clubs are never removed; their matches keep referencing them.
///
/// # Returns
/// - `204 No Content` - Club deactivated
/// - `404 Not Found` - Club does not exist
/// - `409 Conflict` - Club already inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clubs/{club_id}",
    tag = CLUB_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated club"),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 409, description = "Club already inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClubService::new(&state.db);

    service.delete(club_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
