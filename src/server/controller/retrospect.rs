use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        retrospect::{OpponentRetrospectDto, RetrospectDto},
    },
    server::{
        controller::SideParams, error::AppError, service::retrospect::RetrospectService,
        state::AppState,
    },
};

/// Tag for grouping retrospective endpoints in OpenAPI documentation
pub static RETROSPECT_TAG: &str = "retrospect";

/// Summarize a club's matches.
///
/// `side` accepts `home`/`casa` or `away`/`fora` in any letter case; omit it to count
/// both sides.
///
/// # Returns
/// - `200 OK` - Club name with match, result and goal totals
/// - `400 Bad Request` - Unknown side keyword
/// - `404 Not Found` - Club does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}/retrospect",
    tag = RETROSPECT_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID"),
        ("side" = Option<String>, Query, description = "home/casa or away/fora")
    ),
    responses(
        (status = 200, description = "Successfully computed retrospective", body = RetrospectDto),
        (status = 400, description = "Invalid side", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_retrospect(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
    Query(params): Query<SideParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RetrospectService::new(&state.db);

    let retrospect = service.club(club_id, params.side.as_deref()).await?;

    Ok((StatusCode::OK, Json(retrospect.into_dto())))
}

/// Summarize a club's matches per opponent.
///
/// Opponents are listed in the order the club first met them.
#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}/opponents/retrospect",
    tag = RETROSPECT_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID"),
        ("side" = Option<String>, Query, description = "home/casa or away/fora")
    ),
    responses(
        (status = 200, description = "Successfully computed retrospectives", body = Vec<OpponentRetrospectDto>),
        (status = 400, description = "Invalid side", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_opponents_retrospect(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
    Query(params): Query<SideParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RetrospectService::new(&state.db);

    let rows = service.opponents(club_id, params.side.as_deref()).await?;

    let dtos: Vec<OpponentRetrospectDto> = rows.into_iter().map(|row| row.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Summarize a club's matches against one opponent.
///
/// An opponent the club never faced yields zero totals.
#[utoipa::path(
    get,
    path = "/api/clubs/{club_id}/opponents/{opponent_id}/retrospect",
    tag = RETROSPECT_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID"),
        ("opponent_id" = i32, Path, description = "Opponent club ID"),
        ("side" = Option<String>, Query, description = "Side the club played on: home/casa or away/fora")
    ),
    responses(
        (status = 200, description = "Successfully computed retrospective", body = OpponentRetrospectDto),
        (status = 400, description = "Invalid side", body = ErrorDto),
        (status = 404, description = "Club or opponent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_opponent_retrospect(
    State(state): State<AppState>,
    Path((club_id, opponent_id)): Path<(i32, i32)>,
    Query(params): Query<SideParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RetrospectService::new(&state.db);

    let row = service
        .against(club_id, opponent_id, params.side.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(row.into_dto())))
}
