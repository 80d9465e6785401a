use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stadium::{CreateStadiumDto, PaginatedStadiumsDto, StadiumDto, UpdateStadiumDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::stadium::{CreateStadiumParams, UpdateStadiumParams},
        service::stadium::StadiumService,
        state::AppState,
    },
};

/// Tag for grouping stadium endpoints in OpenAPI documentation
pub static STADIUM_TAG: &str = "stadium";

/// Register a new stadium.
///
/// The address is resolved from the postal code, which may be written as `99999-999`
/// or `99999999`.
///
/// # Returns
/// - `201 Created` - The created stadium with its address
/// - `400 Bad Request` - Name too short or malformed postal code
/// - `404 Not Found` - Postal code does not exist
/// - `409 Conflict` - Another stadium already uses this name
/// - `500 Internal Server Error` - Database or lookup service error
#[utoipa::path(
    post,
    path = "/api/stadiums",
    tag = STADIUM_TAG,
    request_body = CreateStadiumDto,
    responses(
        (status = 201, description = "Successfully created stadium", body = StadiumDto),
        (status = 400, description = "Invalid stadium data", body = ErrorDto),
        (status = 404, description = "Postal code not found", body = ErrorDto),
        (status = 409, description = "Duplicate stadium name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_stadium(
    State(state): State<AppState>,
    Json(payload): Json<CreateStadiumDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StadiumService::new(&state.db, &state.address_lookup);

    let params = CreateStadiumParams::from_dto(payload)?;

    let stadium = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(stadium.into_dto())))
}

/// List stadiums, active or not.
#[utoipa::path(
    get,
    path = "/api/stadiums",
    tag = STADIUM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved stadiums", body = PaginatedStadiumsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stadiums(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StadiumService::new(&state.db, &state.address_lookup);

    let (page, per_page) = params.resolve();

    let stadiums = service.get_paginated(page, per_page).await?;

    Ok((StatusCode::OK, Json(stadiums.into_dto())))
}

/// Get an active stadium by ID.
#[utoipa::path(
    get,
    path = "/api/stadiums/{stadium_id}",
    tag = STADIUM_TAG,
    params(
        ("stadium_id" = i32, Path, description = "Stadium ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved stadium", body = StadiumDto),
        (status = 404, description = "Stadium not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stadium_by_id(
    State(state): State<AppState>,
    Path(stadium_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StadiumService::new(&state.db, &state.address_lookup);

    let stadium = service.get_by_id(stadium_id).await?;

    Ok((StatusCode::OK, Json(stadium.into_dto())))
}

/// Rename and/or move a stadium.
///
/// Omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/stadiums/{stadium_id}",
    tag = STADIUM_TAG,
    params(
        ("stadium_id" = i32, Path, description = "Stadium ID")
    ),
    request_body = UpdateStadiumDto,
    responses(
        (status = 200, description = "Successfully updated stadium", body = StadiumDto),
        (status = 400, description = "Invalid stadium data", body = ErrorDto),
        (status = 404, description = "Stadium or postal code not found", body = ErrorDto),
        (status = 409, description = "Duplicate stadium name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stadium(
    State(state): State<AppState>,
    Path(stadium_id): Path<i32>,
    Json(payload): Json<UpdateStadiumDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StadiumService::new(&state.db, &state.address_lookup);

    let params = UpdateStadiumParams::from_dto(stadium_id, payload)?;

    let stadium = service.update(params).await?;

    Ok((StatusCode::OK, Json(stadium.into_dto())))
}

/// Deactivate a stadium.
#[utoipa::path(
    delete,
    path = "/api/stadiums/{stadium_id}",
    tag = STADIUM_TAG,
    params(
        ("stadium_id" = i32, Path, description = "Stadium ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated stadium"),
        (status = 404, description = "Stadium not found", body = ErrorDto),
        (status = 409, description = "Stadium already inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_stadium(
    State(state): State<AppState>,
    Path(stadium_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StadiumService::new(&state.db, &state.address_lookup);

    service.delete(stadium_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
