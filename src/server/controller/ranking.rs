use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, ranking::RankingRowDto},
    server::{error::AppError, service::ranking::RankingService, state::AppState},
};

/// Tag for grouping ranking endpoints in OpenAPI documentation
pub static RANKING_TAG: &str = "ranking";

#[derive(Deserialize)]
pub struct RankingParams {
    pub filter: Option<String>,
}

/// Rank clubs by a metric.
///
/// `filter` is one of `points`/`pontos`, `goals`/`gols`, `victories`/`vitorias` or
/// `matches`/`partidas`. Clubs scoring zero on the metric are left out.
///
/// # Returns
/// - `200 OK` - Ranking rows, best first
/// - `400 Bad Request` - Missing or unknown filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ranking",
    tag = RANKING_TAG,
    params(
        ("filter" = String, Query, description = "Metric to rank by")
    ),
    responses(
        (status = 200, description = "Successfully computed ranking", body = Vec<RankingRowDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ranking(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = params
        .filter
        .ok_or_else(|| AppError::BadRequest("filter is required".to_string()))?;

    let service = RankingService::new(&state.db);

    let rows = service.ranking(&filter).await?;

    let dtos: Vec<RankingRowDto> = rows.into_iter().map(|row| row.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
