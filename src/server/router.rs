use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        club::{ClubDto, CreateClubDto, PaginatedClubsDto, StateCode, UpdateClubDto},
        matches::{MatchDto, MatchRequestDto, PaginatedMatchesDto},
        ranking::RankingRowDto,
        retrospect::{OpponentRetrospectDto, RetrospectDto},
        stadium::{AddressDto, CreateStadiumDto, PaginatedStadiumsDto, StadiumDto, UpdateStadiumDto},
    },
    server::{
        controller::{club, matches, ranking, retrospect, stadium},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Matchboard API", description = "Clubs, stadiums, matches and league statistics"),
    paths(
        club::create_club,
        club::get_clubs,
        club::get_club_by_id,
        club::update_club,
        club::delete_club,
        retrospect::get_club_retrospect,
        retrospect::get_opponents_retrospect,
        retrospect::get_opponent_retrospect,
        stadium::create_stadium,
        stadium::get_stadiums,
        stadium::get_stadium_by_id,
        stadium::update_stadium,
        stadium::delete_stadium,
        matches::create_match,
        matches::get_matches,
        matches::get_match_by_id,
        matches::update_match,
        matches::delete_match,
        ranking::get_ranking,
    ),
    components(schemas(
        ErrorDto,
        StateCode,
        ClubDto,
        CreateClubDto,
        UpdateClubDto,
        PaginatedClubsDto,
        AddressDto,
        StadiumDto,
        CreateStadiumDto,
        UpdateStadiumDto,
        PaginatedStadiumsDto,
        MatchDto,
        MatchRequestDto,
        PaginatedMatchesDto,
        RetrospectDto,
        OpponentRetrospectDto,
        RankingRowDto,
    )),
    tags(
        (name = "club", description = "Club registration and lifecycle"),
        (name = "retrospect", description = "Per-club match history summaries"),
        (name = "stadium", description = "Stadium registration and lifecycle"),
        (name = "match", description = "Match recording and admission"),
        (name = "ranking", description = "League ranking"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/clubs", get(club::get_clubs).post(club::create_club))
        .route(
            "/api/clubs/{club_id}",
            get(club::get_club_by_id)
                .put(club::update_club)
                .delete(club::delete_club),
        )
        .route(
            "/api/clubs/{club_id}/retrospect",
            get(retrospect::get_club_retrospect),
        )
        .route(
            "/api/clubs/{club_id}/opponents/retrospect",
            get(retrospect::get_opponents_retrospect),
        )
        .route(
            "/api/clubs/{club_id}/opponents/{opponent_id}/retrospect",
            get(retrospect::get_opponent_retrospect),
        )
        .route(
            "/api/stadiums",
            get(stadium::get_stadiums).post(stadium::create_stadium),
        )
        .route(
            "/api/stadiums/{stadium_id}",
            get(stadium::get_stadium_by_id)
                .put(stadium::update_stadium)
                .delete(stadium::delete_stadium),
        )
        .route(
            "/api/matches",
            get(matches::get_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/{match_id}",
            get(matches::get_match_by_id)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        .route("/api/ranking", get(ranking::get_ranking))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
