use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::{
    balldontlie::Player,
    commands::{
        fetch_season_stats, pick_random_player, resolve_favorites, search_players,
        RandomPlayerOutcome, SearchOutcome, SeasonReport, SeasonStatsOutcome,
    },
    PlayerId,
};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// GET /api/players?name= - players matching a name, in upstream order
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Player>> {
    let raw = query.name.unwrap_or_default();
    match search_players(&state.client, &raw).await? {
        SearchOutcome::Found(players) => Ok(Json(players)),
        SearchOutcome::NoMatch { query } => Err(ApiError::not_found(
            "no_match",
            format!("No player found with the name '{query}'."),
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
}

/// GET /api/players/{player_id}/season-stats?season=
pub async fn season_stats(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
    Query(query): Query<SeasonQuery>,
) -> ApiResult<SeasonReport> {
    match fetch_season_stats(&state.client, player_id, query.season.as_deref()).await? {
        SeasonStatsOutcome::Found(report) => Ok(Json(report)),
        SeasonStatsOutcome::NoStats { player_id, season } => Err(ApiError::not_found(
            "no_stats",
            format!("No season stats found for player ID {player_id} in season {season}."),
        )),
    }
}

#[derive(Debug, Serialize)]
pub struct RandomPlayerResponse {
    pub player: Player,
    pub page: u32,
}

/// GET /api/players/random
pub async fn random_player(State(state): State<Arc<AppState>>) -> ApiResult<RandomPlayerResponse> {
    match pick_random_player(&state.client, &state.random).await? {
        RandomPlayerOutcome::Picked { player, page } => Ok(Json(RandomPlayerResponse { player, page })),
        RandomPlayerOutcome::EmptyPage { page } => Err(ApiError::not_found(
            "empty_page",
            format!("No players found on page {page}."),
        )),
    }
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub ids: Vec<String>,
    pub players: Vec<Player>,
}

/// GET /api/favorites - stored IDs and their resolved profiles
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> ApiResult<FavoritesResponse> {
    let (ids, players) = resolve_favorites(&state.client, &state.favorites)
        .await?
        .into_iter()
        .map(|fav| (fav.id, fav.player))
        .unzip();
    Ok(Json(FavoritesResponse { ids, players }))
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub player_id: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteChange {
    pub changed: bool,
    pub ids: Vec<String>,
}

/// POST /api/favorites - `{"player_id": "237"}`
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FavoriteRequest>,
) -> Json<FavoriteChange> {
    let changed = state.favorites.add(&req.player_id);
    Json(FavoriteChange {
        changed,
        ids: state.favorites.ids(),
    })
}

/// DELETE /api/favorites/{player_id}
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Json<FavoriteChange> {
    let changed = state.favorites.remove(&player_id);
    Json(FavoriteChange {
        changed,
        ids: state.favorites.ids(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
