use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use super::error::{MessagePage, PageError};
use super::state::AppState;
use super::views::{PlayerView, StatLine};
use crate::{
    commands::{
        fetch_season_stats, pick_random_player, resolve_favorites, search_players,
        RandomPlayerOutcome, SearchOutcome, SeasonStatsOutcome,
    },
    error::CourtsideError,
    PlayerId, Season,
};

type PageResult = Result<Response, PageError>;

/// Helper to render templates into axum responses
fn render<T: Template>(template: &T) -> PageResult {
    let html = template.render().map_err(CourtsideError::from)?;
    Ok(Html(html).into_response())
}

/// Negative outcomes are ordinary pages, not errors.
fn message(title: &str, message: String) -> PageResult {
    render(&MessagePage {
        title: title.to_string(),
        message,
    })
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage;

/// GET / - search form
pub async fn home() -> PageResult {
    render(&HomePage)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub player_name: Option<String>,
}

#[derive(Template)]
#[template(path = "players.html")]
pub struct PlayersPage<'a> {
    pub query: String,
    pub players: Vec<PlayerView>,
    pub seasons: &'a [Season],
}

/// GET /player?player_name= - search results
pub async fn player(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> PageResult {
    let raw = params.player_name.unwrap_or_default();

    match search_players(&state.client, &raw).await? {
        SearchOutcome::Found(players) => render(&PlayersPage {
            query: raw.trim().to_string(),
            players: PlayerView::list(&players, &state.favorites),
            seasons: &state.seasons,
        }),
        SearchOutcome::NoMatch { query } => message(
            "No player found",
            format!("No player found with the name '{query}'."),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    #[serde(default)]
    pub player_id: String,
}

/// POST /add-to-favorites
pub async fn add_to_favorites(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FavoriteForm>,
) -> Redirect {
    state.favorites.add(&form.player_id);
    Redirect::to("/favorites")
}

/// POST /remove-from-favorites
pub async fn remove_from_favorites(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FavoriteForm>,
) -> Redirect {
    state.favorites.remove(&form.player_id);
    Redirect::to("/favorites")
}

#[derive(Template)]
#[template(path = "favorites.html")]
pub struct FavoritesPage {
    pub players: Vec<PlayerView>,
}

/// GET /favorites
pub async fn favorites(State(state): State<Arc<AppState>>) -> PageResult {
    let favorites = resolve_favorites(&state.client, &state.favorites).await?;
    render(&FavoritesPage {
        players: PlayerView::favorites(&favorites),
    })
}

#[derive(Debug, Deserialize)]
pub struct SeasonParams {
    pub season: Option<String>,
}

#[derive(Template)]
#[template(path = "season_stats.html")]
pub struct SeasonStatsPage {
    pub player: PlayerView,
    pub season: Season,
    pub stat_lines: Vec<StatLine>,
}

/// GET /player/{player_id}/season-stats?season=
pub async fn season_stats(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
    Query(params): Query<SeasonParams>,
) -> PageResult {
    match fetch_season_stats(&state.client, player_id, params.season.as_deref()).await? {
        SeasonStatsOutcome::Found(report) => render(&SeasonStatsPage {
            player: PlayerView::new(&report.player, &state.favorites),
            season: report.season,
            stat_lines: report
                .stats
                .stat_lines()
                .into_iter()
                .map(|(label, value)| StatLine { label, value })
                .collect(),
        }),
        SeasonStatsOutcome::NoStats { player_id, season } => message(
            "No stats",
            format!("No season stats found for player ID {player_id} in season {season}."),
        ),
    }
}

#[derive(Template)]
#[template(path = "random_player.html")]
pub struct RandomPlayerPage<'a> {
    pub player: PlayerView,
    pub seasons: &'a [Season],
}

/// GET /random-player
pub async fn random_player(State(state): State<Arc<AppState>>) -> PageResult {
    match pick_random_player(&state.client, &state.random).await? {
        RandomPlayerOutcome::Picked { player, .. } => render(&RandomPlayerPage {
            player: PlayerView::new(&player, &state.favorites),
            seasons: &state.seasons,
        }),
        RandomPlayerOutcome::EmptyPage { .. } => message(
            "Random player",
            "No players found on this page.".to_string(),
        ),
    }
}
