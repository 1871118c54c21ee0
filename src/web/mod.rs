//! HTTP front-end: HTML pages for people, a JSON API for programs.

mod error;
mod pages;
mod rest;
mod state;
mod views;

pub use error::{status_for, ApiError, PageError};
pub use state::AppState;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, Result};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(pages::home))
        .route("/player", get(pages::player))
        .route("/player/{player_id}/season-stats", get(pages::season_stats))
        .route("/add-to-favorites", post(pages::add_to_favorites))
        .route("/remove-from-favorites", post(pages::remove_from_favorites))
        .route("/favorites", get(pages::favorites))
        .route("/random-player", get(pages::random_player))
        // JSON API
        .route("/api/players", get(rest::search))
        .route("/api/players/random", get(rest::random_player))
        .route(
            "/api/players/{player_id}/season-stats",
            get(rest::season_stats),
        )
        .route(
            "/api/favorites",
            get(rest::list_favorites).post(rest::add_favorite),
        )
        .route("/api/favorites/{player_id}", delete(rest::remove_favorite))
        .route("/health", get(rest::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
