//! Resolve stored favorite IDs into player profiles.

use serde::Serialize;

use crate::{
    balldontlie::{BallDontLieClient, Player},
    favorites::FavoritesStore,
    Result,
};

/// A stored favorite and the profile it resolved to.
///
/// `id` is the entry exactly as stored, which may differ from `player.id`
/// in spelling (`"0237"` vs `237`); removal must use `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub id: String,
    pub player: Player,
}

/// Fetch the profile of every favorite, in stored order.
///
/// Works from a single snapshot of the store. Requests run one after another
/// and the first failure aborts the whole operation; no partial list is ever
/// returned.
pub async fn resolve_favorites(
    client: &BallDontLieClient,
    store: &FavoritesStore,
) -> Result<Vec<Favorite>> {
    let ids = store.ids();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut favorites = Vec::with_capacity(ids.len());
    for id in ids {
        let player = client.player(&id).await.inspect_err(|e| {
            tracing::warn!(player_id = %id, error = %e, "favorite lookup failed");
        })?;
        favorites.push(Favorite { id, player });
    }

    tracing::debug!(count = favorites.len(), "favorites resolved");
    Ok(favorites)
}
