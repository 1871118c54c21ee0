use std::sync::Arc;

use crate::{
    balldontlie::BallDontLieClient, config::RandomPageSettings, favorites::FavoritesStore, Season,
};

/// Shared state for all handlers
pub struct AppState {
    pub client: BallDontLieClient,
    pub favorites: FavoritesStore,
    pub random: RandomPageSettings,
    /// Options for the season picker, newest first.
    pub seasons: Vec<Season>,
}

impl AppState {
    pub fn new(
        client: BallDontLieClient,
        random: RandomPageSettings,
        latest_season: Season,
    ) -> Arc<Self> {
        Arc::new(Self {
            client,
            favorites: FavoritesStore::new(),
            random,
            seasons: Season::descending_from(latest_season),
        })
    }
}
