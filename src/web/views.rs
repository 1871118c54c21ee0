//! Display-ready view models for templates.

use serde::Serialize;

use crate::{
    balldontlie::Player,
    commands::Favorite,
    favorites::FavoritesStore,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: String,
    /// Value posted by the add/remove forms: the stored entry when favorited.
    pub favorite_id: String,
    pub name: String,
    pub team: String,
    pub position: String,
    pub favorite: bool,
}

impl PlayerView {
    fn build(player: &Player, stored_id: Option<String>) -> Self {
        let id = player.id.to_string();
        Self {
            favorite: stored_id.is_some(),
            favorite_id: stored_id.unwrap_or_else(|| id.clone()),
            id,
            name: player.full_name(),
            team: player.team_name().to_string(),
            position: player.position_label().to_string(),
        }
    }

    pub fn new(player: &Player, favorites: &FavoritesStore) -> Self {
        Self::build(player, favorites.stored_id_for(player.id))
    }

    pub fn list(players: &[Player], favorites: &FavoritesStore) -> Vec<Self> {
        players
            .iter()
            .map(|player| Self::new(player, favorites))
            .collect()
    }

    pub fn favorites(favorites: &[Favorite]) -> Vec<Self> {
        favorites
            .iter()
            .map(|fav| Self::build(&fav.player, Some(fav.id.clone())))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}
