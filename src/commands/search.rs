//! Player search by free-text name.

use crate::{
    balldontlie::{BallDontLieClient, Player},
    error::{CourtsideError, Result},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Matches in the order the API returned them.
    Found(Vec<Player>),
    NoMatch { query: String },
}

/// Search players by first or last name.
///
/// Blank queries are rejected before any request is made.
pub async fn search_players(client: &BallDontLieClient, raw_query: &str) -> Result<SearchOutcome> {
    let query = raw_query.trim();
    if query.is_empty() {
        return Err(CourtsideError::invalid_input(
            "player_name",
            "player name cannot be empty, please enter a valid name",
        ));
    }

    let players = client.search_players(query).await?;
    if players.is_empty() {
        tracing::info!(query, "no player matched search");
        return Ok(SearchOutcome::NoMatch {
            query: query.to_string(),
        });
    }

    tracing::info!(query, matches = players.len(), "player search");
    Ok(SearchOutcome::Found(players))
}
