//! Season averages for one player.

use serde::Serialize;

use crate::{
    balldontlie::{BallDontLieClient, Player, SeasonAverages},
    PlayerId, Result, Season,
};

/// A player's profile together with their averages for one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub player: Player,
    pub stats: SeasonAverages,
    pub season: Season,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeasonStatsOutcome {
    Found(SeasonReport),
    NoStats { player_id: PlayerId, season: Season },
}

/// Fetch season averages, then the player profile.
///
/// `season` is the raw request parameter; absent or non-numeric values are
/// `InvalidInput`. When the API returns several records the first one wins.
/// The profile is only requested once averages exist.
pub async fn fetch_season_stats(
    client: &BallDontLieClient,
    player_id: PlayerId,
    season: Option<&str>,
) -> Result<SeasonStatsOutcome> {
    let season = Season::from_param(season)?;

    let records = client.season_averages(season, player_id).await?;
    if records.len() > 1 {
        tracing::debug!(%player_id, %season, records = records.len(), "using first season record");
    }
    let Some(stats) = records.into_iter().next() else {
        tracing::info!(%player_id, %season, "no season stats");
        return Ok(SeasonStatsOutcome::NoStats { player_id, season });
    };

    let player = client.player(&player_id.to_string()).await?;

    Ok(SeasonStatsOutcome::Found(SeasonReport {
        player,
        stats,
        season,
    }))
}
