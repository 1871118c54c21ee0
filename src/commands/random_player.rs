//! Random player: a random listing page, then a random entry on it.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    balldontlie::{BallDontLieClient, Player},
    config::RandomPageSettings,
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RandomPlayerOutcome {
    Picked { player: Player, page: u32 },
    EmptyPage { page: u32 },
}

pub async fn pick_random_player(
    client: &BallDontLieClient,
    settings: &RandomPageSettings,
) -> Result<RandomPlayerOutcome> {
    let mut rng = StdRng::from_entropy();
    pick_random_player_with(client, settings, &mut rng).await
}

/// Same as [`pick_random_player`] with a caller-supplied RNG.
///
/// Both the page and the entry on it are drawn uniformly.
pub async fn pick_random_player_with<R: Rng>(
    client: &BallDontLieClient,
    settings: &RandomPageSettings,
    rng: &mut R,
) -> Result<RandomPlayerOutcome> {
    let page = rng.gen_range(settings.pages.clone());

    let mut players = client.players_page(page, settings.page_size).await?;
    if players.is_empty() {
        tracing::info!(page, "random page was empty");
        return Ok(RandomPlayerOutcome::EmptyPage { page });
    }

    let index = rng.gen_range(0..players.len());
    let player = players.swap_remove(index);
    tracing::info!(page, player_id = %player.id, "random player picked");

    Ok(RandomPlayerOutcome::Picked { player, page })
}
