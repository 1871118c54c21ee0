//! `courtside get ...` command implementation

use crate::{
    balldontlie::{BallDontLieClient, Player},
    cli::GetCmd,
    config::RandomPageSettings,
    Result,
};

use super::{
    fetch_season_stats, pick_random_player, search_players, RandomPlayerOutcome, SearchOutcome,
    SeasonStatsOutcome,
};

/// Handle the get command
pub async fn handle_lookup(client: &BallDontLieClient, cmd: GetCmd) -> Result<()> {
    match cmd {
        GetCmd::Search { name, json } => match search_players(client, &name).await? {
            SearchOutcome::Found(players) if json => {
                println!("{}", serde_json::to_string_pretty(&players)?)
            }
            SearchOutcome::Found(players) => {
                for player in &players {
                    println!("{}", player_line(player));
                }
            }
            SearchOutcome::NoMatch { query } => println!("No player found with the name '{query}'."),
        },

        GetCmd::SeasonStats {
            player_id,
            season,
            json,
        } => match fetch_season_stats(client, player_id, season.as_deref()).await? {
            SeasonStatsOutcome::Found(report) if json => {
                println!("{}", serde_json::to_string_pretty(&report)?)
            }
            SeasonStatsOutcome::Found(report) => {
                println!("{} ({})", player_line(&report.player), report.season);
                for (label, value) in report.stats.stat_lines() {
                    println!("  {label:<26}{value:>8}");
                }
            }
            SeasonStatsOutcome::NoStats { player_id, season } => {
                println!("No season stats found for player ID {player_id} in season {season}.")
            }
        },

        GetCmd::Random { random, json } => {
            let settings = RandomPageSettings::from_args(&random)?;
            match pick_random_player(client, &settings).await? {
                RandomPlayerOutcome::Picked { player, .. } if json => {
                    println!("{}", serde_json::to_string_pretty(&player)?)
                }
                RandomPlayerOutcome::Picked { player, page } => {
                    println!("{} (page {page})", player_line(&player))
                }
                RandomPlayerOutcome::EmptyPage { page } => {
                    println!("No players found on page {page}.")
                }
            }
        }
    }

    Ok(())
}

/// One-line summary: `#237 LeBron James - F - Los Angeles Lakers`.
pub fn player_line(player: &Player) -> String {
    format!(
        "#{} {} - {} - {}",
        player.id,
        player.full_name(),
        player.position_label(),
        player.team_name()
    )
}
