//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Season};

use crate::balldontlie::DEFAULT_BASE_URL;
use crate::config::{
    DEFAULT_HOST, DEFAULT_PAGE_SIZE, DEFAULT_PORT,
    DEFAULT_RANDOM_MAX_PAGE, DEFAULT_RANDOM_MIN_PAGE,
};

/// Connection settings for the statistics API, shared by every command.
#[derive(Debug, Clone, Args)]
pub struct UpstreamArgs {
    /// API key sent in the `Authorization` header (or set `BALLDONTLIE_API_KEY`).
    #[clap(long, env = "BALLDONTLIE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the statistics API.
    #[clap(long, env = "COURTSIDE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means requests wait indefinitely.
    #[clap(long, env = "COURTSIDE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Random player sampling window.
#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// First page the random picker may request.
    #[clap(long, env = "COURTSIDE_RANDOM_MIN_PAGE", default_value_t = DEFAULT_RANDOM_MIN_PAGE)]
    pub random_min_page: u32,

    /// Last page the random picker may request (size of the upstream player listing).
    #[clap(long, env = "COURTSIDE_RANDOM_MAX_PAGE", default_value_t = DEFAULT_RANDOM_MAX_PAGE)]
    pub random_max_page: u32,

    /// Players per listing page.
    #[clap(long, env = "COURTSIDE_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

/// Web server bind address and view options.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Host to bind to.
    #[clap(long, env = "COURTSIDE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[clap(long, short, env = "COURTSIDE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Newest season offered in the season picker.
    #[clap(long, env = "COURTSIDE_LATEST_SEASON", default_value_t = Season::default())]
    pub latest_season: Season,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Search players by first or last name.
    Search {
        /// Name (or part of a name) to search for.
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Season averages for one player.
    SeasonStats {
        /// Player ID as assigned by the statistics API.
        player_id: PlayerId,

        /// Season year (e.g. 2019 for 2019-20).
        #[clap(long, short)]
        season: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Pick a random player from a random listing page.
    Random {
        #[clap(flatten)]
        random: RandomArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "Basketball player lookup web front-end", version)]
pub struct Courtside {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the web front-end.
    Serve {
        #[clap(flatten)]
        server: ServerArgs,

        #[clap(flatten)]
        upstream: UpstreamArgs,

        #[clap(flatten)]
        random: RandomArgs,
    },

    /// Query the statistics API from the command line.
    Get {
        #[clap(flatten)]
        upstream: UpstreamArgs,

        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let app = Courtside::try_parse_from(["courtside", "serve"]).unwrap();
        match app.command {
            Commands::Serve {
                server,
                random,
                upstream,
            } => {
                assert_eq!(server.port, DEFAULT_PORT);
                assert_eq!(upstream.timeout_secs, None);
                assert_eq!(random.random_min_page, 1);
                assert_eq!(random.random_max_page, 215);
                assert_eq!(random.page_size, 25);
            }
            _ => panic!("Expected serve command"),
        }
    }

    #[test]
    fn test_get_season_stats_args() {
        let app = Courtside::try_parse_from([
            "courtside",
            "get",
            "season-stats",
            "15",
            "--season",
            "2019",
        ])
        .unwrap();
        match app.command {
            Commands::Get {
                cmd: GetCmd::SeasonStats {
                    player_id, season, ..
                },
                ..
            } => {
                assert_eq!(player_id, PlayerId::new(15));
                assert_eq!(season.as_deref(), Some("2019"));
            }
            _ => panic!("Expected get season-stats command"),
        }
    }

    #[test]
    fn test_get_rejects_bad_player_id() {
        let result = Courtside::try_parse_from(["courtside", "get", "season-stats", "abc"]);
        assert!(result.is_err());
    }
}
