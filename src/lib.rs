//! Courtside Library
//!
//! A small web front-end over the balldontlie basketball statistics API: search
//! players by name, view season averages, keep a list of favorites, and pull up a
//! random player.
//!
//! ## Features
//!
//! - **Player Search**: Free-text name search, results in upstream order
//! - **Season Stats**: Per-game averages for one player and season
//! - **Favorites**: Process-lifetime list of player IDs, resolved to profiles on view
//! - **Random Player**: Random entry from a random page of the player listing
//! - **Structured Errors**: Bad input, unreachable upstream, bad status, and bad payload
//!   are distinct error variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::{
//!     balldontlie::BallDontLieClient,
//!     commands::{search_players, SearchOutcome},
//!     config::UpstreamSettings,
//! };
//!
//! # async fn example() -> courtside::Result<()> {
//! let settings = UpstreamSettings {
//!     api_key: std::env::var(courtside::API_KEY_ENV_VAR).ok(),
//!     base_url: courtside::balldontlie::DEFAULT_BASE_URL.to_string(),
//!     timeout: None,
//! };
//! let client = BallDontLieClient::new(&settings)?;
//!
//! if let SearchOutcome::Found(players) = search_players(&client, "James").await? {
//!     for player in players {
//!         println!("{}", player.full_name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Put your API key in the environment or in a `.env` file:
//! ```bash
//! export BALLDONTLIE_API_KEY=your-key
//! ```

pub mod balldontlie;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod web;

// Re-export commonly used types
pub use balldontlie::{BallDontLieClient, Player, SeasonAverages, Team};
pub use cli::types::{PlayerId, Season};
pub use error::{CourtsideError, Result};
pub use favorites::FavoritesStore;

pub const API_KEY_ENV_VAR: &str = "BALLDONTLIE_API_KEY";
/// Variable name used by earlier deployments; read when `API_KEY_ENV_VAR` is unset.
pub const LEGACY_API_KEY_ENV_VAR: &str = "API_KEY";
