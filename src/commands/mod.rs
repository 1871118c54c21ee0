//! User-facing operations, each a request/response cycle against the statistics API.
//!
//! Valid-but-empty results (`NoMatch`, `NoStats`, `EmptyPage`) are outcome variants,
//! not errors; `Err` is reserved for bad input and upstream failures.

pub mod favorites;
pub mod lookup;
pub mod random_player;
pub mod search;
pub mod season_stats;

pub use favorites::{resolve_favorites, Favorite};
pub use random_player::{pick_random_player, pick_random_player_with, RandomPlayerOutcome};
pub use search::{search_players, SearchOutcome};
pub use season_stats::{fetch_season_stats, SeasonReport, SeasonStatsOutcome};
