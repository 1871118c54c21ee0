//! Client and payload types for the balldontlie statistics API.
//!
//! - `http`: authenticated GET requests with status and payload classification
//! - `types`: players, teams, and season averages as the API returns them

pub mod http;
pub mod types;

pub use http::{BallDontLieClient, DEFAULT_BASE_URL};
pub use types::{Player, SeasonAverages, Team};
