//! ID types for the statistics API.

use crate::error::{CourtsideError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for upstream-assigned player IDs.
///
/// # Examples
///
/// ```rust
/// use courtside::PlayerId;
///
/// let player_id = PlayerId::new(237);
/// assert_eq!(player_id.as_u64(), 237);
/// assert_eq!(player_id.to_string(), "237");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| CourtsideError::invalid_input("player_id", format!("{s:?}: {e}")))
    }
}
