//! Season type for the statistics API.

use crate::error::{CourtsideError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Earliest season offered in the season picker.
pub const FIRST_AVERAGES_SEASON: u16 = 1979;

/// Type-safe wrapper for Season years.
///
/// A season is named by the calendar year it starts in, so `2019` is 2019-20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// Parse an optional `season` request parameter.
    ///
    /// Absent, blank and non-numeric values are all `InvalidInput`.
    pub fn from_param(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Err(CourtsideError::invalid_input(
                "season",
                "season not specified, please select a valid season",
            )),
            Some(value) => value.parse(),
        }
    }

    /// Seasons from `latest` back to [`FIRST_AVERAGES_SEASON`], newest first.
    pub fn descending_from(latest: Season) -> Vec<Season> {
        (FIRST_AVERAGES_SEASON..=latest.0).rev().map(Season).collect()
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e| CourtsideError::invalid_input("season", format!("{s:?}: {e}")))
    }
}
