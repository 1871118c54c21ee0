use crate::cli::types::{PlayerId, Season};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Envelope for collection endpoints (`/players`, `/season_averages`).
///
/// Pagination `meta` is ignored; random picks draw from a configured page range.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
}

/// Envelope for single-record endpoints (`/players/{id}`).
#[derive(Debug, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub division: String,
}

/// Player profile as returned by the API. Fetched per request, never cached.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub draft_year: Option<u16>,
    #[serde(default)]
    pub draft_round: Option<u8>,
    #[serde(default)]
    pub draft_number: Option<u16>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Team full name, or "N/A" for players without one.
    pub fn team_name(&self) -> &str {
        self.team
            .as_ref()
            .map(|t| t.full_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }

    /// Position code, or "N/A" when the API leaves it blank.
    pub fn position_label(&self) -> &str {
        self.position
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("N/A")
    }
}

/// Per-game season averages for one player. Any number may be missing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonAverages {
    pub player_id: PlayerId,
    pub season: Season,
    #[serde(default)]
    pub games_played: Option<u32>,
    /// Minutes per game as `"MM:SS"`.
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub pts: Option<f64>,
    #[serde(default)]
    pub ast: Option<f64>,
    #[serde(default)]
    pub reb: Option<f64>,
    #[serde(default)]
    pub oreb: Option<f64>,
    #[serde(default)]
    pub dreb: Option<f64>,
    #[serde(default)]
    pub stl: Option<f64>,
    #[serde(default)]
    pub blk: Option<f64>,
    #[serde(default)]
    pub turnover: Option<f64>,
    #[serde(default)]
    pub pf: Option<f64>,
    #[serde(default)]
    pub fgm: Option<f64>,
    #[serde(default)]
    pub fga: Option<f64>,
    #[serde(default)]
    pub fg_pct: Option<f64>,
    #[serde(default)]
    pub fg3m: Option<f64>,
    #[serde(default)]
    pub fg3a: Option<f64>,
    #[serde(default)]
    pub fg3_pct: Option<f64>,
    #[serde(default)]
    pub ftm: Option<f64>,
    #[serde(default)]
    pub fta: Option<f64>,
    #[serde(default)]
    pub ft_pct: Option<f64>,
}

impl SeasonAverages {
    /// Display rows in the order the stats page lists them.
    ///
    /// Counting stats get one decimal, shooting percentages three; missing values are "-".
    pub fn stat_lines(&self) -> Vec<(&'static str, String)> {
        let per_game = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"));
        let pct = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.3}"));

        vec![
            (
                "Games played",
                self.games_played
                    .map_or_else(|| "-".to_string(), |g| g.to_string()),
            ),
            ("Minutes", self.min.clone().unwrap_or_else(|| "-".to_string())),
            ("Points", per_game(self.pts)),
            ("Assists", per_game(self.ast)),
            ("Rebounds", per_game(self.reb)),
            ("Offensive rebounds", per_game(self.oreb)),
            ("Defensive rebounds", per_game(self.dreb)),
            ("Steals", per_game(self.stl)),
            ("Blocks", per_game(self.blk)),
            ("Turnovers", per_game(self.turnover)),
            ("Personal fouls", per_game(self.pf)),
            ("Field goals made", per_game(self.fgm)),
            ("Field goals attempted", per_game(self.fga)),
            ("Field goal %", pct(self.fg_pct)),
            ("Three pointers made", per_game(self.fg3m)),
            ("Three pointers attempted", per_game(self.fg3a)),
            ("Three point %", pct(self.fg3_pct)),
            ("Free throws made", per_game(self.ftm)),
            ("Free throws attempted", per_game(self.fta)),
            ("Free throw %", pct(self.ft_pct)),
        ]
    }
}
