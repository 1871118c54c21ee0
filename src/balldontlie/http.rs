use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode, Url,
};
use serde::de::DeserializeOwned;

use crate::balldontlie::types::{ItemEnvelope, ListEnvelope, Player, SeasonAverages};
use crate::config::UpstreamSettings;
use crate::error::{CourtsideError, Result};
use crate::{PlayerId, Season};


/// Base path for the balldontlie v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io/v1";

const USER_AGENT: &str = concat!("courtside/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the statistics API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BallDontLieClient {
    http: Client,
    base_url: Url,
}

impl BallDontLieClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(api_headers(settings.api_key.as_deref())?);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Self::with_client(http, &settings.base_url)
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| CourtsideError::invalid_input("base_url", format!("{base_url:?}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(CourtsideError::invalid_input(
                "base_url",
                format!("{base_url:?} cannot carry a path"),
            ));
        }

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    /// `GET /players?search={query}`
    pub async fn search_players(&self, query: &str) -> Result<Vec<Player>> {
        let envelope: ListEnvelope<Player> = self
            .get_json(&["players"], &[("search", query.to_string())])
            .await?;
        Ok(envelope.data)
    }

    /// `GET /players/{id}`
    ///
    /// `id` is passed through as an opaque path segment.
    pub async fn player(&self, id: &str) -> Result<Player> {
        let envelope: ItemEnvelope<Player> = self.get_json(&["players", id], &[]).await?;
        Ok(envelope.data)
    }

    /// `GET /players?per_page={per_page}&page={page}`
    pub async fn players_page(&self, page: u32, per_page: u32) -> Result<Vec<Player>> {
        let params = [("per_page", per_page.to_string()), ("page", page.to_string())];
        let envelope: ListEnvelope<Player> = self.get_json(&["players"], &params).await?;
        Ok(envelope.data)
    }

    /// `GET /season_averages?season={season}&player_id={player_id}`
    pub async fn season_averages(
        &self,
        season: Season,
        player_id: PlayerId,
    ) -> Result<Vec<SeasonAverages>> {
        let params = [
            ("season", season.to_string()),
            ("player_id", player_id.to_string()),
        ];
        let envelope: ListEnvelope<SeasonAverages> =
            self.get_json(&["season_averages"], &params).await?;
        Ok(envelope.data)
    }

    /// Any status other than 200 is an error, as is a body that does not decode into `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments);
        let endpoint = url.path().to_string();
        tracing::debug!(%endpoint, ?params, "GET upstream");

        let response = self.http.get(url).query(params).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%endpoint, %status, "upstream returned an error status");
            return Err(CourtsideError::UpstreamStatus { status, endpoint });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(%endpoint, error = %source, "upstream returned an undecodable body");
            CourtsideError::UpstreamPayload { endpoint, source }
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Default headers for every request: JSON accept plus the API key, when configured.
pub fn api_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        let mut value = HeaderValue::from_str(key.trim())?;
        value.set_sensitive(true);
        h.insert(AUTHORIZATION, value);
    }
    Ok(h)
}
