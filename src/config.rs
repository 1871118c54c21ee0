//! Runtime configuration resolved from CLI arguments, environment, and `.env`.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use crate::cli::{RandomArgs, ServerArgs, UpstreamArgs};
use crate::error::{CourtsideError, Result};
use crate::{Season, LEGACY_API_KEY_ENV_VAR};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RANDOM_MIN_PAGE: u32 = 1;
/// Number of 25-player pages in the upstream listing when this was deployed.
pub const DEFAULT_RANDOM_MAX_PAGE: u32 = 215;
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Largest `per_page` the statistics API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// What happened when `.env` was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    NotFound,
    Unreadable(String),
}

impl DotenvStatus {
    /// Report the outcome; call once a subscriber is installed.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => tracing::debug!("Loaded .env from {}", path.display()),
            Self::NotFound => {}
            Self::Unreadable(e) => tracing::warn!("Ignoring unreadable .env: {e}"),
        }
    }
}

/// Load `.env` from the working directory, once.
///
/// Missing files are fine; variables already set in the environment win.
pub fn load_dotenv() -> DotenvStatus {
    static ONCE: OnceLock<DotenvStatus> = OnceLock::new();
    ONCE.get_or_init(|| match dotenvy::dotenv() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(e) if e.not_found() => DotenvStatus::NotFound,
        Err(e) => DotenvStatus::Unreadable(e.to_string()),
    })
    .clone()
}

/// How to reach the statistics API.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl UpstreamSettings {
    /// Resolve from CLI args, falling back to the legacy `API_KEY` variable.
    ///
    /// A missing key is only warned about; requests will fail upstream with 401.
    pub fn from_args(args: &UpstreamArgs) -> Self {
        let api_key = args
            .api_key
            .clone()
            .or_else(|| std::env::var(LEGACY_API_KEY_ENV_VAR).ok())
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            tracing::warn!("No API key configured; upstream requests will be rejected");
        }

        Self {
            api_key,
            base_url: args.base_url.clone(),
            timeout: args.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Random player sampling window: pages are drawn uniformly from `pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPageSettings {
    pub pages: RangeInclusive<u32>,
    pub page_size: u32,
}

impl RandomPageSettings {
    pub fn new(min_page: u32, max_page: u32, page_size: u32) -> Result<Self> {
        if min_page == 0 || min_page > max_page {
            return Err(CourtsideError::invalid_input(
                "random page range",
                format!("{min_page}..={max_page} is empty or starts at 0"),
            ));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(CourtsideError::invalid_input(
                "page_size",
                format!("{page_size} is outside 1..={MAX_PAGE_SIZE}"),
            ));
        }

        Ok(Self {
            pages: min_page..=max_page,
            page_size,
        })
    }

    pub fn from_args(args: &RandomArgs) -> Result<Self> {
        Self::new(args.random_min_page, args.random_max_page, args.page_size)
    }
}

impl Default for RandomPageSettings {
    fn default() -> Self {
        Self {
            pages: DEFAULT_RANDOM_MIN_PAGE..=DEFAULT_RANDOM_MAX_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub latest_season: Season,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            latest_season: Season::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_args(args: &ServerArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            latest_season: args.latest_season,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
