//! Service configuration
//!
//! Everything comes from environment variables (a `.env` file is loaded
//! first when present). Unset variables fall back to defaults; set but
//! malformed ones are an error.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use vitrine_domain::home::{PageSizes, PresenterConfig};
use vitrine_domain::UserId;
use vitrine_rest::RestCatalogConfig;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub catalog: RestCatalogConfig,
    pub page_sizes: PageSizes,
    pub presenter: PresenterConfig,
}

impl ApiConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let baas_url = lookup("VITRINE_BAAS_URL")
            .ok_or_else(|| anyhow!("VITRINE_BAAS_URL must be set"))?;
        let baas_key = lookup("VITRINE_BAAS_KEY")
            .ok_or_else(|| anyhow!("VITRINE_BAAS_KEY must be set"))?;

        let defaults = PageSizes::default();
        let page_sizes = PageSizes {
            trending: parse_or(&lookup, "VITRINE_TRENDING_LIMIT", defaults.trending)?,
            recent: parse_or(&lookup, "VITRINE_RECENT_LIMIT", defaults.recent)?,
            top_rated: parse_or(&lookup, "VITRINE_TOP_RATED_LIMIT", defaults.top_rated)?,
            per_genre: parse_or(&lookup, "VITRINE_GENRE_LIMIT", defaults.per_genre)?,
        };

        let mut catalog = RestCatalogConfig::new(baas_url, baas_key);
        catalog.request_timeout = Duration::from_secs(parse_or(
            &lookup,
            "VITRINE_REQUEST_TIMEOUT_SECS",
            catalog.request_timeout.as_secs(),
        )?);

        let mut presenter = PresenterConfig::default();
        presenter.min_loading_duration = Duration::from_millis(parse_or(
            &lookup,
            "VITRINE_MIN_LOADING_MS",
            presenter.min_loading_duration.as_millis() as u64,
        )?);
        if let Some(fallback) = lookup("VITRINE_FALLBACK_USER_ID") {
            presenter.fallback_user_id = UserId::new(fallback);
        }

        Ok(Self {
            host: lookup("VITRINE_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "VITRINE_PORT", 3000)?,
            catalog,
            page_sizes,
            presenter,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
