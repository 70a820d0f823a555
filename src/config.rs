use std::env;
use std::time::Duration;
use url::Url;

use crate::errors::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings injected into the record store at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(api_base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: api_base_url.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(Self {
            api_base_url: url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `API_BASE_URL` and `API_TIMEOUT_SECS`; unset or empty values use the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = value("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let mut config = Self::new(base_url.trim())?;

        if let Some(raw) = value("API_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// `{base}/employees`, or `{base}/employees/{id}` when addressing one record.
    pub fn endpoint(&self, id: Option<i64>) -> String {
        let base = self.api_base_url.as_str().trim_end_matches('/');
        match id {
            Some(id) => format!("{}/employees/{}", base, id),
            None => format!("{}/employees", base),
        }
    }
}
