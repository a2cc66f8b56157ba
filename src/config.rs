use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_API_URL: &str = "http://localhost:8080/api/admin";
const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API URL (expected http:// or https://): {0}")]
    InvalidApiUrl(String),
    #[error("Invalid page size (expected 1..={max}): {value}")]
    InvalidPageSize { value: String, max: u32 },
    #[error("Invalid request timeout: {0}")]
    InvalidTimeout(String),
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Application configuration
/// In debug builds a .env file is loaded first, then everything comes from the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Root of the admin API, without trailing slash
    pub api_base_url: String,
    /// Rows requested per listing page
    pub page_size: u32,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                debug!("Config: No .env file found, using process environment");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a specific env file, ignoring the process environment
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = match lookup("MYMANGA_API_URL") {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidApiUrl(url));
                }
                url
            }
            None => defaults.api_base_url,
        };

        let page_size = match lookup("MYMANGA_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
                _ => {
                    return Err(ConfigError::InvalidPageSize {
                        value: raw,
                        max: MAX_PAGE_SIZE,
                    })
                }
            },
            None => defaults.page_size,
        };

        let request_timeout = match lookup("MYMANGA_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => defaults.request_timeout,
        };

        debug!(
            "Config: api={}, page_size={}, timeout={:?}",
            api_base_url, page_size, request_timeout
        );

        Ok(Self {
            api_base_url,
            page_size,
            request_timeout,
        })
    }
}
