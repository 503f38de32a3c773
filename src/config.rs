use crate::error::{Error, Result};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.prd.realitydefender.xyz";

/// Default interval (in milliseconds) between polling attempts
pub const DEFAULT_POLLING_INTERVAL: u64 = 5000;

/// Default timeout (in milliseconds) for background polling
pub const DEFAULT_TIMEOUT: u64 = 300_000;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "REALITY_DEFENDER_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "REALITY_DEFENDER_BASE_URL";

/// Configuration for the Reality Defender client
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Timeout in seconds for HTTP requests
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Build a configuration from `REALITY_DEFENDER_API_KEY` and the optional
    /// `REALITY_DEFENDER_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            Error::Unauthorized(format!(
                "API key is required. Set the {API_KEY_ENV} environment variable"
            ))
        })?;

        let config = Self {
            api_key,
            base_url: std::env::var(BASE_URL_ENV).ok(),
            timeout_seconds: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Unauthorized("API key is required".to_string()));
        }

        if let Some(url) = &self.base_url {
            if url.trim().is_empty() {
                return Err(Error::InvalidRequest(
                    "Base URL cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the base URL, falling back to the default if not set
    pub fn get_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Get the timeout in seconds, falling back to the default if not set
    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(30)
    }
}
