use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Application configuration
/// In debug builds: also loads a .env file from the working directory
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the document service, without a trailing slash
    pub api_base_url: String,
    /// Per-request timeout. None means requests may wait forever.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using process environment");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("DOCSEARCH_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = lookup("DOCSEARCH_REQUEST_TIMEOUT_SECS").and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            match raw.parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    warn!(
                        "Config: Ignoring DOCSEARCH_REQUEST_TIMEOUT_SECS={:?}: {}",
                        raw, e
                    );
                    None
                }
            }
        });

        info!("Config: API base URL: {}", api_base_url);
        if let Some(timeout) = request_timeout {
            info!("Config: Request timeout: {:?}", timeout);
        }

        Self {
            api_base_url,
            request_timeout,
        }
    }
}
