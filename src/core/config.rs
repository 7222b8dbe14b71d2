//! Configuration management for the MCP server.
//!
//! Configuration is an explicit value constructed once at startup from the
//! process environment (plus an optional `.env` file) and handed by
//! reference into the components that need it. There is no global cache;
//! tests that need a fresh resolution simply call [`Config::from_env`]
//! again.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default origin of the Financial Datasets API.
pub const DEFAULT_BASE_URL: &str = "https://api.financialdatasets.ai";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Financial Datasets API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Financial Datasets API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key for api.financialdatasets.ai.
    /// Get one at: https://financialdatasets.ai/
    ///
    /// `None` when the variable is unset or empty; every API call then
    /// fails with a key-missing error before any network access.
    pub api_key: Option<String>,

    /// Base origin for API requests. Overridable for tests.
    pub base_url: String,
}

/// Custom Debug implementation to redact the key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "findata-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `FINANCIAL_DATASETS_API_KEY` and the optional overrides
    /// `FINANCIAL_DATASETS_BASE_URL`, `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    /// A `.env` file in the working directory is honored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // An empty value counts as unset: the key must never reach the
        // request header as an empty string.
        match std::env::var("FINANCIAL_DATASETS_API_KEY") {
            Ok(key) if !key.is_empty() => {
                config.api.api_key = Some(key);
                info!("Financial Datasets API key loaded from environment");
            }
            _ => {
                warn!(
                    "FINANCIAL_DATASETS_API_KEY not set - every tool call will fail \
                     until it is (get your key at https://financialdatasets.ai/)"
                );
            }
        }

        if let Ok(base_url) = std::env::var("FINANCIAL_DATASETS_BASE_URL") {
            config.api.base_url = base_url;
        }

        config
    }
}
