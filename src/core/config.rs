//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (a
//! `.env` file is honoured) and never changes afterwards.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the X API bearer token.
pub const ACCESS_TOKEN_ENV: &str = "X_COM_ACCESS_TOKEN";

/// Default X API v2 base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/2";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Outbound X API configuration.
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

/// Configuration for the X API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Versioned base URL every endpoint path is appended to.
    pub base_url: String,

    /// Total time allowed for one request, in seconds.
    pub timeout_secs: u64,

    /// Time allowed to establish a connection, in seconds.
    pub connect_timeout_secs: u64,

    /// Bearer token. Never serialized.
    #[serde(skip_serializing)]
    pub credential: Credential,
}

/// The X API bearer token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl LoggingConfig {
    /// Read the log level on its own, so logging can start before the rest
    /// of the configuration is validated.
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl ApiConfig {
    pub fn new(credential: Credential) -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            credential,
        }
    }
}

impl Config {
    /// Create a configuration with default values and the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            server: ServerConfig {
                name: "x-com-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::new(credential),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `X_COM_ACCESS_TOKEN` is required; a missing or blank token is a
    /// configuration error and the server must not start. Other variables
    /// are prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_X_API_BASE_URL`, `MCP_X_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let token = std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::config(format!("{ACCESS_TOKEN_ENV} environment variable is required"))
            })?;

        let mut config = Self::new(Credential::new(token));

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env()?;

        if let Ok(base_url) = std::env::var("MCP_X_API_BASE_URL") {
            info!("Using X API base URL {}", base_url);
            config.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_X_API_TIMEOUT_SECS") {
            config.api.timeout_secs = timeout.parse().map_err(|_| {
                Error::config(format!("MCP_X_API_TIMEOUT_SECS must be a number, got {timeout:?}"))
            })?;
        }

        Ok(config)
    }
}
