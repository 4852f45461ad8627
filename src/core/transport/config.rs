//! Inbound transport selection.
//!
//! Which transports exist is decided at compile time by cargo features;
//! which one runs is decided by `MCP_TRANSPORT` at startup.

use serde::{Deserialize, Serialize};

use super::{TransportError, TransportResult};

/// The transport the server listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// JSON-RPC over stdin/stdout, spawned by the MCP client.
    #[cfg(feature = "stdio")]
    Stdio,

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listener settings for the HTTP transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route that accepts JSON-RPC requests.
    pub rpc_path: String,

    /// Allow any origin, for browser-based clients.
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and
    /// `MCP_HTTP_CORS`, keeping defaults for unset variables.
    pub fn from_env() -> TransportResult<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("MCP_HTTP_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("MCP_HTTP_PORT") {
            config.port = port.parse().map_err(|_| {
                TransportError::invalid_setting("MCP_HTTP_PORT", format!("not a port: {port:?}"))
            })?;
        }
        if let Ok(path) = std::env::var("MCP_HTTP_PATH") {
            if !path.starts_with('/') {
                return Err(TransportError::invalid_setting(
                    "MCP_HTTP_PATH",
                    "must start with '/'",
                ));
            }
            config.rpc_path = path;
        }
        if let Ok(cors) = std::env::var("MCP_HTTP_CORS") {
            config.enable_cors = !matches!(cors.to_lowercase().as_str(), "false" | "0" | "off");
        }

        Ok(config)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

impl TransportConfig {
    /// Select the transport named by `MCP_TRANSPORT`.
    ///
    /// Unset or empty selects the default. Naming a transport that was not
    /// compiled in is an error rather than a silent fallback.
    pub fn from_env() -> TransportResult<Self> {
        let name = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match name.as_str() {
            "" => Ok(Self::default()),
            #[cfg(feature = "stdio")]
            "stdio" => Ok(Self::Stdio),
            #[cfg(feature = "http")]
            "http" => Ok(Self::Http(HttpConfig::from_env()?)),
            other => Err(TransportError::Unavailable(other.to_string())),
        }
    }

    /// Human-readable summary for startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ENV_TEST_LOCK;

    fn with_transport_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            match value {
                Some(v) => std::env::set_var("MCP_TRANSPORT", v),
                None => std::env::remove_var("MCP_TRANSPORT"),
            }
        }
        let result = f();
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
        }
        result
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = with_transport_env(None, TransportConfig::from_env).unwrap();
        assert_eq!(config, TransportConfig::Stdio);
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        let err = with_transport_env(Some("tcp"), TransportConfig::from_env).unwrap_err();
        assert!(matches!(err, TransportError::Unavailable(ref name) if name == "tcp"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_description() {
        let config = TransportConfig::Http(HttpConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Default::default()
        });
        assert_eq!(config.description(), "HTTP on 0.0.0.0:9000/mcp");
    }
}
