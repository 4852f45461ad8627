use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that stop the inbound transport.
///
/// A failed tool call is never one of these; it is answered with an error
/// envelope and the transport keeps serving.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport `{0}` is not available in this build")]
    Unavailable(String),

    #[error("invalid {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    #[error("transport stopped: {0}")]
    Serve(String),
}

impl TransportError {
    pub fn invalid_setting(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name,
            reason: reason.into(),
        }
    }

    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}
