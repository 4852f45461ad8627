//! Server-level errors.
//!
//! These cover startup and the inbound transport. A failing tool call is a
//! [`ToolError`](crate::domains::tools::ToolError) and is answered with an
//! error envelope; it only reaches this type when building the API client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration. The server must not start.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
