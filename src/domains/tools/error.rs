//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
///
/// Every variant is recovered by the dispatcher and turned into an error
/// envelope; none of them stops the server.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments failed schema or bounds validation.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The X API answered with a non-success status.
    #[error("X API request failed: {status} {status_text} - {body}")]
    Remote {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response whose body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "transport" error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Whether the error was raised before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::UnknownTool(_) | Self::InvalidArguments(_))
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = ToolError::Remote {
            status: 429,
            status_text: "Too Many Requests".to_string(),
            body: "rate limited".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "X API request failed: 429 Too Many Requests - rate limited"
        );
        assert!(!err.is_local());
    }

    #[test]
    fn test_local_errors() {
        assert!(ToolError::unknown_tool("doStuff").is_local());
        assert!(ToolError::invalid_arguments("missing field `id`").is_local());
        assert!(!ToolError::transport("connection refused").is_local());
    }
}
