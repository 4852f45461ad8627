//! STDIO transport implementation.
//!
//! The standard MCP mode: JSON-RPC over stdin/stdout. Logs go to stderr so
//! they never interleave with protocol traffic.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("{} ready - communicating via stdin/stdout", server.name());

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Handshake(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::Serve(e.to_string()))?;

        info!("STDIO transport finished: {:?}", reason);
        Ok(())
    }
}
