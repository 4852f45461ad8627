//! Tool dispatch - the request/response cycle for a single tool call.
//!
//! `call` looks the tool up, validates and translates the arguments, sends
//! exactly one request and wraps the outcome in an MCP content envelope.
//! Every failure is returned as an error envelope; nothing here can stop the
//! serving loop.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

use super::client::{ApiTransport, decode_response};
use super::error::ToolError;
use super::registry::{ToolRegistry, XTool};

/// Dispatches tool calls against an [`ApiTransport`].
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
    transport: Arc<dyn ApiTransport>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// All tool definitions, in listing order.
    pub fn list(&self) -> Vec<Tool> {
        self.registry.list().to_vec()
    }

    /// Execute a tool call and build the envelope.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Option<Map<String, Value>>) -> CallToolResult {
        let tool = match self.registry.lookup(name) {
            Ok(tool) => tool,
            Err(e) => {
                warn!("Unknown tool requested: {}", name);
                return CallToolResult::error(vec![Content::text(e.to_string())]);
            }
        };

        match self.execute(tool, arguments).await {
            Ok(value) => {
                info!("Tool {} succeeded", name);
                success_result(&value)
            }
            Err(e) => {
                match &e {
                    e if e.is_local() => warn!("Tool {} rejected before sending: {}", name, e),
                    ToolError::Remote { status, .. } => {
                        warn!("Tool {} failed with status {}", name, status)
                    }
                    _ => error!("Tool {} failed: {}", name, e),
                }
                CallToolResult::error(vec![Content::text(format!("X API error: {e}"))])
            }
        }
    }

    /// Validate, send and decode. Validation always runs before the send.
    pub async fn execute(
        &self,
        tool: XTool,
        arguments: Option<Map<String, Value>>,
    ) -> Result<Value, ToolError> {
        let binding = tool.prepare(arguments)?;
        info!("Calling {} {}", binding.method, binding.path);
        let response = self.transport.send(&binding).await?;
        decode_response(response)
    }
}

fn success_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}
