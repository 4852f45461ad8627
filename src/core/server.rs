//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` implements the rmcp `ServerHandler` and delegates both tool
//! messages to the [`ToolDispatcher`]. `call_tool` is implemented by hand
//! instead of through a generated router so that unknown tool names come
//! back as an error envelope rather than a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ApiTransport, ToolDispatcher, ToolRegistry, XApiClient};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool lookup, validation and outbound calls.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server talking to the real X API.
    ///
    /// The credential is moved into the HTTP client; the copy kept in the
    /// shared configuration is only reachable through its redacted `Debug`.
    pub fn new(config: Config) -> Result<Self> {
        let client = XApiClient::new(config.api.clone())?;
        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// Create a server with a custom outbound transport.
    pub fn with_transport(config: Config, transport: Arc<dyn ApiTransport>) -> Self {
        let registry = Arc::new(ToolRegistry::new());
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(registry, transport),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Server instructions sent to clients on initialize.
    pub fn instructions() -> &'static str {
        "Exposes the X (Twitter) API v2 as tools: post lookup, creation and deletion, \
         reply visibility, timelines, search, post counts, retweets, likes and bookmarks."
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.dispatcher.list()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> CallToolResult {
        self.dispatcher.call(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult::with_all_items(self.dispatcher.list()))
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        Ok(self.dispatcher.call(&request.name, request.arguments).await)
    }
}
