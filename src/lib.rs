//! X API MCP Server Library
//!
//! Exposes the X (Twitter) API v2 as Model Context Protocol tools. A client
//! lists the tools, and each tool call is validated locally and then turned
//! into exactly one HTTP request against the X API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and
//!   the inbound transports
//! - **domains::tools**: tool definitions, argument validation, endpoint
//!   bindings, the outbound HTTP client and the dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use x_api_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)?).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
