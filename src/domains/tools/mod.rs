//! Tools domain module.
//!
//! Every tool maps one-to-one onto a single X API v2 endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Parameter structs and endpoint rules, one file per API area
//! - `handlers.rs` - The `XApiTool` trait every definition implements
//! - `validation.rs` - Bound and length checks serde cannot express
//! - `binding.rs` - `EndpointBinding`, the translated outbound request
//! - `registry.rs` - The closed `XTool` enum and the ordered tool list
//! - `client.rs` - `ApiTransport` seam and the reqwest-backed `XApiClient`
//! - `dispatch.rs` - Validate, send once, wrap the result in an envelope
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct and a unit struct implementing `XApiTool` in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a variant to `XTool` and extend `ALL`; the compiler points at every
//!    `match` that needs the new arm

pub mod binding;
pub mod client;
pub mod definitions;
mod dispatch;
mod error;
mod handlers;
mod registry;
pub mod validation;

pub use binding::{EndpointBinding, HttpMethod};
pub use client::{ApiResponse, ApiTransport, XApiClient};
pub use dispatch::ToolDispatcher;
pub use error::ToolError;
pub use handlers::XApiTool;
pub use registry::{ToolRegistry, XTool};
