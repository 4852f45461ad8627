//! The trait every X API tool definition implements.
//!
//! A tool is a pure description: a name, a description, a typed parameter
//! struct (which also provides the JSON schema shown to clients) and a rule
//! turning validated parameters into an [`EndpointBinding`]. Tools never
//! perform I/O themselves; the dispatcher sends the binding.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::binding::EndpointBinding;
use super::error::ToolError;
use super::validation::parse_arguments;

pub trait XApiTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments. Unknown fields must be accepted.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Constraints serde cannot express (numeric bounds, array lengths).
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Translate validated parameters into the outbound request.
    fn bind(params: &Self::Params) -> Result<EndpointBinding, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Parse, validate and translate raw call arguments.
    ///
    /// Nothing is sent from here; an `Err` guarantees no request is issued.
    fn prepare(arguments: Option<Map<String, Value>>) -> Result<EndpointBinding, ToolError> {
        let params: Self::Params = parse_arguments(arguments)?;
        Self::validate(&params)?;
        Self::bind(&params)
    }
}
