//! Post count tools.
//!
//! - `getPostCountsRecent`: `GET /tweets/counts/recent`
//! - `getPostCountsAll`: `GET /tweets/counts/all`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::TimeWindow;
use crate::domains::tools::{EndpointBinding, ToolError, XApiTool};

/// Bucket size for post counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Minute,
    Hour,
    Day,
}

/// Parameters for counting posts that match a query.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PostCountsParams {
    /// Search query string for counting posts
    pub query: String,

    #[serde(flatten)]
    pub window: TimeWindow,

    /// Time granularity for counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
}

pub struct GetPostCountsRecentTool;

impl XApiTool for GetPostCountsRecentTool {
    const NAME: &'static str = "getPostCountsRecent";
    const DESCRIPTION: &'static str =
        "Get time-bucketed post counts for recent posts (last 7 days)";
    type Params = PostCountsParams;

    fn bind(params: &PostCountsParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get("/tweets/counts/recent".to_string(), params)
    }
}

pub struct GetPostCountsAllTool;

impl XApiTool for GetPostCountsAllTool {
    const NAME: &'static str = "getPostCountsAll";
    const DESCRIPTION: &'static str = "Get time-bucketed post counts for all posts (full archive - requires Academic Research or Enterprise access)";
    type Params = PostCountsParams;

    fn bind(params: &PostCountsParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get("/tweets/counts/all".to_string(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn args(value: Value) -> Option<serde_json::Map<String, Value>> {
        value.as_object().cloned()
    }

    #[test]
    fn test_granularity_enum() {
        for granularity in ["minute", "hour", "day"] {
            let binding = GetPostCountsRecentTool::prepare(args(json!({
                "query": "rust",
                "granularity": granularity
            })))
            .unwrap();
            assert_eq!(binding.query, format!("query=rust&granularity={granularity}"));
        }

        let err = GetPostCountsAllTool::prepare(args(json!({
            "query": "rust",
            "granularity": "week"
        })))
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant `week`"));
    }

    #[test]
    fn test_counts_paths() {
        let recent = GetPostCountsRecentTool::prepare(args(json!({ "query": "a" }))).unwrap();
        let all = GetPostCountsAllTool::prepare(args(json!({ "query": "a" }))).unwrap();
        assert_eq!(recent.path, "/tweets/counts/recent");
        assert_eq!(all.path, "/tweets/counts/all");
    }

    #[test]
    fn test_counts_schema_declares_enum() {
        let tool = GetPostCountsAllTool::to_tool();
        let schema = serde_json::to_string(&*tool.input_schema).unwrap();
        assert!(schema.contains("\"minute\""));
        assert!(schema.contains("\"hour\""));
        assert!(schema.contains("\"day\""));
    }
}
