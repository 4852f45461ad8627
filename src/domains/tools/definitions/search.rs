//! Search tools.
//!
//! - `searchRecent`: `GET /tweets/search/recent` (last 7 days)
//! - `searchAll`: `GET /tweets/search/all` (full archive)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{FieldSelectors, TimeWindow};
use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool,
    validation::{check_range, whole_number},
};

/// Parameters for a search over the last seven days.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchRecentParams {
    /// Search query string
    pub query: String,

    /// Maximum number of results (10-100)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number"
    )]
    #[schemars(with = "Option<u32>")]
    #[schemars(range(min = 10, max = 100))]
    pub max_results: Option<u32>,

    /// Token for next page of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(flatten)]
    pub fields: FieldSelectors,

    #[serde(flatten)]
    pub window: TimeWindow,
}

/// Parameters for a full-archive search.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchAllParams {
    /// Search query string
    pub query: String,

    /// Maximum number of results (10-500)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number"
    )]
    #[schemars(with = "Option<u32>")]
    #[schemars(range(min = 10, max = 500))]
    pub max_results: Option<u32>,

    /// Token for next page of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Token for previous page of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_token: Option<String>,

    #[serde(flatten)]
    pub fields: FieldSelectors,

    #[serde(flatten)]
    pub window: TimeWindow,
}

pub struct SearchRecentTool;

impl SearchRecentTool {
    pub const MAX_RESULTS: (u32, u32) = (10, 100);
}

impl XApiTool for SearchRecentTool {
    const NAME: &'static str = "searchRecent";
    const DESCRIPTION: &'static str = "Search recent posts (last 7 days)";
    type Params = SearchRecentParams;

    fn validate(params: &SearchRecentParams) -> Result<(), ToolError> {
        let (min, max) = Self::MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &SearchRecentParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get("/tweets/search/recent".to_string(), params)
    }
}

pub struct SearchAllTool;

impl SearchAllTool {
    pub const MAX_RESULTS: (u32, u32) = (10, 500);
}

impl XApiTool for SearchAllTool {
    const NAME: &'static str = "searchAll";
    const DESCRIPTION: &'static str =
        "Search all posts (full archive - requires Academic Research or Enterprise access)";
    type Params = SearchAllParams;

    fn validate(params: &SearchAllParams) -> Result<(), ToolError> {
        let (min, max) = Self::MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &SearchAllParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get("/tweets/search/all".to_string(), params)
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
    fn test_search_recent_bounds() {
        for (value, valid) in [(9, false), (10, true), (100, true), (101, false)] {
            let result =
                SearchRecentTool::prepare(args(json!({ "query": "rust", "max_results": value })));
            assert_eq!(result.is_ok(), valid, "max_results = {value}");
        }
    }

    #[test]
    fn test_search_all_bounds() {
        for (value, valid) in [(9, false), (10, true), (500, true), (501, false)] {
            let result =
                SearchAllTool::prepare(args(json!({ "query": "x", "max_results": value })));
            assert_eq!(result.is_ok(), valid, "max_results = {value}");
        }
    }

    #[test]
    fn test_search_query_is_form_encoded() {
        let binding = SearchRecentTool::prepare(args(json!({
            "query": "from:rustlang has:links",
            "next_token": "b26v89c19zqg8o3f"
        })))
        .unwrap();
        assert_eq!(binding.path, "/tweets/search/recent");
        assert_eq!(
            binding.query,
            "query=from%3Arustlang+has%3Alinks&next_token=b26v89c19zqg8o3f"
        );
    }

    #[test]
    fn test_search_all_passes_previous_token() {
        let binding = SearchAllTool::prepare(args(json!({
            "query": "x",
            "previous_token": "prev"
        })))
        .unwrap();
        assert_eq!(binding.path, "/tweets/search/all");
        assert_eq!(binding.query, "query=x&previous_token=prev");
    }
}
