//! User timeline tools.
//!
//! - `getUserTimeline`: `GET /users/{id}/tweets`
//! - `getUserMentions`: `GET /users/{id}/mentions`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{FieldSelectors, TimeWindow};
use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool,
    binding::{path_param, segment},
    validation::{check_range, whole_number},
};

/// Inclusive `max_results` bounds for both timelines.
pub const TIMELINE_MAX_RESULTS: (u32, u32) = (5, 100);

/// Parameters for a user's post timeline.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UserTimelineParams {
    /// The user ID whose timeline to retrieve
    #[serde(skip_serializing_if = "path_param")]
    pub id: String,

    /// Token for pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,

    /// Maximum number of results (5-100)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number"
    )]
    #[schemars(with = "Option<u32>")]
    #[schemars(range(min = 5, max = 100))]
    pub max_results: Option<u32>,

    #[serde(flatten)]
    pub fields: FieldSelectors,

    /// Comma-separated list of types to exclude (retweets, replies)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(flatten)]
    pub window: TimeWindow,
}

/// Parameters for the posts mentioning a user.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct UserMentionsParams {
    /// The user ID whose mentions to retrieve
    #[serde(skip_serializing_if = "path_param")]
    pub id: String,

    /// Token for pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,

    /// Maximum number of results (5-100)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number"
    )]
    #[schemars(with = "Option<u32>")]
    #[schemars(range(min = 5, max = 100))]
    pub max_results: Option<u32>,

    #[serde(flatten)]
    pub fields: FieldSelectors,

    #[serde(flatten)]
    pub window: TimeWindow,
}

pub struct GetUserTimelineTool;

impl XApiTool for GetUserTimelineTool {
    const NAME: &'static str = "getUserTimeline";
    const DESCRIPTION: &'static str = "Get a user's timeline of posts";
    type Params = UserTimelineParams;

    fn validate(params: &UserTimelineParams) -> Result<(), ToolError> {
        let (min, max) = TIMELINE_MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &UserTimelineParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(format!("/users/{}/tweets", segment(&params.id)), params)
    }
}

pub struct GetUserMentionsTool;

impl XApiTool for GetUserMentionsTool {
    const NAME: &'static str = "getUserMentions";
    const DESCRIPTION: &'static str = "Get posts that mention a specific user";
    type Params = UserMentionsParams;

    fn validate(params: &UserMentionsParams) -> Result<(), ToolError> {
        let (min, max) = TIMELINE_MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &UserMentionsParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(format!("/users/{}/mentions", segment(&params.id)), params)
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
    fn test_timeline_max_results_bounds() {
        for (value, valid) in [(4, false), (5, true), (100, true), (101, false)] {
            let result =
                GetUserTimelineTool::prepare(args(json!({ "id": "9", "max_results": value })));
            assert_eq!(result.is_ok(), valid, "max_results = {value}");

            let result =
                GetUserMentionsTool::prepare(args(json!({ "id": "9", "max_results": value })));
            assert_eq!(result.is_ok(), valid, "max_results = {value}");
        }
    }

    #[test]
    fn test_timeline_query_in_declaration_order() {
        let binding = GetUserTimelineTool::prepare(args(json!({
            "until_id": "500",
            "exclude": "replies",
            "max_results": 20,
            "id": "2244994945",
            "pagination_token": "abc",
        })))
        .unwrap();
        assert_eq!(binding.path, "/users/2244994945/tweets");
        assert_eq!(
            binding.query,
            "pagination_token=abc&max_results=20&exclude=replies&until_id=500"
        );
    }

    #[test]
    fn test_mentions_path() {
        let binding = GetUserMentionsTool::prepare(args(json!({ "id": "42" }))).unwrap();
        assert_eq!(binding.path, "/users/42/mentions");
        assert!(binding.query.is_empty());
    }

    #[test]
    fn test_timeline_accepts_integral_float_page_size() {
        let binding =
            GetUserTimelineTool::prepare(args(json!({ "id": "1", "max_results": 10.0 }))).unwrap();
        assert_eq!(binding.query, "max_results=10");

        let binding =
            GetUserMentionsTool::prepare(args(json!({ "id": "1", "max_results": 100.0 }))).unwrap();
        assert_eq!(binding.query, "max_results=100");

        assert!(
            GetUserTimelineTool::prepare(args(json!({ "id": "1", "max_results": 4.0 }))).is_err()
        );
    }

    #[test]
    fn test_timeline_rejects_fractional_page_size() {
        assert!(
            GetUserTimelineTool::prepare(args(json!({ "id": "9", "max_results": 10.5 }))).is_err()
        );
    }
}
