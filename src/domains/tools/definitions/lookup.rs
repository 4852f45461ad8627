//! Post lookup tools.
//!
//! - `getSinglePost`: `GET /tweets/{id}`
//! - `getBulkPosts`: `GET /tweets?ids=...`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::PostFieldSelectors;
use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool,
    binding::{path_param, segment},
};

/// Parameters for a single post lookup.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SinglePostParams {
    /// The ID of the post to retrieve
    #[serde(skip_serializing_if = "path_param")]
    pub id: String,

    #[serde(flatten)]
    pub fields: PostFieldSelectors,
}

/// Parameters for a bulk post lookup.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct BulkPostsParams {
    /// Comma-separated list of post IDs (up to 100)
    pub ids: String,

    #[serde(flatten)]
    pub fields: PostFieldSelectors,
}

pub struct GetSinglePostTool;

impl XApiTool for GetSinglePostTool {
    const NAME: &'static str = "getSinglePost";
    const DESCRIPTION: &'static str =
        "Retrieve a single post by ID with optional field expansions";
    type Params = SinglePostParams;

    fn bind(params: &SinglePostParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(format!("/tweets/{}", segment(&params.id)), params)
    }
}

pub struct GetBulkPostsTool;

impl XApiTool for GetBulkPostsTool {
    const NAME: &'static str = "getBulkPosts";
    const DESCRIPTION: &'static str = "Retrieve up to 100 posts by their IDs";
    type Params = BulkPostsParams;

    fn bind(params: &BulkPostsParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get("/tweets".to_string(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_single_post_binding() {
        let args = json!({ "id": "1460323737035677698", "tweet.fields": "created_at" });
        let binding = GetSinglePostTool::prepare(args.as_object().cloned()).unwrap();
        assert_eq!(binding.method, HttpMethod::Get);
        assert_eq!(binding.path, "/tweets/1460323737035677698");
        assert_eq!(binding.query, "tweet.fields=created_at");
    }

    #[test]
    fn test_single_post_id_is_escaped() {
        let args = json!({ "id": "../users/me?x=1" });
        let binding = GetSinglePostTool::prepare(args.as_object().cloned()).unwrap();
        let encoded = binding.path.strip_prefix("/tweets/").unwrap();
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('?'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), "../users/me?x=1");
        assert!(binding.query.is_empty());
    }

    #[test]
    fn test_bulk_posts_ids_go_to_query() {
        let args = json!({ "ids": "1,2,3", "expansions": "author_id" });
        let binding = GetBulkPostsTool::prepare(args.as_object().cloned()).unwrap();
        assert_eq!(binding.path, "/tweets");
        assert_eq!(binding.query, "ids=1%2C2%2C3&expansions=author_id");
    }

    #[test]
    fn test_bulk_posts_requires_ids() {
        let err = GetBulkPostsTool::prepare(json!({}).as_object().cloned()).unwrap_err();
        assert!(err.to_string().contains("ids"));
    }

    #[test]
    fn test_schema_lists_field_selectors() {
        let tool = GetSinglePostTool::to_tool();
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("id").is_some());
        assert!(properties.get("tweet.fields").is_some());
        assert!(properties.get("place.fields").is_some());
    }
}
