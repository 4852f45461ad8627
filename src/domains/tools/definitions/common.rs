//! Parameter groups shared by several X API tools.
//!
//! These are flattened into the per-tool parameter structs, so they show up
//! as top-level properties in the schema and in the query string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::tools::{binding::path_param, validation::whole_number};

/// Field selectors accepted by the post lookup endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct PostFieldSelectors {
    /// Comma-separated list of expansion fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansions: Option<String>,

    /// Comma-separated list of tweet fields to include
    #[serde(rename = "tweet.fields", default, skip_serializing_if = "Option::is_none")]
    pub tweet_fields: Option<String>,

    /// Comma-separated list of user fields to include
    #[serde(rename = "user.fields", default, skip_serializing_if = "Option::is_none")]
    pub user_fields: Option<String>,

    /// Comma-separated list of media fields to include
    #[serde(rename = "media.fields", default, skip_serializing_if = "Option::is_none")]
    pub media_fields: Option<String>,

    /// Comma-separated list of poll fields to include
    #[serde(rename = "poll.fields", default, skip_serializing_if = "Option::is_none")]
    pub poll_fields: Option<String>,

    /// Comma-separated list of place fields to include
    #[serde(rename = "place.fields", default, skip_serializing_if = "Option::is_none")]
    pub place_fields: Option<String>,
}

/// Field selectors accepted by timelines, searches and engagement lists.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct FieldSelectors {
    /// Comma-separated list of expansion fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansions: Option<String>,

    /// Comma-separated list of tweet fields to include
    #[serde(rename = "tweet.fields", default, skip_serializing_if = "Option::is_none")]
    pub tweet_fields: Option<String>,

    /// Comma-separated list of user fields to include
    #[serde(rename = "user.fields", default, skip_serializing_if = "Option::is_none")]
    pub user_fields: Option<String>,
}

/// Time and id window shared by timelines, searches and counts.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct TimeWindow {
    /// Oldest UTC timestamp (ISO 8601) to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Newest UTC timestamp (ISO 8601) to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Only return posts after this ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since_id: Option<String>,

    /// Only return posts before this ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_id: Option<String>,
}

/// A user acting on a post (retweet, like, bookmark).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserPostParams {
    /// The ID of the authenticated user performing the action
    pub user_id: String,

    /// The ID of the post being acted on
    pub tweet_id: String,
}

/// A paged list hanging off a single post or user.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PagedListParams {
    /// The ID of the post or user the list belongs to
    #[serde(skip_serializing_if = "path_param")]
    pub id: String,

    /// Maximum number of results (1-100)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number"
    )]
    #[schemars(with = "Option<u32>")]
    #[schemars(range(min = 1, max = 100))]
    pub max_results: Option<u32>,

    /// Token for pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,

    #[serde(flatten)]
    pub fields: FieldSelectors,
}

impl PagedListParams {
    pub const MAX_RESULTS: (u32, u32) = (1, 100);
}
