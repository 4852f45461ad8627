//! Manage posts tools.
//!
//! - `createPost`: `POST /tweets`
//! - `deletePost`: `DELETE /tweets/{id}`
//! - `hideReply`: `PUT /tweets/{id}/hidden`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool,
    binding::{path_param, segment},
    validation::{check_max_items, check_range, whole_number},
};

/// Who may reply to a new post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ReplySettings {
    MentionedUsers,
    Following,
    Everyone,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Geo {
    /// The place ID for geo-tagging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Media {
    /// Array of media IDs to attach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_ids: Option<Vec<String>>,

    /// Array of user IDs to tag in media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagged_user_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Poll {
    /// Poll duration in minutes (5-10080)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole_number"
    )]
    #[schemars(with = "Option<u32>")]
    #[schemars(range(min = 5, max = 10080))]
    pub duration_minutes: Option<u32>,

    /// Poll options (at most 4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 4))]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Reply {
    /// User IDs to exclude from the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_reply_user_ids: Option<Vec<String>>,

    /// ID of the post being replied to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to_tweet_id: Option<String>,
}

/// Parameters for creating a post. Serialized as-is into the request body.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreatePostParams {
    /// The text content of the post
    pub text: String,

    /// Direct message deep link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_message_deep_link: Option<String>,

    /// Whether the post is for super followers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_super_followers_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,

    /// ID of the post to quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_tweet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<Reply>,

    /// Who can reply to this post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_settings: Option<ReplySettings>,
}

/// Parameters for deleting a post.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeletePostParams {
    /// The ID of the post to delete
    pub id: String,
}

/// Parameters for hiding or unhiding a reply.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct HideReplyParams {
    /// The ID of the reply to hide/unhide
    #[serde(skip_serializing_if = "path_param")]
    pub id: String,

    /// Whether to hide (true) or unhide (false) the reply
    pub hidden: bool,
}

pub struct CreatePostTool;

impl CreatePostTool {
    pub const POLL_DURATION_MINUTES: (u32, u32) = (5, 10080);
    pub const MAX_POLL_OPTIONS: usize = 4;
}

impl XApiTool for CreatePostTool {
    const NAME: &'static str = "createPost";
    const DESCRIPTION: &'static str = "Create a new post on behalf of the authenticated user";
    type Params = CreatePostParams;

    fn validate(params: &CreatePostParams) -> Result<(), ToolError> {
        if let Some(poll) = &params.poll {
            let (min, max) = Self::POLL_DURATION_MINUTES;
            check_range("poll.duration_minutes", poll.duration_minutes, min, max)?;
            check_max_items(
                "poll.options",
                poll.options.as_deref(),
                Self::MAX_POLL_OPTIONS,
            )?;
        }
        Ok(())
    }

    fn bind(params: &CreatePostParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::post("/tweets".to_string(), params)
    }
}

pub struct DeletePostTool;

impl XApiTool for DeletePostTool {
    const NAME: &'static str = "deletePost";
    const DESCRIPTION: &'static str = "Delete a post by ID";
    type Params = DeletePostParams;

    fn bind(params: &DeletePostParams) -> Result<EndpointBinding, ToolError> {
        Ok(EndpointBinding::delete(format!(
            "/tweets/{}",
            segment(&params.id)
        )))
    }
}

pub struct HideReplyTool;

impl XApiTool for HideReplyTool {
    const NAME: &'static str = "hideReply";
    const DESCRIPTION: &'static str = "Hide or unhide a reply to a post";
    type Params = HideReplyParams;

    fn bind(params: &HideReplyParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::put(format!("/tweets/{}/hidden", segment(&params.id)), params)
    }
}
