//! Like tools.
//!
//! - `getLikingUsers`: `GET /tweets/{id}/liking_users`
//! - `getLikedTweets`: `GET /users/{id}/liked_tweets`
//! - `likePost`: `POST /users/{user_id}/likes`
//! - `unlikePost`: `DELETE /users/{user_id}/likes/{tweet_id}`

use serde_json::json;

use super::common::{PagedListParams, UserPostParams};
use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool, binding::segment, validation::check_range,
};

pub struct GetLikingUsersTool;

impl XApiTool for GetLikingUsersTool {
    const NAME: &'static str = "getLikingUsers";
    const DESCRIPTION: &'static str = "Get users who liked a specific post";
    type Params = PagedListParams;

    fn validate(params: &PagedListParams) -> Result<(), ToolError> {
        let (min, max) = PagedListParams::MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &PagedListParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(
            format!("/tweets/{}/liking_users", segment(&params.id)),
            params,
        )
    }
}

pub struct GetLikedTweetsTool;

impl XApiTool for GetLikedTweetsTool {
    const NAME: &'static str = "getLikedTweets";
    const DESCRIPTION: &'static str = "Get posts that a user has liked";
    type Params = PagedListParams;

    fn validate(params: &PagedListParams) -> Result<(), ToolError> {
        let (min, max) = PagedListParams::MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &PagedListParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(
            format!("/users/{}/liked_tweets", segment(&params.id)),
            params,
        )
    }
}

pub struct LikePostTool;

impl XApiTool for LikePostTool {
    const NAME: &'static str = "likePost";
    const DESCRIPTION: &'static str = "Like a post on behalf of the authenticated user";
    type Params = UserPostParams;

    fn bind(params: &UserPostParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::post(
            format!("/users/{}/likes", segment(&params.user_id)),
            &json!({ "tweet_id": params.tweet_id }),
        )
    }
}

pub struct UnlikePostTool;

impl XApiTool for UnlikePostTool {
    const NAME: &'static str = "unlikePost";
    const DESCRIPTION: &'static str = "Unlike a post on behalf of the authenticated user";
    type Params = UserPostParams;

    fn bind(params: &UserPostParams) -> Result<EndpointBinding, ToolError> {
        Ok(EndpointBinding::delete(format!(
            "/users/{}/likes/{}",
            segment(&params.user_id),
            segment(&params.tweet_id)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::HttpMethod;
    use serde_json::Value;

    fn args(value: Value) -> Option<serde_json::Map<String, Value>> {
        value.as_object().cloned()
    }

    #[test]
    fn test_liking_users_query() {
        let binding = GetLikingUsersTool::prepare(args(json!({
            "id": "10",
            "max_results": 100,
            "user.fields": "username"
        })))
        .unwrap();
        assert_eq!(binding.path, "/tweets/10/liking_users");
        assert_eq!(binding.query, "max_results=100&user.fields=username");
    }

    #[test]
    fn test_liked_tweets_rejects_zero_page() {
        assert!(GetLikedTweetsTool::prepare(args(json!({ "id": "10", "max_results": 0 }))).is_err());
        let binding = GetLikedTweetsTool::prepare(args(json!({ "id": "10" }))).unwrap();
        assert_eq!(binding.path, "/users/10/liked_tweets");
    }

    #[test]
    fn test_like_and_unlike() {
        let like = LikePostTool::prepare(args(json!({ "user_id": "u", "tweet_id": "t" }))).unwrap();
        assert_eq!(like.method, HttpMethod::Post);
        assert_eq!(like.path, "/users/u/likes");
        assert_eq!(like.body, Some(json!({ "tweet_id": "t" })));

        let unlike =
            UnlikePostTool::prepare(args(json!({ "user_id": "u", "tweet_id": "t/1" }))).unwrap();
        assert_eq!(unlike.method, HttpMethod::Delete);
        assert_eq!(unlike.path, "/users/u/likes/t%2F1");
        assert!(unlike.body.is_none());
    }
}
