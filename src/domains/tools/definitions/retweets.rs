//! Retweet tools.
//!
//! - `getRetweets`: `GET /tweets/{id}/retweets`
//! - `createRetweet`: `POST /users/{user_id}/retweets`
//! - `deleteRetweet`: `DELETE /users/{user_id}/retweets/{tweet_id}`

use serde_json::json;

use super::common::{PagedListParams, UserPostParams};
use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool, binding::segment, validation::check_range,
};

pub struct GetRetweetsTool;

impl XApiTool for GetRetweetsTool {
    const NAME: &'static str = "getRetweets";
    const DESCRIPTION: &'static str = "Get posts that retweet a specific post";
    type Params = PagedListParams;

    fn validate(params: &PagedListParams) -> Result<(), ToolError> {
        let (min, max) = PagedListParams::MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &PagedListParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(format!("/tweets/{}/retweets", segment(&params.id)), params)
    }
}

pub struct CreateRetweetTool;

impl XApiTool for CreateRetweetTool {
    const NAME: &'static str = "createRetweet";
    const DESCRIPTION: &'static str = "Retweet a post on behalf of the authenticated user";
    type Params = UserPostParams;

    fn bind(params: &UserPostParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::post(
            format!("/users/{}/retweets", segment(&params.user_id)),
            &json!({ "tweet_id": params.tweet_id }),
        )
    }
}

pub struct DeleteRetweetTool;

impl XApiTool for DeleteRetweetTool {
    const NAME: &'static str = "deleteRetweet";
    const DESCRIPTION: &'static str = "Remove a retweet on behalf of the authenticated user";
    type Params = UserPostParams;

    fn bind(params: &UserPostParams) -> Result<EndpointBinding, ToolError> {
        Ok(EndpointBinding::delete(format!(
            "/users/{}/retweets/{}",
            segment(&params.user_id),
            segment(&params.tweet_id)
        )))
    }
}
