//! Bookmark tools.
//!
//! - `getUserBookmarks`: `GET /users/{id}/bookmarks`
//! - `bookmarkPost`: `POST /users/{user_id}/bookmarks`
//! - `removeBookmark`: `DELETE /users/{user_id}/bookmarks/{tweet_id}`

use serde_json::json;

use super::common::{PagedListParams, UserPostParams};
use crate::domains::tools::{
    EndpointBinding, ToolError, XApiTool, binding::segment, validation::check_range,
};

pub struct GetUserBookmarksTool;

impl XApiTool for GetUserBookmarksTool {
    const NAME: &'static str = "getUserBookmarks";
    const DESCRIPTION: &'static str = "Get a user's bookmarked posts";
    type Params = PagedListParams;

    fn validate(params: &PagedListParams) -> Result<(), ToolError> {
        let (min, max) = PagedListParams::MAX_RESULTS;
        check_range("max_results", params.max_results, min, max)
    }

    fn bind(params: &PagedListParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::get(format!("/users/{}/bookmarks", segment(&params.id)), params)
    }
}

pub struct BookmarkPostTool;

impl XApiTool for BookmarkPostTool {
    const NAME: &'static str = "bookmarkPost";
    const DESCRIPTION: &'static str = "Bookmark a post on behalf of the authenticated user";
    type Params = UserPostParams;

    fn bind(params: &UserPostParams) -> Result<EndpointBinding, ToolError> {
        EndpointBinding::post(
            format!("/users/{}/bookmarks", segment(&params.user_id)),
            &json!({ "tweet_id": params.tweet_id }),
        )
    }
}

pub struct RemoveBookmarkTool;

impl XApiTool for RemoveBookmarkTool {
    const NAME: &'static str = "removeBookmark";
    const DESCRIPTION: &'static str = "Remove a bookmark on behalf of the authenticated user";
    type Params = UserPostParams;

    fn bind(params: &UserPostParams) -> Result<EndpointBinding, ToolError> {
        Ok(EndpointBinding::delete(format!(
            "/users/{}/bookmarks/{}",
            segment(&params.user_id),
            segment(&params.tweet_id)
        )))
    }
}
