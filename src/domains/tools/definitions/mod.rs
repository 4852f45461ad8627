//! Tool definitions module.
//!
//! One file per area of the X API. Each tool is a unit struct implementing
//! [`XApiTool`](super::XApiTool).

pub mod bookmarks;
pub mod common;
pub mod counts;
pub mod likes;
pub mod lookup;
pub mod manage;
pub mod retweets;
pub mod search;
pub mod timelines;

pub use bookmarks::{BookmarkPostTool, GetUserBookmarksTool, RemoveBookmarkTool};
pub use counts::{GetPostCountsAllTool, GetPostCountsRecentTool};
pub use likes::{GetLikedTweetsTool, GetLikingUsersTool, LikePostTool, UnlikePostTool};
pub use lookup::{GetBulkPostsTool, GetSinglePostTool};
pub use manage::{CreatePostTool, DeletePostTool, HideReplyTool};
pub use retweets::{CreateRetweetTool, DeleteRetweetTool, GetRetweetsTool};
pub use search::{SearchAllTool, SearchRecentTool};
pub use timelines::{GetUserMentionsTool, GetUserTimelineTool};
