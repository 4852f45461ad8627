//! Tool Registry - the closed set of X API tools.
//!
//! [`XTool`] enumerates every tool the server exposes. Its `ALL` constant
//! fixes the order tools are listed in, and every per-tool behaviour is an
//! exhaustive `match`, so a tool cannot exist without both a definition and
//! an endpoint binding.

use rmcp::model::Tool;
use serde_json::{Map, Value};

use super::binding::EndpointBinding;
use super::definitions::{
    BookmarkPostTool, CreatePostTool, CreateRetweetTool, DeletePostTool, DeleteRetweetTool,
    GetBulkPostsTool, GetLikedTweetsTool, GetLikingUsersTool, GetPostCountsAllTool,
    GetPostCountsRecentTool, GetRetweetsTool, GetSinglePostTool, GetUserBookmarksTool,
    GetUserMentionsTool, GetUserTimelineTool, HideReplyTool, LikePostTool, RemoveBookmarkTool,
    SearchAllTool, SearchRecentTool, UnlikePostTool,
};
use super::error::ToolError;
use super::handlers::XApiTool;

/// Every tool exposed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XTool {
    GetSinglePost,
    GetBulkPosts,
    CreatePost,
    DeletePost,
    HideReply,
    GetUserTimeline,
    GetUserMentions,
    SearchRecent,
    SearchAll,
    GetPostCountsRecent,
    GetPostCountsAll,
    GetRetweets,
    CreateRetweet,
    DeleteRetweet,
    GetLikingUsers,
    GetLikedTweets,
    LikePost,
    UnlikePost,
    GetUserBookmarks,
    BookmarkPost,
    RemoveBookmark,
}

impl XTool {
    /// All tools, in listing order.
    pub const ALL: [XTool; 21] = [
        Self::GetSinglePost,
        Self::GetBulkPosts,
        Self::CreatePost,
        Self::DeletePost,
        Self::HideReply,
        Self::GetUserTimeline,
        Self::GetUserMentions,
        Self::SearchRecent,
        Self::SearchAll,
        Self::GetPostCountsRecent,
        Self::GetPostCountsAll,
        Self::GetRetweets,
        Self::CreateRetweet,
        Self::DeleteRetweet,
        Self::GetLikingUsers,
        Self::GetLikedTweets,
        Self::LikePost,
        Self::UnlikePost,
        Self::GetUserBookmarks,
        Self::BookmarkPost,
        Self::RemoveBookmark,
    ];

    /// Resolve a tool by its MCP name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GetSinglePost => GetSinglePostTool::NAME,
            Self::GetBulkPosts => GetBulkPostsTool::NAME,
            Self::CreatePost => CreatePostTool::NAME,
            Self::DeletePost => DeletePostTool::NAME,
            Self::HideReply => HideReplyTool::NAME,
            Self::GetUserTimeline => GetUserTimelineTool::NAME,
            Self::GetUserMentions => GetUserMentionsTool::NAME,
            Self::SearchRecent => SearchRecentTool::NAME,
            Self::SearchAll => SearchAllTool::NAME,
            Self::GetPostCountsRecent => GetPostCountsRecentTool::NAME,
            Self::GetPostCountsAll => GetPostCountsAllTool::NAME,
            Self::GetRetweets => GetRetweetsTool::NAME,
            Self::CreateRetweet => CreateRetweetTool::NAME,
            Self::DeleteRetweet => DeleteRetweetTool::NAME,
            Self::GetLikingUsers => GetLikingUsersTool::NAME,
            Self::GetLikedTweets => GetLikedTweetsTool::NAME,
            Self::LikePost => LikePostTool::NAME,
            Self::UnlikePost => UnlikePostTool::NAME,
            Self::GetUserBookmarks => GetUserBookmarksTool::NAME,
            Self::BookmarkPost => BookmarkPostTool::NAME,
            Self::RemoveBookmark => RemoveBookmarkTool::NAME,
        }
    }

    /// The tool's MCP metadata (name, description, input schema).
    pub fn definition(self) -> Tool {
        match self {
            Self::GetSinglePost => GetSinglePostTool::to_tool(),
            Self::GetBulkPosts => GetBulkPostsTool::to_tool(),
            Self::CreatePost => CreatePostTool::to_tool(),
            Self::DeletePost => DeletePostTool::to_tool(),
            Self::HideReply => HideReplyTool::to_tool(),
            Self::GetUserTimeline => GetUserTimelineTool::to_tool(),
            Self::GetUserMentions => GetUserMentionsTool::to_tool(),
            Self::SearchRecent => SearchRecentTool::to_tool(),
            Self::SearchAll => SearchAllTool::to_tool(),
            Self::GetPostCountsRecent => GetPostCountsRecentTool::to_tool(),
            Self::GetPostCountsAll => GetPostCountsAllTool::to_tool(),
            Self::GetRetweets => GetRetweetsTool::to_tool(),
            Self::CreateRetweet => CreateRetweetTool::to_tool(),
            Self::DeleteRetweet => DeleteRetweetTool::to_tool(),
            Self::GetLikingUsers => GetLikingUsersTool::to_tool(),
            Self::GetLikedTweets => GetLikedTweetsTool::to_tool(),
            Self::LikePost => LikePostTool::to_tool(),
            Self::UnlikePost => UnlikePostTool::to_tool(),
            Self::GetUserBookmarks => GetUserBookmarksTool::to_tool(),
            Self::BookmarkPost => BookmarkPostTool::to_tool(),
            Self::RemoveBookmark => RemoveBookmarkTool::to_tool(),
        }
    }

    /// Validate raw arguments and translate them into a request.
    pub fn prepare(
        self,
        arguments: Option<Map<String, Value>>,
    ) -> Result<EndpointBinding, ToolError> {
        match self {
            Self::GetSinglePost => GetSinglePostTool::prepare(arguments),
            Self::GetBulkPosts => GetBulkPostsTool::prepare(arguments),
            Self::CreatePost => CreatePostTool::prepare(arguments),
            Self::DeletePost => DeletePostTool::prepare(arguments),
            Self::HideReply => HideReplyTool::prepare(arguments),
            Self::GetUserTimeline => GetUserTimelineTool::prepare(arguments),
            Self::GetUserMentions => GetUserMentionsTool::prepare(arguments),
            Self::SearchRecent => SearchRecentTool::prepare(arguments),
            Self::SearchAll => SearchAllTool::prepare(arguments),
            Self::GetPostCountsRecent => GetPostCountsRecentTool::prepare(arguments),
            Self::GetPostCountsAll => GetPostCountsAllTool::prepare(arguments),
            Self::GetRetweets => GetRetweetsTool::prepare(arguments),
            Self::CreateRetweet => CreateRetweetTool::prepare(arguments),
            Self::DeleteRetweet => DeleteRetweetTool::prepare(arguments),
            Self::GetLikingUsers => GetLikingUsersTool::prepare(arguments),
            Self::GetLikedTweets => GetLikedTweetsTool::prepare(arguments),
            Self::LikePost => LikePostTool::prepare(arguments),
            Self::UnlikePost => UnlikePostTool::prepare(arguments),
            Self::GetUserBookmarks => GetUserBookmarksTool::prepare(arguments),
            Self::BookmarkPost => BookmarkPostTool::prepare(arguments),
            Self::RemoveBookmark => RemoveBookmarkTool::prepare(arguments),
        }
    }
}

/// Tool registry - the ordered, immutable list of tool definitions.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Build the registry. Done once at startup.
    pub fn new() -> Self {
        Self {
            tools: Self::get_all_tools(),
        }
    }

    /// Get all tool names, in listing order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        XTool::ALL.into_iter().map(XTool::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        XTool::ALL.into_iter().map(XTool::definition).collect()
    }

    /// The registered tools, in listing order.
    pub fn list(&self) -> &[Tool] {
        &self.tools
    }

    /// Look a tool up by name.
    pub fn lookup(&self, name: &str) -> Result<XTool, ToolError> {
        XTool::from_name(name).ok_or_else(|| ToolError::unknown_tool(name))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
