use crate::domain::AppError;

/// A comment in the discussion thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionComment {
    /// Opaque node id used to address replies.
    pub id: String,
    pub url: String,
}

/// First page of the discussion's top-level comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionPage {
    /// Node id of the discussion itself.
    pub discussion_id: String,
    pub comments: Vec<DiscussionComment>,
}

/// Port for the discussion GraphQL API.
pub trait DiscussionBoard {
    /// Fetch up to `first` comments of the configured discussion.
    fn list_comments(&self, first: u32) -> Result<DiscussionPage, AppError>;

    /// Reply under `reply_to_id`; returns the new comment's node id.
    fn add_reply(
        &self,
        discussion_id: &str,
        reply_to_id: &str,
        body: &str,
    ) -> Result<String, AppError>;
}
