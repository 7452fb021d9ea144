//! Branch, commit, and pull request texts for one comment change.

use uuid::Uuid;

use crate::domain::{AppError, CommentEvent, EventAction};

const BRANCH_SUFFIX_LEN: usize = 6;

/// `comment-<id>-<6 hex chars>`; the random tail keeps repeated events apart.
pub fn branch_name(comment_id: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("comment-{comment_id}-{}", &suffix[..BRANCH_SUFFIX_LEN])
}

/// Kind of file change committed on the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    Add,
    Update,
    Delete,
}

impl RecordChange {
    pub fn commit_message(&self, comment_id: &str) -> String {
        let verb = match self {
            RecordChange::Add => "Add",
            RecordChange::Update => "Update",
            RecordChange::Delete => "Delete",
        };
        format!("{verb} comment data for {comment_id}")
    }
}

/// Decide the file change for an event, given whether the comment already has a record.
pub fn plan_change(
    action: &EventAction,
    record_exists: bool,
    comment_id: &str,
) -> Result<RecordChange, AppError> {
    match (action, record_exists) {
        (EventAction::Created, _) => Ok(RecordChange::Add),
        (EventAction::Edited, false) => Ok(RecordChange::Add),
        (EventAction::Edited, true) => Ok(RecordChange::Update),
        (EventAction::Deleted, true) => Ok(RecordChange::Delete),
        (EventAction::Deleted, false) => {
            Err(AppError::RecordNotFound { comment_id: comment_id.to_string() })
        }
        (EventAction::Other(tag), _) => Err(AppError::UnsupportedAction(tag.clone())),
    }
}

pub fn pull_request_title(comment_id: &str) -> String {
    format!("Changes for comment {comment_id}")
}

pub fn pull_request_body(event: &CommentEvent) -> String {
    format!(
        "处理的评论: {}\n\n事件类型: {}\n触发者: {}\n\n内容:\n{}",
        event.link, event.action, event.actor, event.content
    )
}
