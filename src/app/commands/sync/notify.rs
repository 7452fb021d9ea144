//! Reply to the originating discussion comment.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, CommentEvent, failure_reply, success_reply};
use crate::ports::{
    Clock, DiscussionBoard, DiscussionComment, PullRequestInfo, RecordDirectory, RepositoryHost,
};

/// Post the outcome of the job under the comment that triggered it.
///
/// Returns the node id of the posted reply. Failing to find the comment is an
/// error of its own; no reply is posted in that case.
pub fn notify<H, D, R, C>(
    ctx: &AppContext<H, D, R, C>,
    event: &CommentEvent,
    outcome: &Result<PullRequestInfo, AppError>,
) -> Result<String, AppError>
where
    H: RepositoryHost,
    D: DiscussionBoard,
    R: RecordDirectory,
    C: Clock,
{
    let settings = ctx.settings();
    let page_size = settings.discussion.page_size;
    let page = ctx.board().list_comments(page_size)?;

    let node = match find_comment_node(&page.comments, &event.comment_id) {
        Some(node) => node,
        None => {
            if page.comments.len() >= page_size as usize {
                // Only the first page is fetched; later comments are out of reach.
                warn!(
                    comment_id = %event.comment_id,
                    page_size,
                    "comment not in the first page of discussion comments; it may lie beyond it"
                );
            }
            return Err(AppError::CommentNodeNotFound {
                comment_id: event.comment_id.clone(),
                page_size,
            });
        }
    };
    info!(node_id = %node.id, "found comment node");

    let body = match outcome {
        Ok(pull_request) => success_reply(&settings.forum_name, &pull_request.url),
        Err(error) => failure_reply(error),
    };
    let discussion_id = settings.discussion.id.as_deref().unwrap_or(&page.discussion_id);

    let reply_id = ctx.board().add_reply(discussion_id, &node.id, &body)?;
    info!(reply_id = %reply_id, "reply sent");
    Ok(reply_id)
}

/// The comment whose URL ends with `comment_id` as a whole number.
pub fn find_comment_node<'a>(
    comments: &'a [DiscussionComment],
    comment_id: &str,
) -> Option<&'a DiscussionComment> {
    comments.iter().find(|comment| {
        comment.url.strip_suffix(comment_id).is_some_and(|head| {
            !head.chars().next_back().is_some_and(|c| c.is_ascii_digit())
        })
    })
}
