//! Record file changes committed on the job branch.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, CommentEvent, CommentRecord, RecordChange, RecordTarget};
use crate::ports::{Clock, CommitInfo, DiscussionBoard, RecordDirectory, RepositoryHost};

/// Commit `change` for the event's record on `branch`.
pub fn apply<H, D, R, C>(
    ctx: &AppContext<H, D, R, C>,
    event: &CommentEvent,
    target: &RecordTarget,
    change: RecordChange,
    branch: &str,
) -> Result<CommitInfo, AppError>
where
    H: RepositoryHost,
    D: DiscussionBoard,
    R: RecordDirectory,
    C: Clock,
{
    let message = change.commit_message(&event.comment_id);
    let commit = match change {
        RecordChange::Add => {
            let record = CommentRecord::new(&event.comment_id, &event.content, ctx.clock().now());
            info!(path = %target.path, "creating record");
            ctx.host().create_file(&target.path, &message, &record.to_json()?, branch)?
        }
        RecordChange::Update => {
            let existing = ctx.host().get_file(&target.path, branch)?;
            let mut record = CommentRecord::from_json(&existing.content)?;
            record.apply_edit(&event.content, ctx.clock().now());
            info!(path = %target.path, "updating record");
            ctx.host().update_file(
                &target.path,
                &message,
                &record.to_json()?,
                &existing.sha,
                branch,
            )?
        }
        RecordChange::Delete => {
            let existing = ctx.host().get_file(&target.path, branch)?;
            info!(path = %target.path, "deleting record");
            ctx.host().delete_file(&target.path, &message, &existing.sha, branch)?
        }
    };

    info!(sha = %commit.sha, url = %commit.url, "committed record change");
    Ok(commit)
}
