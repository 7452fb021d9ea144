//! `sync` command implementation.
//!
//! Mirrors one discussion comment event into the records repository through a
//! fresh branch and pull request, then replies under the comment. The job and
//! the reply are separate phases: the reply is attempted whatever the job
//! outcome, and only a failed reply ends the run without one.

mod mutation;
mod notify;

pub use notify::{find_comment_node, notify};

use tracing::{error, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, CommentEvent, RecordTarget, branch_name, plan_change, pull_request_body,
    pull_request_title, record_suffix, validate_content,
};
use crate::ports::{Clock, DiscussionBoard, PullRequestInfo, RecordDirectory, RepositoryHost};

/// Result of a `sync` run whose reply was posted.
#[derive(Debug)]
pub struct SyncReport {
    /// The pull request, or the reason none was opened.
    pub job: Result<PullRequestInfo, AppError>,
    /// Node id of the posted reply.
    pub reply_id: String,
}

impl SyncReport {
    pub fn succeeded(&self) -> bool {
        self.job.is_ok()
    }
}

/// Run the job and reply. `Err` only when the reply could not be posted.
pub fn execute<H, D, R, C>(
    ctx: &AppContext<H, D, R, C>,
    event: &CommentEvent,
) -> Result<SyncReport, AppError>
where
    H: RepositoryHost,
    D: DiscussionBoard,
    R: RecordDirectory,
    C: Clock,
{
    let job = run_job(ctx, event);
    if let Err(err) = &job {
        error!(kind = %err.kind(), "job failed: {}", err);
    }
    let reply_id = notify(ctx, event, &job)?;
    Ok(SyncReport { job, reply_id })
}

/// Branch, validate, commit the record change, and open the pull request.
pub fn run_job<H, D, R, C>(
    ctx: &AppContext<H, D, R, C>,
    event: &CommentEvent,
) -> Result<PullRequestInfo, AppError>
where
    H: RepositoryHost,
    D: DiscussionBoard,
    R: RecordDirectory,
    C: Clock,
{
    let settings = ctx.settings();

    let branch = branch_name(&event.comment_id);
    let base_sha = ctx.host().branch_tip_sha(&settings.base_branch)?;
    ctx.host().create_branch(&branch, &base_sha)?;
    info!(branch = %branch, base_sha = %base_sha, "created branch");

    let existing = ctx.records().find_by_suffix(&record_suffix(&event.comment_id))?;
    let target = RecordTarget::resolve(
        &settings.records_dir,
        existing.into_iter().next(),
        &event.actor,
        &event.comment_id,
    );
    info!(
        path = %target.path,
        found = target.exists,
        action = %event.action,
        "resolved record target"
    );

    if event.action.carries_content() {
        validate_content(&event.content)?;
    }

    let change = plan_change(&event.action, target.exists, &event.comment_id)?;
    mutation::apply(ctx, event, &target, change, &branch)?;

    let pull_request = ctx.host().create_pull_request(
        &branch,
        &settings.base_branch,
        &pull_request_title(&event.comment_id),
        &pull_request_body(event),
    )?;
    info!(url = %pull_request.url, "pull request created");

    Ok(pull_request)
}
