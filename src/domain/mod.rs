pub mod change_request;
pub mod comment_event;
pub mod configuration;
pub mod content_rules;
pub mod error;
pub mod record;
pub mod record_path;
pub mod reply;

pub use change_request::{
    RecordChange, branch_name, plan_change, pull_request_body, pull_request_title,
};
pub use comment_event::{CommentEvent, EventAction};
pub use configuration::{DiscussionLocation, RepoSlug, Settings, SyncConfig};
pub use content_rules::{FormatViolation, validate_content};
pub use error::{AppError, ErrorKind};
pub use record::{CommentRecord, format_timestamp};
pub use record_path::{RecordTarget, record_file_name, record_suffix};
pub use reply::{failure_reply, success_reply};
