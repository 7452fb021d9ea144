mod clock;
mod discussion_board;
mod record_directory;
mod repository_host;

pub use clock::Clock;
pub use discussion_board::{DiscussionBoard, DiscussionComment, DiscussionPage};
pub use record_directory::RecordDirectory;
pub use repository_host::{CommitInfo, PullRequestInfo, RepositoryFile, RepositoryHost};
