pub mod clock_system;
pub mod discussion_graphql_http;
pub mod github_rest_http;
pub mod record_directory_filesystem;

pub use clock_system::SystemClock;
pub use discussion_graphql_http::HttpDiscussionBoard;
pub use github_rest_http::HttpRepositoryHost;
pub use record_directory_filesystem::FilesystemRecordDirectory;
