pub mod loader;
pub mod sync_config;

pub use loader::{load_event, load_token, parse_config_content, resolve_settings};
pub use sync_config::{DiscussionLocation, RepoSlug, Settings, SyncConfig};
