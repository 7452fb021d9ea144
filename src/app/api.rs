//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::{
    AppContext,
    commands::{check, sync},
};
use crate::domain::configuration::{load_event, load_token, parse_config_content, resolve_settings};
use crate::domain::{Settings, SyncConfig};
use crate::services::{
    FilesystemRecordDirectory, HttpDiscussionBoard, HttpRepositoryHost, SystemClock,
};

pub use crate::app::commands::sync::SyncReport;
pub use crate::domain::AppError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = ".intro-sync.toml";

/// Options for the `sync` command.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Local checkout of the records repository.
    pub workdir: PathBuf,
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load settings from the config file and the process environment.
pub fn load_settings(workdir: &Path, config: Option<&Path>) -> Result<Settings, AppError> {
    let file_config = match config {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                AppError::config_error(format!("Cannot read config {}: {}", path.display(), e))
            })?;
            parse_config_content(&content)?
        }
        None => {
            let path = workdir.join(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                debug!(path = %path.display(), "loading config file");
                parse_config_content(&fs::read_to_string(&path)?)?
            } else {
                SyncConfig::default()
            }
        }
    };

    resolve_settings(file_config, env_var)
}

/// Mirror the comment event described by the environment and reply under it.
pub fn sync(options: SyncOptions) -> Result<SyncReport, AppError> {
    let settings = load_settings(&options.workdir, options.config.as_deref())?;
    let token = load_token(env_var)?;
    let event = load_event(env_var)?;

    let host = HttpRepositoryHost::new(
        token.clone(),
        settings.rest_url.clone(),
        settings.repository.clone(),
    )?;
    let board = HttpDiscussionBoard::new(
        token,
        settings.graphql_url.clone(),
        settings.discussion.clone(),
    )?;
    let records = FilesystemRecordDirectory::new(options.workdir.join(&settings.records_dir));
    let ctx = AppContext::new(settings, host, board, records, SystemClock);

    sync::execute(&ctx, &event)
}

/// Validate comment content against the formatting rules.
pub fn check(content: &str) -> Result<(), AppError> {
    check::execute(content)
}
