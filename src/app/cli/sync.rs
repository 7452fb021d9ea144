//! Sync command implementation.

use std::path::PathBuf;

use crate::app::api::{self, SyncOptions};
use crate::domain::AppError;

pub fn run_sync(workdir: PathBuf, config: Option<PathBuf>) -> Result<i32, AppError> {
    let report = api::sync(SyncOptions { workdir, config })?;

    match &report.job {
        Ok(pull_request) => {
            println!("✅ Opened {} and replied ({})", pull_request.url, report.reply_id);
            Ok(0)
        }
        Err(err) => {
            eprintln!("❌ {}: {}", err.kind(), err);
            eprintln!("Failure reply posted ({})", report.reply_id);
            Ok(1)
        }
    }
}
