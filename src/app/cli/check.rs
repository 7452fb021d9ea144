//! Check command implementation.

use std::io::Read;
use std::path::PathBuf;

use crate::app::api;
use crate::domain::AppError;
use crate::domain::configuration::loader::CONTENT_VAR;

pub fn run_check(file: Option<PathBuf>) -> Result<i32, AppError> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => match std::env::var(CONTENT_VAR) {
            Ok(content) => content,
            Err(_) => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                content
            }
        },
    };

    match api::check(&content) {
        Ok(()) => {
            println!("✅ Content follows the introduction format");
            Ok(0)
        }
        Err(AppError::Format(violation)) => {
            eprintln!("❌ {}", violation);
            Ok(1)
        }
        Err(err) => Err(err),
    }
}
