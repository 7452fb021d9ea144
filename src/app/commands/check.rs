//! `check` command implementation.

use crate::domain::{AppError, validate_content};

/// Validate comment content without touching any remote service.
pub fn execute(content: &str) -> Result<(), AppError> {
    validate_content(content)?;
    Ok(())
}
