use std::fmt;
use std::io;

use thiserror::Error;

use crate::domain::FormatViolation;

/// Library-wide error type for intro-sync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Comment content breaks one of the formatting rules.
    #[error(transparent)]
    Format(#[from] FormatViolation),

    /// A `deleted` event arrived for a comment that has no record file.
    #[error("没有找到评论 {comment_id} 对应的记录文件 (no corresponding file found)")]
    RecordNotFound { comment_id: String },

    /// The event action tag is not one of created, edited, deleted.
    #[error("未知的事件类型 '{0}' (unrecognized action)")]
    UnsupportedAction(String),

    /// A hosted API answered with a failure status.
    #[error("{service} API error ({status}): {details}")]
    Api { service: String, status: u16, details: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request to {service} failed: {details}")]
    Http { service: String, details: String },

    /// Response or record payload could not be decoded.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// The originating comment is not in the fetched discussion page.
    #[error("comment {comment_id} not found in the first {page_size} discussion comments")]
    CommentNodeNotFound { comment_id: String, page_size: u32 },
}

/// Error classification used when composing the failure reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FormatViolation,
    PreconditionViolation,
    ExternalApiError,
    NotificationLookupFailure,
    Configuration,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::FormatViolation => "FormatViolation",
            ErrorKind::PreconditionViolation => "PreconditionViolation",
            ErrorKind::ExternalApiError => "ExternalApiError",
            ErrorKind::NotificationLookupFailure => "NotificationLookupFailure",
            ErrorKind::Configuration => "ConfigurationError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn parse_error(what: impl Into<String>, details: impl fmt::Display) -> Self {
        AppError::Parse { what: what.into(), details: details.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Format(_) => ErrorKind::FormatViolation,
            AppError::RecordNotFound { .. } | AppError::UnsupportedAction(_) => {
                ErrorKind::PreconditionViolation
            }
            AppError::Api { .. } | AppError::Http { .. } | AppError::Parse { .. } => {
                ErrorKind::ExternalApiError
            }
            AppError::CommentNodeNotFound { .. } => ErrorKind::NotificationLookupFailure,
            AppError::Io(_) | AppError::Configuration(_) | AppError::TomlParse(_) => {
                ErrorKind::Configuration
            }
        }
    }
}
