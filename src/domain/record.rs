//! Comment record files stored in the tracked repository.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::domain::AppError;

const INDENT: &[u8] = b"    ";

/// Persisted copy of one introduction comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub comment_id: String,
    pub content: String,
    pub created_at: String,
    pub edited_at: String,
    /// Keys written by other tools; kept as-is on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CommentRecord {
    /// A fresh record whose creation and edit time are both `now`.
    pub fn new(comment_id: &str, content: &str, now: DateTime<Utc>) -> Self {
        let stamp = format_timestamp(now);
        Self {
            comment_id: comment_id.to_string(),
            content: content.to_string(),
            created_at: stamp.clone(),
            edited_at: stamp,
            extra: serde_json::Map::new(),
        }
    }

    /// Replace the content and bump `edited_at`; `created_at` is untouched.
    pub fn apply_edit(&mut self, content: &str, now: DateTime<Utc>) {
        self.content = content.to_string();
        self.edited_at = format_timestamp(now);
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text).map_err(|e| AppError::parse_error("comment record", e))
    }

    /// Serialize with four-space indentation and unescaped non-ASCII text.
    pub fn to_json(&self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut serializer).map_err(|e| AppError::parse_error("comment record", e))?;
        String::from_utf8(buf).map_err(|e| AppError::parse_error("comment record", e))
    }
}

/// UTC timestamp in the `2024-05-01T08:30:00.000000Z` shape used by record files.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
