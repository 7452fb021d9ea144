//! Discussion comment lifecycle events.

use std::fmt;

/// Lifecycle action reported by the discussion comment webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    Created,
    Edited,
    Deleted,
    /// Any tag the job does not handle; rejected by the mutation step.
    Other(String),
}

impl EventAction {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "created" => EventAction::Created,
            "edited" => EventAction::Edited,
            "deleted" => EventAction::Deleted,
            other => EventAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventAction::Created => "created",
            EventAction::Edited => "edited",
            EventAction::Deleted => "deleted",
            EventAction::Other(tag) => tag,
        }
    }

    /// Whether the comment content is about to be written to a record.
    pub fn carries_content(&self) -> bool {
        matches!(self, EventAction::Created | EventAction::Edited)
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comment event, as handed to the job by the workflow trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEvent {
    pub action: EventAction,
    pub comment_id: String,
    pub content: String,
    /// Permalink to the comment on the discussion page.
    pub link: String,
    /// Handle of the user who triggered the event.
    pub actor: String,
}
