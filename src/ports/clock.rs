use chrono::{DateTime, Utc};

/// Source of the current time for record timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
