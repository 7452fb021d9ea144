//! intro-sync: mirror self-introduction discussion comments into reviewed record files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{SyncOptions, SyncReport, check, load_settings, sync};
pub use domain::{AppError, CommentEvent, CommentRecord, ErrorKind, EventAction, FormatViolation};
