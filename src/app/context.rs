use crate::domain::Settings;
use crate::ports::{Clock, DiscussionBoard, RecordDirectory, RepositoryHost};

/// Everything one job run needs, built once per invocation.
pub struct AppContext<H, D, R, C>
where
    H: RepositoryHost,
    D: DiscussionBoard,
    R: RecordDirectory,
    C: Clock,
{
    settings: Settings,
    host: H,
    board: D,
    records: R,
    clock: C,
}

impl<H, D, R, C> AppContext<H, D, R, C>
where
    H: RepositoryHost,
    D: DiscussionBoard,
    R: RecordDirectory,
    C: Clock,
{
    pub fn new(settings: Settings, host: H, board: D, records: R, clock: C) -> Self {
        Self { settings, host, board, records, clock }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Records repository API.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Discussion API.
    pub fn board(&self) -> &D {
        &self.board
    }

    /// Local records directory.
    pub fn records(&self) -> &R {
        &self.records
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
