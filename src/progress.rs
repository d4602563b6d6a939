// src/progress.rs
use std::path::Path;

use crate::data::Snapshot;

/// Status reporting for the runner. The CLI implements this to print what was
/// collected; library callers can pass `None` or `NullProgress`.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A snapshot was parsed and its row appended to `path`.
    fn snapshot_saved(&mut self, _snapshot: &Snapshot, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
