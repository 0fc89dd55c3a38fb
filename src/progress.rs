// src/progress.rs
/// Human-facing progress for long-running operations (refresh).
/// Frontends implement this; library callers pass `None`.
pub trait Progress {
    /// Free-form status line, e.g. "Fetching Wikipedia data…".
    fn log(&mut self, _msg: &str) {}

    /// Called once at the end of a successful run.
    fn finish(&mut self, _summary: &str) {}
}

