//! The `StepWriter` trait implemented by log backends.

use crate::{OutputResult, RouteRow, StepRow};

/// Sink for planned routes and the moves driven along them.
///
/// The observer stores errors internally; retrieve them with
/// [`DriveOutputObserver::take_error`](crate::DriveOutputObserver::take_error).
pub trait StepWriter {
    /// Record one planned route.
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()>;

    /// Record one move.
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
