//! `DriveOutputObserver<W>` bridges `DriveObserver` to a `StepWriter`.

use pf_core::Strategy;
use pf_sim::{DriveObserver, DriveStep};
use pf_spatial::Path;

use crate::row::{RouteRow, StepRow};
use crate::writer::StepWriter;
use crate::{OutputError, OutputResult};

/// A [`DriveObserver`] that logs every route and move to a [`StepWriter`].
///
/// Errors from the writer are stored internally because `DriveObserver`
/// methods have no return value.  Check for them with
/// [`take_error`][Self::take_error] or [`finish`][Self::finish].
pub struct DriveOutputObserver<W: StepWriter> {
    writer:     W,
    /// Number of the route being driven; `None` before the first route.
    route:      Option<u64>,
    last_error: Option<OutputError>,
}

impl<W: StepWriter> DriveOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            route:      None,
            last_error: None,
        }
    }

    /// Number of routes recorded so far.
    pub fn routes_logged(&self) -> u64 {
        self.route.map_or(0, |r| r + 1)
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and surface the first stored error, if any.
    pub fn finish(&mut self) -> OutputResult<()> {
        let flushed = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => flushed,
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: StepWriter> DriveObserver for DriveOutputObserver<W> {
    fn on_route(&mut self, strategy: Strategy, path: &Path) {
        let route = self.route.map_or(0, |r| r + 1);
        self.route = Some(route);
        let (start, goal) = (path.start(), path.goal());
        let row = RouteRow {
            route,
            strategy:  strategy.as_str(),
            start_row: start.row,
            start_col: start.col,
            goal_row:  goal.row,
            goal_col:  goal.col,
            edges:     path.edge_count() as u64,
        };
        let result = self.writer.write_route(&row);
        self.store_err(result);
    }

    fn on_step(&mut self, step: &DriveStep) {
        let row = StepRow {
            route: self.route.unwrap_or(0),
            step:  step.index as u64,
            row:   step.to.row,
            col:   step.to.col,
        };
        let result = self.writer.write_step(&row);
        self.store_err(result);
    }
}
