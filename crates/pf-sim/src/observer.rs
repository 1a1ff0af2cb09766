//! Drive observer trait for progress reporting and data collection.

use pf_core::{Cell, Strategy};
use pf_spatial::Path;

use crate::{DriveStep, ParkingLot};

/// Callbacks invoked by the [`Navigator`][crate::Navigator] at key points of
/// a session.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl DriveObserver for StepPrinter {
///     fn on_step(&mut self, step: &DriveStep) {
///         println!("step {}: {} -> {}", step.index, step.from, step.to);
///     }
/// }
/// ```
pub trait DriveObserver {
    /// A new route was planned and the drive is about to start.
    fn on_route(&mut self, _strategy: Strategy, _path: &Path) {}

    /// The car moved one cell.
    fn on_step(&mut self, _step: &DriveStep) {}

    /// The car reached the end of its route.
    fn on_arrival(&mut self, _cell: Cell) {}

    /// The lot was regenerated; any drawn grid or graph is stale.
    fn on_reset(&mut self, _lot: &ParkingLot) {}
}

/// A [`DriveObserver`] that does nothing.
pub struct NoopObserver;

impl DriveObserver for NoopObserver {}

/// A [`DriveObserver`] that reports session events through `log`.
pub struct LogObserver;

impl DriveObserver for LogObserver {
    fn on_route(&mut self, strategy: Strategy, path: &Path) {
        log::info!(
            "{strategy} route {} -> {}: {} moves",
            path.start(),
            path.goal(),
            path.edge_count()
        );
    }

    fn on_step(&mut self, step: &DriveStep) {
        log::debug!("step {}: {} -> {}", step.index, step.from, step.to);
    }

    fn on_arrival(&mut self, cell: Cell) {
        log::info!("reached {cell}");
    }

    fn on_reset(&mut self, lot: &ParkingLot) {
        log::info!("lot reset: {} free spots", lot.grid().free_count());
    }
}
