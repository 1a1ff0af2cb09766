//! `pf-output`: drive logs for the parking finder.
//!
//! | Writer           | Files created                 |
//! |------------------|-------------------------------|
//! | [`CsvStepWriter`] | `routes.csv`, `steps.csv`    |
//!
//! Writers implement [`StepWriter`] and are driven by
//! [`DriveOutputObserver`], which implements `pf_sim::DriveObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_output::{CsvStepWriter, DriveOutputObserver};
//!
//! let writer = CsvStepWriter::new(Path::new("./output"))?;
//! let mut obs = DriveOutputObserver::new(writer);
//! nav.select(goal, &mut obs)?;
//! nav.drive(&mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvStepWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DriveOutputObserver;
pub use row::{RouteRow, StepRow};
pub use writer::StepWriter;
