//! CSV log backend.
//!
//! Creates two files in the configured output directory:
//! - `routes.csv`
//! - `steps.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::StepWriter;
use crate::{OutputResult, RouteRow, StepRow};

/// Writes drive logs to two CSV files.
pub struct CsvStepWriter {
    routes:   Writer<File>,
    steps:    Writer<File>,
    finished: bool,
}

impl CsvStepWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut routes = Writer::from_path(dir.join("routes.csv"))?;
        routes.write_record(["route", "strategy", "start_row", "start_col", "goal_row", "goal_col", "edges"])?;

        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record(["route", "step", "row", "col"])?;

        Ok(Self {
            routes,
            steps,
            finished: false,
        })
    }
}

impl StepWriter for CsvStepWriter {
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
        self.routes.write_record(&[
            row.route.to_string(),
            row.strategy.to_string(),
            row.start_row.to_string(),
            row.start_col.to_string(),
            row.goal_row.to_string(),
            row.goal_col.to_string(),
            row.edges.to_string(),
        ])?;
        Ok(())
    }

    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.route.to_string(),
            row.step.to_string(),
            row.row.to_string(),
            row.col.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.routes.flush()?;
        self.steps.flush()?;
        Ok(())
    }
}
