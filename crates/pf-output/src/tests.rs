//! Integration tests for pf-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvStepWriter;
    use crate::row::{RouteRow, StepRow};
    use crate::writer::StepWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvStepWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("routes.csv").exists());
        assert!(dir.path().join("steps.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvStepWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("routes.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["route", "strategy", "start_row", "start_col", "goal_row", "goal_col", "edges"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("steps.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["route", "step", "row", "col"]);
    }

    #[test]
    fn rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvStepWriter::new(dir.path()).unwrap();
        w.write_route(&RouteRow {
            route: 0, strategy: "astar", start_row: 0, start_col: 0, goal_row: 0, goal_col: 2, edges: 2,
        })
        .unwrap();
        w.write_step(&StepRow { route: 0, step: 1, row: 0, col: 1 }).unwrap();
        w.write_step(&StepRow { route: 0, step: 2, row: 0, col: 2 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("routes.csv")).unwrap();
        let routes: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(routes.len(), 1);
        assert_eq!(&routes[0][1], "astar");
        assert_eq!(&routes[0][6], "2");

        let mut rdr = csv::Reader::from_path(dir.path().join("steps.csv")).unwrap();
        let steps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(&steps[1][1], "2"); // step
        assert_eq!(&steps[1][3], "2"); // col
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvStepWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use pf_core::{Cell, LotRng, Strategy};
    use pf_sim::{Navigator, ParkingLot};
    use pf_spatial::Grid;

    use crate::row::{RouteRow, StepRow};
    use crate::writer::StepWriter;
    use crate::{DriveOutputObserver, OutputError, OutputResult};

    /// In-memory writer for inspecting what the observer produced.
    #[derive(Default)]
    struct MemWriter {
        routes:   Vec<RouteRow>,
        steps:    Vec<StepRow>,
        finishes: usize,
        fail:     bool,
    }

    impl StepWriter for MemWriter {
        fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
            self.routes.push(*row);
            Ok(())
        }

        fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.steps.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn navigator() -> Navigator {
        let lot = ParkingLot::from_grid(Grid::from_rows(&["...", ".#.", "..."]).unwrap());
        Navigator::with_lot(lot, LotRng::new(0), Strategy::Bfs)
    }

    #[test]
    fn drive_is_logged() {
        let mut nav = navigator();
        let mut obs = DriveOutputObserver::new(MemWriter::default());

        nav.select(Cell::new(0, 0), &mut obs).unwrap();
        nav.select(Cell::new(0, 2), &mut obs).unwrap();
        nav.drive(&mut obs);
        nav.select(Cell::new(2, 2), &mut obs).unwrap();
        nav.drive(&mut obs);
        obs.finish().unwrap();

        assert_eq!(obs.routes_logged(), 2);
        let w = obs.into_writer();
        assert_eq!(w.finishes, 1);
        assert_eq!(w.routes.len(), 2);
        assert_eq!(w.routes[0].strategy, "bfs");
        assert_eq!((w.routes[1].start_row, w.routes[1].start_col), (0, 2));
        assert_eq!(w.steps.len(), 4);
        assert_eq!(w.steps[0], StepRow { route: 0, step: 1, row: 0, col: 1 });
        assert_eq!(w.steps[3], StepRow { route: 1, step: 2, row: 2, col: 2 });
    }

    #[test]
    fn first_error_is_kept() {
        let mut nav = navigator();
        let writer = MemWriter { fail: true, ..MemWriter::default() };
        let mut obs = DriveOutputObserver::new(writer);

        nav.select(Cell::new(0, 0), &mut obs).unwrap();
        nav.select(Cell::new(2, 0), &mut obs).unwrap();
        nav.drive(&mut obs);

        assert!(matches!(obs.finish(), Err(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}
