//! The `Navigator`: one car driving around one lot.
//!
//! # Session flow
//!
//! ```text
//! select(free cell)          no car yet  → car placed
//! select(other free cell)    car idle    → route planned, drive starts
//! step() … step()            driving     → car advances one cell per call
//!                            last cell   → arrival; car rests on the goal
//! reset()                    car idle    → new layout, session cleared
//! ```
//!
//! While a drive is in progress, new destinations and resets are refused
//! with [`SimError::Busy`].  The last route stays available through
//! [`Navigator::path`] after arrival so it can still be drawn.

use pf_core::{Cell, LotConfig, LotRng, Strategy};
use pf_spatial::{Path, SpatialError};

use crate::{DriveObserver, ParkingLot, SimError, SimResult};

/// One move of the car along its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveStep {
    /// Position of `to` in the route (1 for the first move).
    pub index: usize,
    pub from:  Cell,
    pub to:    Cell,
}

/// What a [`Navigator::select`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The car was placed on the selected cell.
    CarPlaced(Cell),
    /// A route to the selected cell was planned; the drive has started.
    Routed { goal: Cell, moves: usize },
}

pub struct Navigator {
    lot:         ParkingLot,
    rng:         LotRng,
    strategy:    Strategy,
    car:         Option<Cell>,
    destination: Option<Cell>,
    path:        Option<Path>,
    /// Index into `path.cells()` of the car's current cell while driving.
    path_index:  usize,
    driving:     bool,
}

impl Navigator {
    /// Build a lot from `config`, seeded with `config.seed`.
    pub fn new(config: &LotConfig) -> SimResult<Self> {
        let mut rng = LotRng::new(config.seed);
        let lot = ParkingLot::new(config, &mut rng)?;
        Ok(Self::with_lot(lot, rng, config.strategy))
    }

    /// Start a session on an existing lot.  `rng` feeds later resets.
    pub fn with_lot(lot: ParkingLot, rng: LotRng, strategy: Strategy) -> Self {
        Self {
            lot,
            rng,
            strategy,
            car:         None,
            destination: None,
            path:        None,
            path_index:  0,
            driving:     false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn car(&self) -> Option<Cell> {
        self.car
    }

    pub fn destination(&self) -> Option<Cell> {
        self.destination
    }

    /// The active route while driving, or the last completed one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn is_driving(&self) -> bool {
        self.driving
    }

    /// Moves of the active route not yet taken; 0 when idle.
    pub fn remaining_moves(&self) -> usize {
        match (&self.path, self.driving) {
            (Some(p), true) => p.edge_count() - self.path_index,
            _ => 0,
        }
    }

    /// The route's moves in travel order, the order in which a graph view
    /// highlights them.  Empty when there is no route.
    pub fn highlight_order(&self) -> Vec<(Cell, Cell)> {
        self.path.as_ref().map(|p| p.moves().collect()).unwrap_or_default()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Flip between BFS and A* for the next route.  Allowed mid-drive; the
    /// active route is unaffected.
    pub fn toggle_strategy(&mut self) -> Strategy {
        self.strategy = self.strategy.toggled();
        log::info!("strategy set to {}", self.strategy);
        self.strategy
    }

    /// Handle a click on `cell`: place the car if there is none yet,
    /// otherwise route to it.
    pub fn select<O: DriveObserver>(&mut self, cell: Cell, observer: &mut O) -> SimResult<Selection> {
        match self.car {
            None => self.place_car(cell).map(Selection::CarPlaced),
            Some(_) => {
                let moves = self.set_destination(cell, observer)?;
                Ok(Selection::Routed { goal: cell, moves })
            }
        }
    }

    /// Put the car on a free cell.  Replaces any earlier placement when idle.
    pub fn place_car(&mut self, cell: Cell) -> SimResult<Cell> {
        if self.driving {
            log::warn!("ignoring car placement at {cell}: drive in progress");
            return Err(SimError::Busy);
        }
        self.check_free(cell)?;
        self.car = Some(cell);
        self.destination = None;
        self.path = None;
        log::info!("car placed at {cell}");
        Ok(cell)
    }

    /// Plan a route from the car to `goal` with the current strategy and
    /// start driving.  Returns the number of moves.
    pub fn set_destination<O: DriveObserver>(&mut self, goal: Cell, observer: &mut O) -> SimResult<usize> {
        if self.driving {
            log::warn!("ignoring destination {goal}: drive in progress");
            return Err(SimError::Busy);
        }
        let start = self.car.ok_or(SimError::NoCar)?;
        if start == goal {
            return Err(SimError::SameCell(goal));
        }
        self.check_free(goal)?;

        let path = self.lot.route(self.strategy, start, goal).inspect_err(|e| {
            log::warn!("no route: {e}");
        })?;

        let moves = path.edge_count();
        observer.on_route(self.strategy, &path);
        self.destination = Some(goal);
        self.path = Some(path);
        self.path_index = 0;
        self.driving = true;
        Ok(moves)
    }

    /// Advance the car one cell.  Returns `None` when no drive is active.
    ///
    /// The call that lands on the goal also fires
    /// [`on_arrival`](DriveObserver::on_arrival) and ends the drive.
    pub fn step<O: DriveObserver>(&mut self, observer: &mut O) -> Option<DriveStep> {
        if !self.driving {
            return None;
        }
        let path = self.path.as_ref()?;
        let last = path.edge_count();

        let step = if self.path_index < last {
            let from = path.cells()[self.path_index];
            self.path_index += 1;
            let to = path.cells()[self.path_index];
            self.car = Some(to);
            let step = DriveStep { index: self.path_index, from, to };
            observer.on_step(&step);
            Some(step)
        } else {
            None
        };

        if self.path_index >= last {
            let goal = path.goal();
            self.driving = false;
            self.car = Some(goal);
            self.destination = None;
            observer.on_arrival(goal);
        }
        step
    }

    /// Run [`step`](Self::step) until the car arrives.  Returns the number
    /// of moves made.
    pub fn drive<O: DriveObserver>(&mut self, observer: &mut O) -> usize {
        let mut moves = 0;
        while self.driving {
            if self.step(observer).is_some() {
                moves += 1;
            }
        }
        moves
    }

    /// Draw a new layout and clear the car, destination and route.
    pub fn reset<O: DriveObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.driving {
            log::warn!("ignoring reset: drive in progress");
            return Err(SimError::Busy);
        }
        self.lot.randomize(&mut self.rng);
        self.car = None;
        self.destination = None;
        self.path = None;
        self.path_index = 0;
        observer.on_reset(&self.lot);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_free(&self, cell: Cell) -> SimResult<()> {
        let size = self.lot.size();
        if !cell.in_bounds(size) {
            return Err(SpatialError::OutOfBounds { cell, size }.into());
        }
        if !self.lot.grid().is_free(cell) {
            log::warn!("spot {cell} is occupied");
            return Err(SpatialError::Occupied(cell).into());
        }
        Ok(())
    }
}
