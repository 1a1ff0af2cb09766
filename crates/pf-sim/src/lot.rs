//! The `ParkingLot` model: an occupancy grid and its adjacency graph.

use pf_core::{Cell, LotConfig, LotRng, Strategy};
use pf_spatial::{build_graph, find_path, route, Graph, Grid, Path, SpatialResult};

use crate::SimResult;

/// Owns the occupancy grid and the graph derived from it.
///
/// The two fields are private and only replaced together, so the graph
/// always matches the grid.  Path queries borrow the lot immutably and hold
/// no state; paths belong to the caller.
#[derive(Clone, Debug)]
pub struct ParkingLot {
    grid:            Grid,
    graph:           Graph,
    occupied_one_in: u32,
}

impl ParkingLot {
    /// Validate `config` and draw the first layout from `rng`.
    pub fn new(config: &LotConfig, rng: &mut LotRng) -> SimResult<Self> {
        config.validate()?;
        let grid = Grid::randomize(config.size, config.occupied_one_in, rng);
        let lot = Self::with_outcomes(grid, config.occupied_one_in);
        log::info!(
            "new {0}x{0} lot: {1} free, {2} occupied",
            lot.size(),
            lot.grid.free_count(),
            lot.grid.occupied_count()
        );
        Ok(lot)
    }

    /// Wrap a fixed layout.  Later calls to [`randomize`](Self::randomize)
    /// use the default 1-in-4 occupancy.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_outcomes(grid, LotConfig::default().occupied_one_in)
    }

    fn with_outcomes(grid: Grid, occupied_one_in: u32) -> Self {
        let graph = build_graph(&grid);
        Self { grid, graph, occupied_one_in }
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> u32 {
        self.grid.size()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Redraw every spot and rebuild the graph.
    pub fn randomize(&mut self, rng: &mut LotRng) {
        self.grid = Grid::randomize(self.size(), self.occupied_one_in, rng);
        self.graph = build_graph(&self.grid);
        log::info!(
            "lot regenerated: {} free, {} occupied, {} edges",
            self.grid.free_count(),
            self.grid.occupied_count(),
            self.graph.edge_count()
        );
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Shortest path with `strategy`; `None` if either endpoint is not a
    /// free in-bounds cell or the goal is unreachable.
    pub fn find_path(&self, strategy: Strategy, start: Cell, goal: Cell) -> Option<Path> {
        find_path(&self.graph, strategy, start, goal)
    }

    /// Like [`find_path`](Self::find_path), with the failure classified.
    pub fn route(&self, strategy: Strategy, start: Cell, goal: Cell) -> SpatialResult<Path> {
        route(&self.graph, strategy, start, goal)
    }
}
