//! The 4-connected adjacency graph over free cells.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** form over the row-major
//! cell index.  Given a free cell with index `i`, its neighbours occupy:
//!
//! ```text
//! neighbors[ node_out_start[i] .. node_out_start[i+1] ]
//! ```
//!
//! Occupied cells have an empty range and are not keys of the graph; the
//! `present` mask tells an isolated free cell (a key with no neighbours)
//! apart from an occupied one.  Each neighbour list is in up, down, left,
//! right order.
//!
//! The graph is a pure function of a [`Grid`] and is never patched.  Owners
//! rebuild it with [`build_graph`] after every grid change.

use pf_core::{Cell, Direction};

use crate::Grid;

/// Read-only adjacency view of a grid's free cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    size: u32,

    /// `present[i]` is `true` iff cell `i` is free, i.e. a key of the graph.
    present: Vec<bool>,

    /// CSR row pointer.  Length = `size * size + 1`.
    node_out_start: Vec<usize>,

    /// Concatenated neighbour lists, grouped by source cell.
    neighbors: Vec<Cell>,
}

/// Derive the adjacency graph of `grid`.
///
/// Every free cell becomes a key, including cells whose four neighbours are
/// all occupied or off-grid.  A neighbour is listed only if it is in bounds
/// and free, so adjacency is symmetric by construction.
pub fn build_graph(grid: &Grid) -> Graph {
    let size = grid.size();
    let cell_count = size as usize * size as usize;

    let mut present = vec![false; cell_count];
    let mut node_out_start = Vec::with_capacity(cell_count + 1);
    let mut neighbors = Vec::with_capacity(cell_count * 4);

    node_out_start.push(0);
    for cell in grid.cells() {
        if grid.is_free(cell) {
            present[cell.index(size)] = true;
            neighbors.extend(
                Direction::ALL
                    .iter()
                    .filter_map(|&dir| cell.neighbor(dir, size))
                    .filter(|&n| grid.is_free(n)),
            );
        }
        node_out_start.push(neighbors.len());
    }
    debug_assert_eq!(node_out_start.len(), cell_count + 1);

    log::trace!(
        "built graph: {} free cells, {} directed edges",
        present.iter().filter(|&&p| p).count(),
        neighbors.len()
    );

    Graph { size, present, node_out_start, neighbors }
}

impl Graph {
    /// A graph with no keys, for a zero-sized lot.
    pub fn empty() -> Self {
        build_graph(&Grid::all_free(0))
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Side length of the grid this graph was built from.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of keys (free cells).
    pub fn node_count(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|&p| p)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// `true` if `cell` is a key, i.e. an in-bounds free cell.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size) && self.present[cell.index(self.size)]
    }

    /// Ordered free neighbours of `cell` (up, down, left, right), or `None`
    /// if `cell` is occupied or out of bounds.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> Option<&[Cell]> {
        if !self.contains(cell) {
            return None;
        }
        let i = cell.index(self.size);
        let start = self.node_out_start[i];
        let end   = self.node_out_start[i + 1];
        Some(&self.neighbors[start..end])
    }

    /// Number of free neighbours; 0 for cells that are not keys.
    #[inline]
    pub fn degree(&self, cell: Cell) -> usize {
        self.neighbors(cell).map_or(0, <[Cell]>::len)
    }

    /// All keys in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(move |(i, _)| Cell::from_index(i, self.size))
    }

    /// Each undirected edge once, as `(a, b)` with `a < b`, grouped by `a`
    /// in row-major order.  This is what a graph preview draws.
    pub fn edges(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells().flat_map(move |a| {
            self.neighbors(a)
                .unwrap_or_default()
                .iter()
                .filter(move |&&b| a < b)
                .map(move |&b| (a, b))
        })
    }

    /// `true` if `b` is listed as a neighbour of `a`.
    #[inline]
    pub fn has_edge(&self, a: Cell, b: Cell) -> bool {
        self.neighbors(a).is_some_and(|ns| ns.contains(&b))
    }
}
