//! Pathfinding over the adjacency graph: BFS and A*.
//!
//! # Pluggability
//!
//! `pf-sim` routes through [`find_path`] with a [`Strategy`], but both
//! searches are also exposed as the zero-sized [`Bfs`] and [`AStar`]
//! finders implementing [`PathFinder`], so applications can swap in their
//! own search without touching the model.
//!
//! # Failure
//!
//! Every search answers `None` when there is no path, whether because an
//! endpoint is occupied, out of bounds, or in another component.  Use
//! [`route`] to get the cause as a [`SpatialError`].
//!
//! # Cost
//!
//! All edges cost 1, so the minimum-cost path is the minimum-hop path and
//! both strategies return paths of equal length.  They may differ in which
//! of several equally short paths they pick.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use pf_core::{Cell, Strategy};

use crate::{Graph, SpatialError, SpatialResult};

/// Sentinel for "no parent" in the dense parent arrays.
const NO_PARENT: usize = usize::MAX;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered walk through the graph from `start` to `goal`, inclusive.
///
/// Never empty: a path from a cell to itself is the single cell.  Only the
/// searches in this module and [`Path::new`] build one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap an explicit cell sequence.  `None` if `cells` is empty.
    ///
    /// Adjacency is not checked here; see [`is_valid_in`](Self::is_valid_in).
    pub fn new(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() { None } else { Some(Self { cells }) }
    }

    /// The cells from start to goal, inclusive.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves (edges), one less than the number of cells.
    pub fn edge_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// `true` if the start and goal are the same cell.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    /// Consecutive `(from, to)` moves in travel order.
    pub fn moves(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` if every cell is a key of `graph` and every move follows one of
    /// its edges.
    pub fn is_valid_in(&self, graph: &Graph) -> bool {
        self.cells.iter().all(|&c| graph.contains(c))
            && self.moves().all(|(a, b)| graph.has_edge(a, b))
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable search over a [`Graph`].
///
/// Implementations must be `Send + Sync` so one finder can serve several
/// lots.  They must return `None` rather than panic for endpoints that are
/// occupied or out of bounds.
pub trait PathFinder: Send + Sync {
    fn find(&self, graph: &Graph, start: Cell, goal: Cell) -> Option<Path>;
}

/// Breadth-first search.  See [`bfs`].
pub struct Bfs;

impl PathFinder for Bfs {
    fn find(&self, graph: &Graph, start: Cell, goal: Cell) -> Option<Path> {
        bfs(graph, start, goal)
    }
}

/// A* with the Manhattan heuristic.  See [`astar`].
pub struct AStar;

impl PathFinder for AStar {
    fn find(&self, graph: &Graph, start: Cell, goal: Cell) -> Option<Path> {
        astar(graph, start, goal)
    }
}

impl PathFinder for Strategy {
    fn find(&self, graph: &Graph, start: Cell, goal: Cell) -> Option<Path> {
        find_path(graph, *self, start, goal)
    }
}

/// Run the search selected by `strategy`.
pub fn find_path(graph: &Graph, strategy: Strategy, start: Cell, goal: Cell) -> Option<Path> {
    match strategy {
        Strategy::Bfs   => bfs(graph, start, goal),
        Strategy::AStar => astar(graph, start, goal),
    }
}

/// Like [`find_path`], but reports why no path was found.
///
/// Endpoints are checked in order (start, then goal): out-of-bounds before
/// occupied.  A search that exhausts the start's component gives
/// [`SpatialError::NoRoute`].
pub fn route(graph: &Graph, strategy: Strategy, start: Cell, goal: Cell) -> SpatialResult<Path> {
    for cell in [start, goal] {
        if !cell.in_bounds(graph.size()) {
            return Err(SpatialError::OutOfBounds { cell, size: graph.size() });
        }
        if !graph.contains(cell) {
            return Err(SpatialError::Occupied(cell));
        }
    }
    find_path(graph, strategy, start, goal)
        .ok_or(SpatialError::NoRoute { from: start, to: goal })
}

// ── BFS ───────────────────────────────────────────────────────────────────────

/// Shortest path by hop count, expanding neighbours in graph order
/// (up, down, left, right) from a FIFO frontier.
///
/// Among several shortest paths the first one discovered under that order
/// wins.  Returns `None` if either endpoint is not a key of `graph` or the
/// goal is unreachable.
pub fn bfs(graph: &Graph, start: Cell, goal: Cell) -> Option<Path> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let size = graph.size();
    let n = size as usize * size as usize;
    // parent[v] = index of the cell v was discovered from.
    let mut parent  = vec![NO_PARENT; n];
    let mut visited = vec![false; n];
    let mut queue   = VecDeque::new();

    visited[start.index(size)] = true;
    queue.push_back(start);
    let mut expanded = 0usize;

    while let Some(node) = queue.pop_front() {
        if node == goal {
            log::debug!("bfs {start} -> {goal}: expanded {expanded} cells");
            return Some(reconstruct(&parent, size, start, goal));
        }
        expanded += 1;

        for &next in graph.neighbors(node).unwrap_or_default() {
            let i = next.index(size);
            if !visited[i] {
                visited[i] = true;
                parent[i] = node.index(size);
                queue.push_back(next);
            }
        }
    }

    log::debug!("bfs {start} -> {goal}: unreachable after {expanded} cells");
    None
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// Minimum-cost path with unit edge costs and the Manhattan heuristic.
///
/// The frontier is a min-heap keyed on `(f, seq)` where `f = g + h` and
/// `seq` is the push order, so equal-`f` entries pop first-in-first-out and
/// the result is reproducible.  Stale entries are skipped once their cell is
/// settled (lazy deletion).  Returns `None` under the same conditions as
/// [`bfs`].
pub fn astar(graph: &Graph, start: Cell, goal: Cell) -> Option<Path> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let size = graph.size();
    let n = size as usize * size as usize;
    // g_cost[v] = best known hop count from start to v.
    let mut g_cost  = vec![u32::MAX; n];
    let mut parent  = vec![NO_PARENT; n];
    let mut settled = vec![false; n];

    g_cost[start.index(size)] = 0;

    // Reverse turns BinaryHeap (max) into a min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, u64, Cell)>> = BinaryHeap::new();
    let mut seq = 0u64;
    heap.push(Reverse((start.manhattan(goal), seq, start)));
    let mut expanded = 0usize;

    while let Some(Reverse((_f, _, node))) = heap.pop() {
        if node == goal {
            log::debug!("astar {start} -> {goal}: expanded {expanded} cells");
            return Some(reconstruct(&parent, size, start, goal));
        }
        let i = node.index(size);
        if settled[i] {
            continue;
        }
        settled[i] = true;
        expanded += 1;

        let tentative = g_cost[i] + 1;
        for &next in graph.neighbors(node).unwrap_or_default() {
            let j = next.index(size);
            if settled[j] || tentative >= g_cost[j] {
                continue;
            }
            g_cost[j] = tentative;
            parent[j] = i;
            seq += 1;
            heap.push(Reverse((tentative + next.manhattan(goal), seq, next)));
        }
    }

    log::debug!("astar {start} -> {goal}: unreachable after {expanded} cells");
    None
}

// ── Reconstruction ────────────────────────────────────────────────────────────

/// Walk parent links back from `goal` to `start`.
fn reconstruct(parent: &[usize], size: u32, start: Cell, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        let p = parent[cur.index(size)];
        debug_assert_ne!(p, NO_PARENT, "broken parent chain at {cur}");
        cur = Cell::from_index(p, size);
        cells.push(cur);
    }
    cells.reverse();
    Path { cells }
}
