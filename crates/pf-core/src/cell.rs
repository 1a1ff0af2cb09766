//! Grid coordinates and the four orthogonal directions.
//!
//! A `Cell` is a plain `(row, col)` pair.  It is `Copy + Ord + Hash` so it
//! can be used as a map key and sorted without ceremony.  Cells carry no
//! grid size: bounds are checked against the owning grid, which hands out
//! neighbours through [`Cell::neighbor`].

use std::fmt;
use std::str::FromStr;

use crate::PfError;

/// A grid coordinate.  Row 0 is the top row, column 0 the leftmost column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// `true` if the cell lies inside a `size × size` grid.
    #[inline]
    pub fn in_bounds(self, size: u32) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index into a `size × size` array.
    ///
    /// Callers must check [`in_bounds`](Self::in_bounds) first; the result
    /// is meaningless for out-of-range cells.
    #[inline(always)]
    pub fn index(self, size: u32) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(index: usize, size: u32) -> Self {
        let size = size as usize;
        Self::new((index / size) as u32, (index % size) as u32)
    }

    /// The neighbouring cell one step in `dir`, or `None` if that step would
    /// leave a `size × size` grid.
    #[inline]
    pub fn neighbor(self, dir: Direction, size: u32) -> Option<Cell> {
        let (row, col) = match dir {
            Direction::Up    => (self.row.checked_sub(1)?, self.col),
            Direction::Down  => (self.row.checked_add(1)?, self.col),
            Direction::Left  => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
        };
        let cell = Cell::new(row, col);
        cell.in_bounds(size).then_some(cell)
    }

    /// Manhattan (`|dr| + |dc|`) distance.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Cell::new(row, col)
    }
}

/// Parses `"row,col"`; surrounding whitespace and parentheses are ignored,
/// so the `Display` form round-trips.
impl FromStr for Cell {
    type Err = PfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| PfError::Parse(format!("expected \"row,col\", got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| PfError::Parse(format!("bad coordinate {part:?} in {s:?}: {e}")))
        };
        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour expansion order.  Graph adjacency lists follow this order,
    /// and BFS tie-breaking depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
