//! The occupancy grid and its randomizer.
//!
//! Spots are stored row-major in a flat `Vec<Spot>` indexed by
//! [`Cell::index`].  A grid is only ever produced whole, by
//! [`Grid::randomize`] or one of the explicit constructors; there is no
//! per-cell setter, so a derived [`Graph`](crate::Graph) can never silently
//! go stale against a half-edited grid.

use std::fmt;

use pf_core::{Cell, LotRng};

use crate::{SpatialError, SpatialResult};

/// State of a single parking spot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spot {
    #[default]
    Free,
    Occupied,
}

impl Spot {
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Spot::Free)
    }

    /// Layout character: `.` free, `#` occupied.
    pub fn as_char(self) -> char {
        match self {
            Spot::Free     => '.',
            Spot::Occupied => '#',
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A `size × size` matrix of [`Spot`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size:  u32,
    spots: Vec<Spot>,
}

impl Grid {
    /// A grid with every spot free.
    pub fn all_free(size: u32) -> Self {
        Self {
            size,
            spots: vec![Spot::Free; size as usize * size as usize],
        }
    }

    /// Draw a fresh grid.  Each spot, in row-major order, is occupied when a
    /// uniform draw from `occupied_one_in` outcomes lands on the last one;
    /// `occupied_one_in = 4` gives the lot's usual 25 % occupancy.
    ///
    /// No connectivity is enforced: the result may be split into several
    /// components or be fully occupied.
    pub fn randomize(size: u32, occupied_one_in: u32, rng: &mut LotRng) -> Self {
        let outcomes = occupied_one_in.max(1);
        let spots = (0..size as usize * size as usize)
            .map(|_| {
                if rng.gen_range(0..outcomes) == outcomes - 1 {
                    Spot::Occupied
                } else {
                    Spot::Free
                }
            })
            .collect();
        Self { size, spots }
    }

    /// Build a grid from explicit spots in row-major order.
    pub fn from_spots(size: u32, spots: Vec<Spot>) -> SpatialResult<Self> {
        let expected = size as usize * size as usize;
        if spots.len() != expected {
            return Err(SpatialError::Layout(format!(
                "expected {expected} spots for a {size}x{size} grid, got {}",
                spots.len()
            )));
        }
        Ok(Self { size, spots })
    }

    /// Parse a square text layout, one string per row: `.` is free and `#`
    /// is occupied.
    ///
    /// ```
    /// use pf_core::Cell;
    /// use pf_spatial::Grid;
    ///
    /// let grid = Grid::from_rows(&["..#", "...", "#.."]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert!(grid.is_occupied(Cell::new(0, 2)));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> SpatialResult<Self> {
        let size = rows.len();
        let mut spots = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != size {
                return Err(SpatialError::Layout(format!(
                    "row {r} has {} spots, expected {size}",
                    row.chars().count()
                )));
            }
            for ch in row.chars() {
                spots.push(match ch {
                    '.' => Spot::Free,
                    '#' => Spot::Occupied,
                    other => {
                        return Err(SpatialError::Layout(format!(
                            "unexpected {other:?} in row {r}"
                        )))
                    }
                });
            }
        }
        let size = u32::try_from(size)
            .map_err(|_| SpatialError::Layout(format!("{size} rows is too many")))?;
        Ok(Self { size, spots })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size)
    }

    /// State of `cell`, or `None` if it lies outside the grid.
    #[inline]
    pub fn spot(&self, cell: Cell) -> Option<Spot> {
        self.contains(cell).then(|| self.spots[cell.index(self.size)])
    }

    /// `true` only for in-bounds free spots.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.spot(cell) == Some(Spot::Free)
    }

    /// `true` only for in-bounds occupied spots.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.spot(cell) == Some(Spot::Occupied)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.spots.len()).map(move |i| Cell::from_index(i, self.size))
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |&c| self.is_free(c))
    }

    pub fn free_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_free()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.spots.len() - self.free_count()
    }
}

/// Renders the layout accepted by [`Grid::from_rows`], one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.spots.chunks(self.size.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for spot in row {
                write!(f, "{}", spot.as_char())?;
            }
        }
        Ok(())
    }
}
