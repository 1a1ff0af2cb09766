//! `pf-spatial`: occupancy grid, adjacency graph, and pathfinding.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`grid`]   | `Grid`, `Spot`, seeded randomizer                            |
//! | [`graph`]  | `Graph` (CSR adjacency over free cells), `build_graph`       |
//! | [`router`] | `Path`, `PathFinder`, `bfs`, `astar`, `find_path`, `route`   |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod grid;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use graph::{build_graph, Graph};
pub use grid::{Grid, Spot};
pub use router::{astar, bfs, find_path, route, AStar, Bfs, Path, PathFinder};
