//! Spatial-subsystem error type.

use thiserror::Error;

use pf_core::Cell;

/// Errors produced by `pf-spatial`.
///
/// The plain search functions never return these; they answer `None` for
/// every failure.  [`route`](crate::route) classifies the same failures for
/// callers that need to tell an occupied endpoint from a disconnected one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: Cell, to: Cell },

    #[error("cell {cell} is outside the {size}x{size} lot")]
    OutOfBounds { cell: Cell, size: u32 },

    #[error("cell {0} is occupied")]
    Occupied(Cell),

    #[error("invalid grid layout: {0}")]
    Layout(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
