use pf_core::{Cell, PfError};
use pf_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("lot configuration error: {0}")]
    Config(#[from] PfError),

    #[error("routing error: {0}")]
    Route(#[from] SpatialError),

    #[error("a drive is in progress; wait until the car arrives")]
    Busy,

    #[error("place the car before choosing a destination")]
    NoCar,

    #[error("destination {0} is the car's current cell")]
    SameCell(Cell),
}

pub type SimResult<T> = Result<T, SimError>;
