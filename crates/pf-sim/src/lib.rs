//! `pf-sim`: the parking lot model and an interactive navigation session.
//!
//! # Pieces
//!
//! ```text
//! ParkingLot   grid + graph, always rebuilt together; route queries
//! Navigator    car placement, destination, strategy toggle, stepwise drive
//! DriveObserver  callbacks fired by the navigator (route, step, arrival, reset)
//! ```
//!
//! The navigator never sleeps or spawns anything.  A presentation layer
//! animates a drive by calling [`Navigator::step`] on its own timer.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pf_core::{Cell, LotConfig};
//! use pf_sim::{LogObserver, Navigator};
//!
//! let mut nav = Navigator::new(&LotConfig::default())?;
//! let mut obs = LogObserver;
//! nav.select(Cell::new(0, 0), &mut obs)?;   // place the car
//! nav.select(Cell::new(5, 5), &mut obs)?;   // route to a destination
//! nav.drive(&mut obs);
//! ```

pub mod error;
pub mod lot;
pub mod navigator;
pub mod observer;


pub use error::{SimError, SimResult};
pub use lot::ParkingLot;
pub use navigator::{DriveStep, Navigator, Selection};
pub use observer::{DriveObserver, LogObserver, NoopObserver};
