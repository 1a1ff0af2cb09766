//! `pf-core`: foundational types for the parking finder.
//!
//! This crate is a dependency of every other `pf-*` crate.  It intentionally
//! has no `pf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`cell`]      | `Cell`, `Direction`                                   |
//! | [`strategy`]  | `Strategy` enum (BFS / A*)                            |
//! | [`config`]    | `LotConfig`                                           |
//! | [`rng`]       | `LotRng` (seeded, explicit randomness source)         |
//! | [`error`]     | `PfError`, `PfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;
pub mod strategy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::LotConfig;
pub use error::{PfError, PfResult};
pub use rng::LotRng;
pub use strategy::Strategy;
