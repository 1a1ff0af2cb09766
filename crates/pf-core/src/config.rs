//! Lot configuration.

use crate::{PfError, PfResult, Strategy};

/// Top-level configuration for a parking lot session.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the model and navigator.  Missing fields
/// fall back to [`LotConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LotConfig {
    /// Grid side length.  The lot has `size * size` spots.  Default: 6.
    pub size: u32,

    /// Master RNG seed.  The same seed always produces the same layout.
    pub seed: u64,

    /// A spot is occupied when a uniform draw from `occupied_one_in`
    /// outcomes hits the single "occupied" outcome.  Default: 4 (25 %).
    pub occupied_one_in: u32,

    /// Delay between drive steps, in milliseconds.  Only the presentation
    /// layer sleeps on this; the model never waits.
    pub step_delay_ms: u64,

    /// Strategy selected when a session starts.
    pub strategy: Strategy,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            size:            6,
            seed:            42,
            occupied_one_in: 4,
            step_delay_ms:   300,
            strategy:        Strategy::Bfs,
        }
    }
}

impl LotConfig {
    /// Largest accepted side length.
    pub const MAX_SIZE: u32 = 4096;

    /// Reject configurations the model cannot be built from.
    pub fn validate(&self) -> PfResult<()> {
        if self.size == 0 {
            return Err(PfError::Config("size must be at least 1".into()));
        }
        if self.size > Self::MAX_SIZE {
            return Err(PfError::Config(format!(
                "size {} exceeds the maximum of {}",
                self.size,
                Self::MAX_SIZE
            )));
        }
        if self.occupied_one_in == 0 {
            return Err(PfError::Config("occupied_one_in must be at least 1".into()));
        }
        Ok(())
    }
}
