//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `PfError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `pf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `pf-core`.
pub type PfResult<T> = Result<T, PfError>;
