// File: crates/chart-data/src/error.rs
// Summary: Error type for series construction and lookup failures.

use thiserror::Error;

/// Failures surfaced by the series data model. Every failure is immediate
/// and synchronous; nothing is retried or substituted with a default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("series has no data points")]
    EmptySeries,

    #[error("duplicate key {0} in key list")]
    DuplicateKey(String),

    #[error("key {0:?} is not numeric")]
    NonNumericKey(String),

    #[error("series has {got} values but the key list has {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("key {0} not present in key list")]
    KeyNotFound(f64),

    #[error("invalid color string {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
