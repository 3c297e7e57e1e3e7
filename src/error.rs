//! Error types for polytrim operations.

use thiserror::Error;

/// Errors that can occur while validating simplification requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrimError {
    /// A tolerance was negative.
    #[error("negative tolerance: {name} = {value}")]
    NegativeTolerance {
        /// Name of the offending tolerance.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A coordinate was outside the supported range.
    #[error("coordinate outside supported range: ({x}, {y})")]
    CoordinateOutOfRange {
        /// X coordinate of the rejected point.
        x: i64,
        /// Y coordinate of the rejected point.
        y: i64,
    },
}
