use thiserror::Error;

use crate::Axis;

/// Errors produced while reading a coordinate from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The value was not supplied at all.
    #[error("missing required parameter '{axis}'")]
    Missing { axis: Axis },

    /// The value could not be parsed as a floating-point number.
    #[error("invalid {axis} '{input}': {reason}")]
    NotANumber {
        axis: Axis,
        input: String,
        reason: String,
    },

    /// The value parsed but is NaN or infinite.
    #[error("invalid {axis} '{input}': must be a finite number")]
    NotFinite { axis: Axis, input: String },
}
