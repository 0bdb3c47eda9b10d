//! Errors raised by basis operations.

use berni_scalar::ConversionError;
use thiserror::Error;

/// Errors that can occur when expanding, comparing or measuring basis
/// elements.
///
/// Endpoints are carried as rendered text so the error does not depend on
/// the element type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BasisError {
    /// The lower bound is greater than the upper bound.
    #[error("invalid interval [{lower}, {upper}]: lower bound exceeds upper bound")]
    InvalidInterval { lower: String, upper: String },

    /// The interval has zero width where a division by it is needed.
    #[error("degenerate interval [{lower}, {upper}]: zero width")]
    DegenerateInterval { lower: String, upper: String },

    /// Two operands live on different intervals.
    #[error("interval mismatch: {left} vs {right}")]
    IntervalMismatch { left: String, right: String },

    /// `index > degree`.
    #[error("basis index {index} out of range for degree {degree}")]
    IndexOutOfRange { degree: u32, index: u32 },

    /// An endpoint or coefficient did not fit the target element type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
