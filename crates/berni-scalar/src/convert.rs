//! Checked conversion between element types.
//!
//! Conversions follow the target type's own casting rules: anything that
//! lands on a finite value of the target succeeds (possibly rounded), while
//! values the target cannot hold at all are rejected.

use berni_numbers::Rational;
use thiserror::Error;

/// A value could not be represented in the requested element type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot represent {value} as {target}")]
pub struct ConversionError {
    /// The offending value, rendered in its source type.
    pub value: String,
    /// Name of the target element type.
    pub target: &'static str,
}

impl ConversionError {
    /// Creates an error for `value` failing to convert into `target`.
    pub fn new(value: impl ToString, target: &'static str) -> Self {
        Self {
            value: value.to_string(),
            target,
        }
    }
}

/// Fallible conversion from another element type.
pub trait ConvertFrom<S>: Sized {
    /// Converts `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` when `Self` cannot represent `value`.
    fn convert_from(value: &S) -> Result<Self, ConversionError>;
}

impl<T: Clone> ConvertFrom<T> for T {
    fn convert_from(value: &T) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl ConvertFrom<f32> for f64 {
    fn convert_from(value: &f32) -> Result<Self, ConversionError> {
        Ok(f64::from(*value))
    }
}

impl ConvertFrom<f64> for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn convert_from(value: &f64) -> Result<Self, ConversionError> {
        let narrowed = *value as f32;
        if value.is_finite() && !narrowed.is_finite() {
            return Err(ConversionError::new(value, "f32"));
        }
        Ok(narrowed)
    }
}

impl ConvertFrom<Rational> for f64 {
    fn convert_from(value: &Rational) -> Result<Self, ConversionError> {
        let rounded = value.to_f64();
        if rounded.is_finite() {
            Ok(rounded)
        } else {
            Err(ConversionError::new(value, "f64"))
        }
    }
}

impl ConvertFrom<Rational> for f32 {
    fn convert_from(value: &Rational) -> Result<Self, ConversionError> {
        let rounded = value.to_f32();
        if rounded.is_finite() {
            Ok(rounded)
        } else {
            Err(ConversionError::new(value, "f32"))
        }
    }
}

impl ConvertFrom<f64> for Rational {
    fn convert_from(value: &f64) -> Result<Self, ConversionError> {
        Rational::from_f64(*value).ok_or_else(|| ConversionError::new(value, "Rational"))
    }
}

impl ConvertFrom<f32> for Rational {
    fn convert_from(value: &f32) -> Result<Self, ConversionError> {
        Rational::from_f64(f64::from(*value)).ok_or_else(|| ConversionError::new(value, "Rational"))
    }
}
