//! # berni-scalar
//!
//! Numeric element types for Bernstein and monomial-basis polynomials.
//!
//! This crate provides:
//! - The `Scalar` trait, implemented for `f32`, `f64` and exact `Rational`
//! - Checked element conversion: `ConvertFrom` and `ConversionError`
//! - The widening table `Promote` used when two element types meet
//!
//! ## Widening
//!
//! ```text
//!            f32       f64       Rational
//! f32        f32       f64       f32
//! f64        f64       f64       f64
//! Rational   f32       f64       Rational
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod promote;
pub mod traits;

pub use berni_numbers::Rational;
pub use convert::{ConversionError, ConvertFrom};
pub use promote::{Promote, Promoted};
pub use traits::Scalar;
