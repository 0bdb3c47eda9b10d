//! # berni-poly
//!
//! Dense univariate polynomials in the monomial (power) basis.
//!
//! This is the general polynomial representation Bernstein basis elements
//! expand into. It provides:
//! - Construction from coefficients and linear factors `x - r`
//! - Ring arithmetic, scaling and integer powers
//! - Horner evaluation, derivative, antiderivative and definite integrals
//! - Element type conversion and text rendering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculus;
pub mod dense;
pub mod format;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
