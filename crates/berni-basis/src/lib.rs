//! # berni-basis
//!
//! Bernstein basis polynomials as first-class numeric values.
//!
//! `B_{n,i}` on `[α, β]` is the `i`-th member of the degree-`n` Bernstein
//! basis. This crate provides:
//! - `BernsteinPoly`, an immutable `{degree, index, interval}` record
//! - Expansion into the monomial basis (`BernsteinPoly::to_polynomial`)
//! - Promotion against monomial polynomials and across element types
//! - Closed-form inner products, induced norms and Gram matrices
//! - Text rendering through the monomial expansion
//!
//! ## Example
//!
//! ```
//! use berni_basis::BernsteinPoly;
//!
//! let b = BernsteinPoly::<f64>::unit(3, 2)?;
//! let q = BernsteinPoly::<f64>::unit(4, 3)?;
//!
//! assert_eq!(b.render()?, "BernsteinPoly(3*x^2 - 3*x^3)");
//! assert!((b.dot(&q)? - 1.0 / 14.0).abs() < 1e-15);
//! # Ok::<(), berni_basis::BasisError>(())
//! ```
//!
//! ## Interval checks
//!
//! Construction only validates `index <= degree`. Operations that depend on
//! the interval check it when they run:
//!
//! ```text
//! α > β          → InvalidInterval     (every interval-dependent operation)
//! α = β, n > 0   → DegenerateInterval  (expansion, evaluation)
//! α = β          → DegenerateInterval  (norm)
//! intervals ≠    → IntervalMismatch    (dot)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bernstein;
pub mod display;
pub mod error;
pub mod expand;
pub mod inner;
pub mod interval;
pub mod promote;

#[cfg(test)]
mod proptests;

pub use bernstein::{binomial, BernsteinPoly};
pub use error::BasisError;
pub use inner::{dot, gram_matrix, norm};
pub use interval::{ensure_nondegenerate, ensure_ordered, ensure_same, Interval};
pub use promote::{promote_pair, promote_with_polynomial};
