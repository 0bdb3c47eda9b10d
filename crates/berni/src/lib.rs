//! # Berni
//!
//! Bernstein basis polynomials over arbitrary intervals, usable as
//! first-class numeric values alongside ordinary monomial-basis polynomials.
//!
//! ## Features
//!
//! - **Exact or floating**: every operation is generic over `f32`, `f64` and
//!   exact `Rational` elements
//! - **Expansion**: `B_{n,i}` on `[α, β]` to monomial form in closed form
//! - **Promotion**: mixed element types and mixed representations widen to a
//!   common type before combining
//! - **Inner products**: closed-form `dot`, induced `norm` and Gram matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use berni::prelude::*;
//!
//! let b = BernsteinPoly::<f64>::unit(3, 2)?;
//! let p = b.to_polynomial()?;
//! assert_eq!(p.to_string(), "3*x^2 - 3*x^3");
//!
//! let exact = BernsteinPoly::<Rational>::unit(3, 2)?;
//! assert_eq!(exact.dot(&exact)?, Rational::new(3, 35));
//! # Ok::<(), BasisError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use berni_basis as basis;
pub use berni_numbers as numbers;
pub use berni_poly as poly;
pub use berni_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use berni_basis::{dot, gram_matrix, norm, BasisError, BernsteinPoly, Interval};
    pub use berni_numbers::Rational;
    pub use berni_poly::Polynomial;
    pub use berni_scalar::{ConversionError, ConvertFrom, Promote, Promoted, Scalar};
}
