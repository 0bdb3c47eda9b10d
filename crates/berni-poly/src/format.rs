//! Text rendering.
//!
//! Terms are written lowest power first, e.g. `3*x^2 - 3*x^3`. Unit
//! coefficients are elided on non-constant terms and zero terms are skipped.

use std::fmt;

use berni_scalar::Scalar;

use crate::dense::Polynomial;

impl<T: Scalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs().iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let negative = c.is_negative();
            let magnitude = if negative { -c.clone() } else { c.clone() };

            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            match i {
                0 => write!(f, "{magnitude}")?,
                _ if magnitude.is_one() => write!(f, "x")?,
                _ => write!(f, "{magnitude}*x")?,
            }
            if i > 1 {
                write!(f, "^{i}")?;
            }
        }

        Ok(())
    }
}
