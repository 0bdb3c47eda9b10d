//! # berni-numbers
//!
//! Exact arbitrary precision rationals for the Berni Bernstein basis crates.
//!
//! This crate wraps `dashu` to provide `Rational`, the exact element type
//! used wherever basis identities must hold with equality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
