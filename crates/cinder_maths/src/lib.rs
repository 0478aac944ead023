//! # Cinder Maths
//!
//! Geometry for the software renderer: epsilon-aware scalar comparison,
//! 4-component tuples doubling as points (`w = 1`) and vectors (`w = 0`),
//! and row-major matrices with the usual transform builders.
//!
//! Everything here is a pure value type. The heap never appears - matrix
//! temporaries are short-lived and live on the stack or in their own `Vec`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matrix;
pub mod scalar;
pub mod tuple;

pub use matrix::Matrix;
pub use scalar::{approx_eq, compare, EPSILON};
pub use tuple::Tuple;
