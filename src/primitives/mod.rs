//! Core compute primitives (Matrix).
//!
//! The dense row-major [`Matrix`] value type and its free-function helpers.

mod matrix;

pub use matrix::{is_matrix, Matrix, EPSILON};
