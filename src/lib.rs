//! Matriz: a dense-matrix value type in pure Rust.
//!
//! Matriz provides a small row-major matrix with multi-mode construction,
//! elementwise and linear-algebra operations, and structural predicates.
//! Every operation is a pure function from immutable inputs to a new
//! matrix; operands are never mutated.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! // Right-division is multiplication by the inverse.
//! let quotient = a.div(&b).unwrap();
//! assert!((quotient.get(0, 0) - 3.0).abs() < 1e-10);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core [`Matrix`] type and free-function helpers
//! - [`error`]: structured error type and crate `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{is_matrix, Matrix, EPSILON};
