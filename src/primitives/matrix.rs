//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Numerical tolerance for zero / pivot detection in determinant, inverse,
/// and rank. Exact-zero comparison is deliberately avoided.
pub const EPSILON: f64 = 1e-9;

/// A 2D matrix of values (row-major storage).
///
/// Every transforming operation (`transpose`, `map`, `add`, `matmul`,
/// `inverse`, ...) returns a new matrix; operands are never mutated.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if data length doesn't match
    /// rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{} elements ({rows}x{cols})", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a nested row-major literal.
    ///
    /// Shape is inferred from the input: `rows.len()` rows, first row's
    /// length columns.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if the input has no rows or
    /// if any row's length differs from the first (ragged input is rejected,
    /// never truncated).
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrizError::ShapeMismatch {
                expected: "at least one row".to_string(),
                actual: "0 rows".to_string(),
            });
        };
        let cols = first.len();
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrizError::ShapeMismatch {
                    expected: format!("{cols} elements per row"),
                    actual: format!("{} elements in row {i}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Creates a rows x cols matrix with every element equal to `value`.
    #[must_use]
    pub fn from_fill(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a rows x cols matrix with element (i, j) = `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<T> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying data as a flat row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Transposes the matrix: result (j, i) = self (i, j).
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Applies a pure scalar function to each element, preserving shape.
    #[must_use]
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Copy + PartialEq> Matrix<T> {
    /// Elementwise equality: result (i, j) = (self (i, j) == other (i, j)).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if shapes differ.
    pub fn equal(&self, other: &Self) -> Result<Matrix<bool>> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a == b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fill(rows, cols, 0.0)
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_fill(rows, cols, 1.0)
    }

    /// Creates an n x n identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates an n x n matrix with each element drawn independently and
    /// uniformly from [0, 1).
    ///
    /// `seed` makes the draw reproducible; `None` uses the thread RNG.
    #[must_use]
    pub fn random(n: usize, seed: Option<u64>) -> Self {
        let data = if let Some(s) = seed {
            let mut rng = StdRng::seed_from_u64(s);
            (0..n * n).map(|_| rng.gen::<f64>()).collect()
        } else {
            let mut rng = rand::thread_rng();
            (0..n * n).map(|_| rng.gen::<f64>()).collect()
        };
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates an n x n matrix with `diag` on the diagonal and zeros
    /// elsewhere.
    #[must_use]
    pub fn from_diagonal(diag: &[f64]) -> Self {
        let n = diag.len();
        let mut data = vec![0.0; n * n];
        for (i, &v) in diag.iter().enumerate() {
            data[i * n + i] = v;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// True iff every off-diagonal element (i != j) is exactly 0.
    ///
    /// Non-square input is permitted: the check covers all (i, j) with
    /// i != j, which is well-defined for any rectangular shape.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if i != j && self.data[i * self.cols + j] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|x| x * scalar)
    }

    /// Matrix-matrix multiplication: result (i, j) = sum_k self (i, k) *
    /// other (k, j). Result shape is self.rows x other.cols.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::ShapeMismatch`] unless self.cols == other.rows.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{}xN right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Right-division by matrix inverse: self * other^-1.
    ///
    /// # Errors
    ///
    /// Inherits all failure modes of [`Matrix::inverse`], plus
    /// [`MatrizError::ShapeMismatch`] from the multiplication.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.matmul(&other.inverse()?)
    }

    /// Computes the determinant via Gaussian elimination with partial
    /// pivoting and sign tracking.
    ///
    /// Returns 0.0 when a pivot falls below [`EPSILON`] (singular input).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let mut lu = self.data.clone();
        let mut det = 1.0;

        for col in 0..n {
            // largest |value| at or below the diagonal
            let mut pivot = col;
            for r in (col + 1)..n {
                if lu[r * n + col].abs() > lu[pivot * n + col].abs() {
                    pivot = r;
                }
            }
            if lu[pivot * n + col].abs() < EPSILON {
                return Ok(0.0);
            }
            if pivot != col {
                for c in 0..n {
                    lu.swap(col * n + c, pivot * n + c);
                }
                det = -det;
            }
            let p = lu[col * n + col];
            det *= p;
            for r in (col + 1)..n {
                let factor = lu[r * n + col] / p;
                for c in col..n {
                    lu[r * n + c] -= factor * lu[col * n + c];
                }
            }
        }

        Ok(det)
    }

    /// Computes the matrix inverse via Gauss-Jordan elimination on an
    /// augmented [A | I] buffer with partial pivoting.
    ///
    /// Singularity is detected per pivot column: the elimination fails only
    /// when no candidate pivot reaches [`EPSILON`] in magnitude. The raw
    /// determinant is never compared against the tolerance, so uniformly
    /// scaled matrices (tiny determinant, healthy pivots) invert fine.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input and
    /// [`MatrizError::Singular`] when a pivot column has no usable entry.
    pub fn inverse(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let w = 2 * n;
        let mut aug = vec![0.0; n * w];
        for i in 0..n {
            for j in 0..n {
                aug[i * w + j] = self.get(i, j);
            }
            aug[i * w + n + i] = 1.0;
        }

        for col in 0..n {
            let mut pivot = col;
            for r in (col + 1)..n {
                if aug[r * w + col].abs() > aug[pivot * w + col].abs() {
                    pivot = r;
                }
            }
            if aug[pivot * w + col].abs() < EPSILON {
                // determinant computed only on the failure path, as context
                return Err(MatrizError::Singular {
                    det: self.determinant()?,
                });
            }
            if pivot != col {
                for c in 0..w {
                    aug.swap(col * w + c, pivot * w + c);
                }
            }
            let p = aug[col * w + col];
            for c in 0..w {
                aug[col * w + c] /= p;
            }
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = aug[r * w + col];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..w {
                    aug[r * w + c] -= factor * aug[col * w + c];
                }
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            data.extend_from_slice(&aug[i * w + n..i * w + w]);
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Computes the rank as the number of non-zero pivot rows after
    /// Gaussian elimination to row-echelon form, with [`EPSILON`]-based
    /// zero detection.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for non-square input.
    pub fn rank(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let mut m = self.data.clone();
        let mut rank = 0;
        let mut row = 0;

        for col in 0..n {
            if row == n {
                break;
            }
            let mut pivot = row;
            for r in (row + 1)..n {
                if m[r * n + col].abs() > m[pivot * n + col].abs() {
                    pivot = r;
                }
            }
            if m[pivot * n + col].abs() < EPSILON {
                continue;
            }
            if pivot != row {
                for c in 0..n {
                    m.swap(row * n + c, pivot * n + c);
                }
            }
            let p = m[row * n + col];
            for r in (row + 1)..n {
                let factor = m[r * n + col] / p;
                for c in col..n {
                    m[r * n + c] -= factor * m[row * n + c];
                }
            }
            rank += 1;
            row += 1;
        }

        Ok(rank)
    }
}

/// Capability check: true only for [`Matrix`] values, false for anything
/// structurally similar (a plain `Vec<Vec<f64>>` is not a matrix).
///
/// Covers exactly the element types this crate's operations produce:
/// `f64` (numeric construction and arithmetic) and `bool` (the result of
/// [`Matrix::equal`]). A downcast cannot range over every possible
/// `Matrix<T>` instantiation.
///
/// # Examples
///
/// ```
/// use matriz::primitives::{is_matrix, Matrix};
///
/// assert!(is_matrix(&Matrix::eye(2)));
/// assert!(!is_matrix(&vec![vec![1.0, 0.0], vec![0.0, 1.0]]));
/// ```
#[must_use]
pub fn is_matrix(value: &dyn Any) -> bool {
    value.is::<Matrix<f64>>() || value.is::<Matrix<bool>>()
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract_tests;
