//! `Matrix` — a two-dimensional matrix of reals.
//!
//! This is a thin newtype around `nalgebra::DMatrix<f64>`. Basis
//! evaluations come back as `n × K` matrices and penalties as `K × K`
//! symmetric matrices, both in this type.

use crate::array::Array;
use crate::comparison::close;
use nalgebra::DMatrix;
use fb_core::{Real, Size};
use std::ops::{Index, IndexMut};

/// A dynamically-sized 2D matrix of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: Size, cols: Size) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create a matrix whose `(i, j)` element is `f(i, j)`.
    pub fn from_fn<F: FnMut(Size, Size) -> Real>(rows: Size, cols: Size, f: F) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    /// Number of rows.
    pub fn rows(&self) -> Size {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> Size {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Return `true` if the matrix is square and `|m[i,j] - m[j,i]| <= tol`.
    pub fn is_symmetric(&self, tol: Real) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows();
        (0..n).all(|i| (i + 1..n).all(|j| close(self.0[(i, j)], self.0[(j, i)], tol)))
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Consume and return the inner `DMatrix`.
    pub fn into_inner(self) -> DMatrix<Real> {
        self.0
    }

    /// Extract a row as an `Array`.
    pub fn row(&self, i: Size) -> Array {
        let data: Vec<Real> = self.0.row(i).iter().copied().collect();
        Array::from_vec(data)
    }

    /// Extract a column as an `Array`.
    pub fn column(&self, j: Size) -> Array {
        Array::from_slice(self.column_slice(j))
    }

    /// Borrow column `j` as a contiguous slice (storage is column-major).
    pub fn column_slice(&self, j: Size) -> &[Real] {
        let n = self.0.nrows();
        &self.0.as_slice()[j * n..(j + 1) * n]
    }

    /// Largest absolute element-wise difference with `other`.
    ///
    /// Returns `Real::INFINITY` when the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Real {
        if self.0.shape() != other.0.shape() {
            return Real::INFINITY;
        }
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0.0, |acc, (a, b)| acc.max((a - b).abs()))
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
