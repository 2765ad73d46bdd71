//! Dense complex matrices.
//!
//! A column vector is the `width == 1` case; whole-register operators are
//! square with side `2^n`. Values are immutable from the outside: every
//! operation returns a fresh matrix.

use std::fmt;

use faer::Mat;

use crate::complex::{fmt_c64, ComplexExt, C64};
use crate::error::{LinalgError, Result};

#[derive(Clone)]
pub struct Matrix {
    data: Mat<C64>,
}

impl Matrix {
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            data: Mat::<C64>::zeros(height, width),
        }
    }

    /// Builds a `height × width` matrix from `f(row, col)`.
    pub fn from_fn<F>(height: usize, width: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> C64,
    {
        let mut data = Mat::<C64>::zeros(height, width);
        for row in 0..height {
            for col in 0..width {
                data.write(row, col, f(row, col));
            }
        }
        Self { data }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| {
            if row == col {
                C64::new(1.0, 0.0)
            } else {
                C64::new(0.0, 0.0)
            }
        })
    }

    /// Column vector holding `values` top to bottom.
    pub fn col(values: &[C64]) -> Self {
        Self::from_fn(values.len(), 1, |row, _| values[row])
    }

    /// Square matrix from row-major `values`; the length must be a perfect square.
    pub fn square(values: &[C64]) -> Result<Self> {
        let n = (values.len() as f64).sqrt().round() as usize;
        if n * n != values.len() {
            return Err(LinalgError::NotSquare { len: values.len() });
        }
        Ok(Self::from_fn(n, n, |row, col| values[row * n + col]))
    }

    pub fn from_rows(rows: &[Vec<C64>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
        }
        Ok(Self::from_fn(rows.len(), width, |row, col| rows[row][col]))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C64 {
        self.data.read(row, col)
    }

    fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Standard matrix product `self · rhs`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.width() != rhs.height() {
            return Err(LinalgError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut out = Mat::<C64>::zeros(self.height(), rhs.width());
        for row in 0..self.height() {
            for k in 0..self.width() {
                let a = self.data.read(row, k);
                if a.re == 0.0 && a.im == 0.0 {
                    continue;
                }
                for col in 0..rhs.width() {
                    let cur = out.read(row, col);
                    out.write(row, col, cur + a * rhs.data.read(k, col));
                }
            }
        }
        Ok(Matrix { data: out })
    }

    /// Kronecker product `self ⊗ rhs`. The left factor varies slower: entry
    /// `(i, j)` is `self[i / rhs.h][j / rhs.w] * rhs[i % rhs.h][j % rhs.w]`.
    pub fn tensor(&self, rhs: &Matrix) -> Matrix {
        let (rh, rw) = rhs.shape();
        Self::from_fn(self.height() * rh, self.width() * rw, |row, col| {
            self.data.read(row / rh, col / rw) * rhs.data.read(row % rh, col % rw)
        })
    }

    /// `self ⊗ self ⊗ … ⊗ self` (`k` factors); `k == 0` gives the 1×1 identity.
    pub fn tensor_power(&self, k: usize) -> Matrix {
        (0..k).fold(Matrix::identity(1), |acc, _| acc.tensor(self))
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Matrix {
        Self::from_fn(self.width(), self.height(), |row, col| {
            self.data.read(col, row).conj()
        })
    }

    pub fn scaled(&self, c: C64) -> Matrix {
        Self::from_fn(self.height(), self.width(), |row, col| {
            self.data.read(row, col) * c
        })
    }

    pub fn plus(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::DimensionMismatch {
                op: "plus",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self::from_fn(self.height(), self.width(), |row, col| {
            self.data.read(row, col) + rhs.data.read(row, col)
        }))
    }

    /// Element-wise comparison with tolerance. Shape mismatch compares unequal.
    pub fn approx_eq(&self, rhs: &Matrix, eps: f64) -> bool {
        if self.shape() != rhs.shape() {
            return false;
        }
        (0..self.height()).all(|row| {
            (0..self.width()).all(|col| {
                self.data
                    .read(row, col)
                    .approx_eq(&rhs.data.read(row, col), eps)
            })
        })
    }

    /// `U · U† ≈ I` within `eps`.
    pub fn is_unitary(&self, eps: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.multiply(&self.adjoint()) {
            Ok(product) => product.approx_eq(&Matrix::identity(self.height()), eps),
            Err(_) => false,
        }
    }

    /// Column 0 as a vector of amplitudes.
    pub fn column_values(&self) -> Vec<C64> {
        (0..self.height()).map(|row| self.data.read(row, 0)).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for row in 0..self.height() {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{")?;
            for col in 0..self.width() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", fmt_c64(self.data.read(row, col)))?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}x{}) {}", self.height(), self.width(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> C64 {
        C64::new(re, im)
    }

    #[test]
    fn multiply_rejects_bad_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                op: "multiply",
                lhs: (2, 3),
                rhs: (2, 3),
            }
        );
    }

    #[test]
    fn square_rejects_non_square_length() {
        let values = vec![c(1.0, 0.0); 3];
        assert_eq!(
            Matrix::square(&values).unwrap_err(),
            LinalgError::NotSquare { len: 3 }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![c(1.0, 0.0), c(0.0, 0.0)], vec![c(1.0, 0.0)]];
        assert!(matches!(
            Matrix::from_rows(&rows),
            Err(LinalgError::RaggedRows { row: 1, expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn display_is_deterministic() {
        let m = Matrix::square(&[c(1.0, 0.0), c(0.0, -1.0), c(0.5, 0.5), c(0.0, 0.0)]).unwrap();
        assert_eq!(m.to_string(), "{{1, -i}, {0.5+0.5i, 0}}");
    }

    #[test]
    fn tensor_power_zero_is_scalar_one() {
        let v = Matrix::col(&[c(1.0, 0.0), c(0.0, 0.0)]);
        let p = v.tensor_power(0);
        assert_eq!((p.height(), p.width()), (1, 1));
        assert!(p.get(0, 0).approx_eq(&c(1.0, 0.0), 1e-12));
    }
}
