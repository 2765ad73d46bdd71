//! Fixed single-qubit matrices and the time-dependent matrices of the
//! animated gates.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use linalg::{Matrix, C64};

pub fn hadamard() -> Matrix {
    let q = (1.0f64 / 8.0).sqrt();
    Matrix::from_rotation(q, 0.0, q)
}

pub fn pauli_x() -> Matrix {
    Matrix::from_rotation(0.5, 0.0, 0.0)
}

pub fn pauli_y() -> Matrix {
    Matrix::from_rotation(0.0, 0.5, 0.0)
}

pub fn pauli_z() -> Matrix {
    Matrix::from_rotation(0.0, 0.0, 0.5)
}

/// Real rotation `[[cos θ, -sin θ], [sin θ, cos θ]]`.
pub fn real_rotation(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from_fn(2, 2, |row, col| match (row, col) {
        (0, 0) | (1, 1) => C64::new(c, 0.0),
        (0, 1) => C64::new(-s, 0.0),
        _ => C64::new(s, 0.0),
    })
}

/// Fraction of a full cycle represented by the phase `ts ∈ [0, 2π)`.
#[inline]
pub fn cycle_fraction(ts: f64) -> f64 {
    ts / (2.0 * PI)
}

pub fn evolving_x(ts: f64) -> Matrix {
    Matrix::from_rotation(cycle_fraction(ts), 0.0, 0.0)
}

pub fn evolving_y(ts: f64) -> Matrix {
    Matrix::from_rotation(0.0, cycle_fraction(ts), 0.0)
}

pub fn evolving_z(ts: f64) -> Matrix {
    Matrix::from_rotation(0.0, 0.0, cycle_fraction(ts))
}

/// Rotation about the X+Z diagonal; passes through Hadamard half-way.
pub fn evolving_h(ts: f64) -> Matrix {
    let u = cycle_fraction(ts) * FRAC_1_SQRT_2;
    Matrix::from_rotation(u, 0.0, u)
}
