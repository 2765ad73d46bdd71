use std::f64::consts::PI;

use crate::complex::C64;
use crate::matrix::Matrix;

impl Matrix {
    /// Single-qubit unitary rotating the Bloch vector by `2π·t` about the axis
    /// `(x, y, z) / t`, where `t = |(x, y, z)|` is measured in turns.
    ///
    /// The global phase is `e^{iπt}`, which makes a half turn equal the Pauli
    /// (or Hadamard) matrix exactly and a full turn equal the identity.
    pub fn from_rotation(x: f64, y: f64, z: f64) -> Matrix {
        let t = (x * x + y * y + z * z).sqrt();
        if t == 0.0 {
            return Matrix::identity(2);
        }

        let (s, c) = sin_cos_half_turns(t);
        let (nx, ny, nz) = (x / t, y / t, z / t);
        let phase = C64::new(c, s);

        // e^{iθ/2} (cos(θ/2) I - i sin(θ/2) n·σ)
        let entries = [
            C64::new(c, -s * nz),
            C64::new(-s * ny, -s * nx),
            C64::new(s * ny, -s * nx),
            C64::new(c, s * nz),
        ];
        Matrix::from_fn(2, 2, |row, col| phase * entries[row * 2 + col])
    }
}

/// `sin(πt)` and `cos(πt)`, exact whenever `2t` is an integer so that half
/// and full turns produce matrices without stray round-off terms.
fn sin_cos_half_turns(t: f64) -> (f64, f64) {
    let k = 2.0 * t;
    if k == k.round() && k.abs() < (1u64 << 52) as f64 {
        match (k as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        (PI * t).sin_cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::ComplexExt;

    #[test]
    fn half_turn_about_x_is_exact() {
        let x = Matrix::from_rotation(0.5, 0.0, 0.0);
        assert_eq!(x.get(0, 0).norm2(), 0.0);
        assert_eq!(x.get(1, 1).norm2(), 0.0);
        assert_eq!(x.get(0, 1).re, 1.0);
        assert_eq!(x.get(1, 0).re, 1.0);
    }

    #[test]
    fn generic_angles_use_trig() {
        let (s, c) = sin_cos_half_turns(0.1);
        assert!((s - (0.1 * PI).sin()).abs() < 1e-15);
        assert!((c - (0.1 * PI).cos()).abs() < 1e-15);
    }
}
