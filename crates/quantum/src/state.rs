use linalg::{Matrix, C64};

/// `|0…0⟩` over `num_wires` wires, built as the tensor power of `[1, 0]`.
pub fn zero_state(num_wires: usize) -> Matrix {
    Matrix::col(&[C64::new(1.0, 0.0), C64::new(0.0, 0.0)]).tensor_power(num_wires)
}

/// Computational basis state `|index⟩`; bit `k` of `index` is wire `k`.
///
/// *Panics if `index` does not fit in `num_wires` bits.*
pub fn basis_state(num_wires: usize, index: usize) -> Matrix {
    let dim = 1usize << num_wires;
    assert!(index < dim, "basis index {} out of range for {} wires", index, num_wires);
    Matrix::from_fn(dim, 1, |row, _| {
        if row == index {
            C64::new(1.0, 0.0)
        } else {
            C64::new(0.0, 0.0)
        }
    })
}
