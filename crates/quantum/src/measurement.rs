//! Probability readouts from a state vector.
//!
//! Masks address wires by bit: bit `k` of a mask refers to wire `k`.

use linalg::{ComplexExt, Matrix};

use crate::slice::OperationSlice;

#[inline]
fn satisfies(index: usize, expected_mask: usize, required_mask: usize) -> bool {
    index & required_mask == expected_mask & required_mask
}

/// Probability that every wire in `required_mask` holds the bit given by
/// `expected_mask`, marginalising over the other wires.
pub fn marginal_probability(expected_mask: usize, required_mask: usize, state: &Matrix) -> f64 {
    (0..state.height())
        .filter(|&i| satisfies(i, expected_mask, required_mask))
        .map(|i| state.get(i, 0).norm2())
        .sum()
}

/// `P(target_wire = 1 | condition)`.
///
/// Returns NaN when the condition has zero probability: the conditional is
/// undefined there and callers are expected to check for it.
pub fn conditional_probability(
    target_wire: usize,
    expected_mask: usize,
    required_mask: usize,
    state: &Matrix,
) -> f64 {
    let mut on = 0.0;
    let mut off = 0.0;
    for i in (0..state.height()).filter(|&i| satisfies(i, expected_mask, required_mask)) {
        let p = state.get(i, 0).norm2();
        if i & (1 << target_wire) != 0 {
            on += p;
        } else {
            off += p;
        }
    }
    on / (on + off)
}

/// Readout for one peeked wire of a slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PeekStatistics {
    /// `P(target = 1 | controls satisfied)`; NaN when the controls can't be met.
    pub conditional: f64,
    /// `P(target = 1 and controls satisfied)`.
    pub total: f64,
    /// Whether the slice has any control so the two numbers can differ.
    pub can_differ: bool,
}

impl PeekStatistics {
    pub fn conditional_defined(&self) -> Option<f64> {
        if self.conditional.is_nan() {
            None
        } else {
            Some(self.conditional)
        }
    }
}

pub fn slice_peek_statistics(
    slice: &OperationSlice,
    target_wire: usize,
    state: &Matrix,
) -> PeekStatistics {
    let (expected, required) = slice.control_masks();
    let target = 1 << target_wire;
    PeekStatistics {
        conditional: conditional_probability(target_wire, expected, required, state),
        total: marginal_probability(expected | target, required | target, state),
        can_differ: required != 0,
    }
}

/// `P(wire k = 1)` for each of the `num_wires` wires.
pub fn wire_probabilities(state: &Matrix, num_wires: usize) -> Vec<f64> {
    (0..num_wires)
        .map(|k| marginal_probability(1 << k, 1 << k, state))
        .collect()
}
