use linalg::Matrix;
use quantum::{state::zero_state, OperationSlice, QuantumError, Toolbox};
use tracing::debug;

use crate::error::Result;

/// `|0…0⟩` for a register of `num_wires` wires.
pub fn initial_state(num_wires: usize) -> Matrix {
    zero_state(num_wires)
}

/// Applies `slices` in order to `initial`.
///
/// Returns `slices.len() + 1` states: index 0 is `initial` and index `k` is
/// the state after the first `k` slices, so evaluating a prefix of `slices`
/// gives the same states as the matching prefix of the result. Each gate's
/// matrix is read from `toolbox` when its slice operator is built.
pub fn evolve(initial: &Matrix, slices: &[OperationSlice], toolbox: &Toolbox) -> Result<Vec<Matrix>> {
    let mut state = initial.clone();
    let mut states = Vec::with_capacity(slices.len() + 1);
    states.push(state.clone());

    for slice in slices {
        let dim = 1usize << slice.num_wires();
        if dim != initial.height() {
            return Err(QuantumError::WireCountMismatch {
                expected: initial.height().trailing_zeros() as usize,
                actual: slice.num_wires(),
            }
            .into());
        }
        let op = slice.operator(toolbox)?;
        state = op.multiply(&state)?;
        states.push(state.clone());
    }

    debug!(
        slices = slices.len(),
        dim = initial.height(),
        phase = toolbox.phase(),
        "evolved state"
    );
    Ok(states)
}

/// The state after every slice has been applied.
pub fn final_state(initial: &Matrix, slices: &[OperationSlice], toolbox: &Toolbox) -> Result<Matrix> {
    let mut states = evolve(initial, slices, toolbox)?;
    Ok(states.pop().unwrap_or_else(|| initial.clone()))
}
