//! An ordered list of slices over a fixed number of wires.

use linalg::Matrix;
use quantum::{
    slice_peek_statistics, wire_probabilities, GateSlot, OperationSlice, PeekStatistics,
    QuantumError, Toolbox,
};

use crate::error::Result;
use crate::evolve::{evolve, initial_state};

/// Statistics shown for a PEEK slot, measured on the state right after its slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PeekReadout {
    pub slice: usize,
    pub wire: usize,
    pub stats: PeekStatistics,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit {
    num_wires: usize,
    slices: Vec<OperationSlice>,
}

impl Circuit {
    pub fn new(num_wires: usize) -> Self {
        Self {
            num_wires,
            slices: Vec::new(),
        }
    }

    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn slices(&self) -> &[OperationSlice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    fn check_wires(&self, slice: &OperationSlice) -> Result<()> {
        if slice.num_wires() != self.num_wires {
            return Err(QuantumError::WireCountMismatch {
                expected: self.num_wires,
                actual: slice.num_wires(),
            }
            .into());
        }
        Ok(())
    }

    pub fn push(&mut self, slice: OperationSlice) -> Result<()> {
        self.check_wires(&slice)?;
        self.slices.push(slice);
        Ok(())
    }

    /// Inserts `slice` before position `index`, padding with empty slices when
    /// `index` is past the end.
    pub fn insert(&mut self, index: usize, slice: OperationSlice) -> Result<()> {
        self.check_wires(&slice)?;
        self.pad_to(index);
        self.slices.insert(index, slice);
        Ok(())
    }

    fn pad_to(&mut self, len: usize) {
        while self.slices.len() < len {
            self.slices.push(OperationSlice::empty(self.num_wires));
        }
    }

    /// Puts `slot` on `wire` of slice `col`, creating empty slices up to `col`
    /// as needed. Returns the slot it replaced.
    pub fn place(&mut self, col: usize, wire: usize, slot: GateSlot) -> Result<GateSlot> {
        if wire >= self.num_wires {
            return Err(QuantumError::WireOutOfRange {
                wire,
                num_wires: self.num_wires,
            }
            .into());
        }
        self.pad_to(col + 1);
        Ok(self.slices[col].set(wire, slot)?)
    }

    pub fn remove(&mut self, index: usize) -> Option<OperationSlice> {
        (index < self.slices.len()).then(|| self.slices.remove(index))
    }

    pub fn remove_empty_slices(&mut self) {
        self.slices.retain(|s| !s.is_empty());
    }

    /// The first `k` slices as a circuit of their own.
    pub fn prefix(&self, k: usize) -> Circuit {
        Circuit {
            num_wires: self.num_wires,
            slices: self.slices[..k.min(self.slices.len())].to_vec(),
        }
    }

    pub fn initial_state(&self) -> Matrix {
        initial_state(self.num_wires)
    }

    /// Every intermediate state, starting with `|0…0⟩`.
    pub fn evolve(&self, toolbox: &Toolbox) -> Result<Vec<Matrix>> {
        evolve(&self.initial_state(), &self.slices, toolbox)
    }

    pub fn output_state(&self, toolbox: &Toolbox) -> Result<Matrix> {
        let mut states = self.evolve(toolbox)?;
        Ok(states.pop().unwrap_or_else(|| self.initial_state()))
    }

    /// `P(wire k = 1)` on the output state, for each wire.
    pub fn wire_probabilities(&self, toolbox: &Toolbox) -> Result<Vec<f64>> {
        Ok(wire_probabilities(&self.output_state(toolbox)?, self.num_wires))
    }

    pub fn peek_readouts(&self, toolbox: &Toolbox) -> Result<Vec<PeekReadout>> {
        let states = self.evolve(toolbox)?;
        Ok(peek_readouts(&self.slices, &states))
    }
}

/// `states[k + 1]` must be the state after `slices[k]`.
pub(crate) fn peek_readouts(slices: &[OperationSlice], states: &[Matrix]) -> Vec<PeekReadout> {
    slices
        .iter()
        .zip(states.iter().skip(1))
        .enumerate()
        .flat_map(|(index, (slice, state))| {
            slice.peek_wires().map(move |wire| PeekReadout {
                slice: index,
                wire,
                stats: slice_peek_statistics(slice, wire, state),
            })
        })
        .collect()
}
