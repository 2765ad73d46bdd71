//! One time-step of a circuit: at most one operation per wire, and the dense
//! whole-register operator it induces.

use linalg::{Matrix, C64};
use tracing::debug;

use crate::error::{QuantumError, Result};
use crate::gate::GateSlot;
use crate::toolbox::Toolbox;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationSlice {
    slots: Vec<GateSlot>,
}

impl OperationSlice {
    pub fn empty(num_wires: usize) -> Self {
        Self {
            slots: vec![GateSlot::Empty; num_wires],
        }
    }

    pub fn from_slots(slots: Vec<GateSlot>) -> Self {
        Self { slots }
    }

    pub fn num_wires(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[GateSlot] {
        &self.slots
    }

    pub fn slot(&self, wire: usize) -> Option<GateSlot> {
        self.slots.get(wire).copied()
    }

    /// Replaces the slot on `wire`, returning the previous occupant.
    pub fn set(&mut self, wire: usize, slot: GateSlot) -> Result<GateSlot> {
        let num_wires = self.num_wires();
        let target = self
            .slots
            .get_mut(wire)
            .ok_or(QuantumError::WireOutOfRange { wire, num_wires })?;
        Ok(std::mem::replace(target, slot))
    }

    pub fn with(mut self, wire: usize, slot: GateSlot) -> Result<Self> {
        self.set(wire, slot)?;
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_empty())
    }

    /// `(expected, required)`: `required` has a bit for every control or
    /// anti-control wire, `expected` only for control wires.
    pub fn control_masks(&self) -> (usize, usize) {
        self.slots
            .iter()
            .enumerate()
            .fold((0, 0), |(expected, required), (wire, slot)| {
                match slot.required_bit() {
                    Some(true) => (expected | 1 << wire, required | 1 << wire),
                    Some(false) => (expected, required | 1 << wire),
                    None => (expected, required),
                }
            })
    }

    pub fn peek_wires(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s, GateSlot::Peek))
            .map(|(wire, _)| wire)
    }

    pub fn has_peek(&self) -> bool {
        self.peek_wires().next().is_some()
    }

    /// The `2^n × 2^n` operator of this slice, reading every gate's current
    /// matrix from `toolbox`.
    ///
    /// Without controls this is `U_{n-1} ⊗ … ⊗ U_0`, so bit `k` of a basis
    /// index belongs to wire `k`. With controls, entries that change a control
    /// bit vanish, the block where every control holds its required value gets
    /// the tensor product, and every other block is the identity.
    pub fn operator(&self, toolbox: &Toolbox) -> Result<Matrix> {
        let identity = Matrix::identity(2);
        let mut op = Matrix::identity(1);
        for slot in self.slots.iter().rev() {
            let factor = match *slot {
                GateSlot::Unitary(id) => {
                    let gate = toolbox.get(id)?;
                    gate.check_shape()?;
                    gate.matrix()
                }
                _ => &identity,
            };
            op = op.tensor(factor);
        }

        let (expected, required) = self.control_masks();
        debug!(
            wires = self.num_wires(),
            controls = required.count_ones(),
            "built slice operator"
        );
        if required == 0 {
            return Ok(op);
        }

        let dim = op.height();
        let zero = C64::new(0.0, 0.0);
        let one = C64::new(1.0, 0.0);
        Ok(Matrix::from_fn(dim, dim, |row, col| {
            if row & required != col & required {
                zero
            } else if row & required == expected {
                op.get(row, col)
            } else if row == col {
                one
            } else {
                zero
            }
        }))
    }
}

/// Free-function form of [`OperationSlice::operator`].
pub fn build_slice_operator(slice: &OperationSlice, toolbox: &Toolbox) -> Result<Matrix> {
    slice.operator(toolbox)
}
