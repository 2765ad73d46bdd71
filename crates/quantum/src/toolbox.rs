//! Arena of shared gate templates.
//!
//! Slices refer to gates by [`GateId`], so an animation tick that rewrites a
//! template's matrix is seen by every slice using it the next time an
//! operator is built.

use linalg::Matrix;
use tracing::trace;

use crate::error::{QuantumError, Result};
use crate::gate::{Animation, Gate, GateId};

#[derive(Clone, Debug, Default)]
pub struct Toolbox {
    gates: Vec<Gate>,
    phase: f64,
}

impl Toolbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full catalogue: half turns, quarter turns, animated gates and the
    /// extra Z phase gates.
    pub fn standard() -> Self {
        let mut toolbox = Self::new();

        let q = (1.0f64 / 8.0).sqrt();
        toolbox.register(Gate::from_rotation(
            "H",
            (q, 0.0, q),
            "Hadamard Gate",
            "Toggles between ON and ON+OFF. Half turn about the X+Z axis.",
        ));
        toolbox.register(Gate::from_rotation(
            "X",
            (0.5, 0.0, 0.0),
            "Pauli X Gate",
            "Toggles between ON and OFF. Half turn about the X axis.",
        ));
        toolbox.register(Gate::from_rotation(
            "Y",
            (0.0, 0.5, 0.0),
            "Pauli Y Gate",
            "Toggles with phase adjustments. Half turn about the Y axis.",
        ));
        toolbox.register(Gate::from_rotation(
            "Z",
            (0.0, 0.0, 0.5),
            "Pauli Z Gate",
            "Negates the amplitude of ON states. Half turn about the Z axis.",
        ));

        let quarter_turns = [
            ("X^1/2", (0.25, 0.0, 0.0), "Half X Gate"),
            ("X^-1/2", (-0.25, 0.0, 0.0), "Inverse Half X Gate"),
            ("Y^1/2", (0.0, 0.25, 0.0), "Half Y Gate"),
            ("Y^-1/2", (0.0, -0.25, 0.0), "Inverse Half Y Gate"),
            ("Z^1/2", (0.0, 0.0, 0.25), "Half Z Gate"),
            ("Z^-1/2", (0.0, 0.0, -0.25), "Inverse Half Z Gate"),
        ];
        for (symbol, axis, name) in quarter_turns {
            toolbox.register(Gate::from_rotation(
                symbol,
                axis,
                name,
                "Quarter turn of the Bloch sphere.",
            ));
        }

        let phase_gates = [
            ("Z^2/3", 1.0 / 3.0),
            ("Z^1/4", 1.0 / 8.0),
            ("Z^1/8", 1.0 / 16.0),
            ("Z^-2/3", -1.0 / 3.0),
            ("Z^-1/4", -1.0 / 8.0),
            ("Z^-1/8", -1.0 / 16.0),
        ];
        for (symbol, turns) in phase_gates {
            toolbox.register(Gate::from_rotation(
                symbol,
                (0.0, 0.0, turns),
                format!("{} Phase Gate", symbol),
                "Phases the ON state. Partial turn about the Z axis.",
            ));
        }

        toolbox.register(Gate::animated(
            "X(t)",
            Animation::EvolvingX,
            "Evolving X Gate",
            "Smoothly interpolates from no-op to the Pauli X gate and back over time.",
        ));
        toolbox.register(Gate::animated(
            "Y(t)",
            Animation::EvolvingY,
            "Evolving Y Gate",
            "Smoothly interpolates from no-op to the Pauli Y gate and back over time.",
        ));
        toolbox.register(Gate::animated(
            "Z(t)",
            Animation::EvolvingZ,
            "Evolving Z Gate",
            "Smoothly interpolates from no-op to the Pauli Z gate and back over time.",
        ));
        toolbox.register(Gate::animated(
            "R(t)",
            Animation::Rotation,
            "Evolving Rotation Gate",
            "A rotation gate whose angle increases and cycles over time.",
        ));
        toolbox.register(Gate::animated(
            "H(t)",
            Animation::EvolvingH,
            "Evolving Hadamard Gate",
            "Smoothly interpolates from no-op to the Hadamard gate and back over time.",
        ));

        toolbox
    }

    pub fn register(&mut self, mut gate: Gate) -> GateId {
        gate.set_phase(self.phase);
        let id = GateId(self.gates.len());
        self.gates.push(gate);
        id
    }

    pub fn get(&self, id: GateId) -> Result<&Gate> {
        self.gates.get(id.0).ok_or(QuantumError::UnknownGate(id))
    }

    /// Current matrix of the gate, read at call time.
    pub fn matrix(&self, id: GateId) -> Result<&Matrix> {
        self.get(id).map(Gate::matrix)
    }

    pub fn find(&self, symbol: &str) -> Option<GateId> {
        self.gates
            .iter()
            .position(|g| g.symbol() == symbol)
            .map(GateId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GateId, &Gate)> {
        self.gates.iter().enumerate().map(|(i, g)| (GateId(i), g))
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Recomputes every animated gate at phase `ts`.
    pub fn set_phase(&mut self, ts: f64) {
        self.phase = ts;
        let mut animated = 0usize;
        for gate in self.gates.iter_mut().filter(|g| g.is_animated()) {
            gate.set_phase(ts);
            animated += 1;
        }
        trace!(phase = ts, animated, "recomputed animated gates");
    }
}
