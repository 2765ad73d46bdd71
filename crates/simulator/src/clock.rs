//! The animation phase and the single-step update that keeps every animated
//! gate consistent with it.

use std::f64::consts::TAU;

use linalg::Matrix;
use quantum::Toolbox;
use tracing::trace;

use crate::circuit::{peek_readouts, Circuit, PeekReadout};
use crate::error::Result;

/// Phase advance per tick.
pub const DEFAULT_STEP: f64 = 0.05;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhaseClock {
    phase: f64,
    step: f64,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl PhaseClock {
    pub fn new(step: f64) -> Self {
        Self { phase: 0.0, step }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sets the phase, wrapped into `[0, 2π)`.
    pub fn set(&mut self, phase: f64) {
        self.phase = phase.rem_euclid(TAU);
    }

    pub fn tick(&mut self) -> f64 {
        self.set(self.phase + self.step);
        self.phase
    }
}

/// Everything derived from a circuit at one phase.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub phase: f64,
    pub states: Vec<Matrix>,
    pub wire_probabilities: Vec<f64>,
    pub peeks: Vec<PeekReadout>,
}

impl Snapshot {
    pub fn output(&self) -> &Matrix {
        // `states` always holds at least the initial state
        &self.states[self.states.len() - 1]
    }
}

/// A circuit, its toolbox and the clock driving the toolbox's animated gates.
///
/// Mutation goes through `&mut self`, so a snapshot always sees every animated
/// gate at the same phase.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub circuit: Circuit,
    toolbox: Toolbox,
    clock: PhaseClock,
}

impl Simulation {
    pub fn new(circuit: Circuit, mut toolbox: Toolbox, clock: PhaseClock) -> Self {
        toolbox.set_phase(clock.phase());
        Self {
            circuit,
            toolbox,
            clock,
        }
    }

    pub fn toolbox(&self) -> &Toolbox {
        &self.toolbox
    }

    pub fn phase(&self) -> f64 {
        self.clock.phase()
    }

    /// Advances the clock one step and recomputes the animated gates.
    pub fn tick(&mut self) -> f64 {
        let phase = self.clock.tick();
        self.toolbox.set_phase(phase);
        trace!(phase, "tick");
        phase
    }

    pub fn set_phase(&mut self, phase: f64) {
        self.clock.set(phase);
        self.toolbox.set_phase(self.clock.phase());
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        let states = self.circuit.evolve(&self.toolbox)?;
        let output = &states[states.len() - 1];
        let wire_probabilities = quantum::wire_probabilities(output, self.circuit.num_wires());
        let peeks = peek_readouts(self.circuit.slices(), &states);
        Ok(Snapshot {
            phase: self.clock.phase(),
            states,
            wire_probabilities,
            peeks,
        })
    }

    /// Output state of the first `k` slices, for previewing an insertion point.
    pub fn preview(&self, k: usize) -> Result<Matrix> {
        self.circuit.prefix(k).output_state(&self.toolbox)
    }
}
