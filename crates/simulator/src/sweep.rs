//! Evaluating one circuit at many animation phases.

use std::f64::consts::TAU;

use quantum::{wire_probabilities, Toolbox};
use rayon::prelude::*;
use tracing::debug;

use crate::circuit::{peek_readouts, Circuit, PeekReadout};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PhaseSample {
    pub phase: f64,
    pub wire_probabilities: Vec<f64>,
    pub peeks: Vec<PeekReadout>,
}

/// Samples `samples` evenly spaced phases over `[0, 2π)`.
///
/// Phases are evaluated in parallel; each worker recomputes its own copy of
/// `toolbox`, so no two phases ever share an animated matrix.
pub fn phase_sweep(circuit: &Circuit, toolbox: &Toolbox, samples: usize) -> Result<Vec<PhaseSample>> {
    debug!(samples, slices = circuit.len(), "phase sweep");
    (0..samples)
        .into_par_iter()
        .map(|i| -> Result<PhaseSample> {
            let phase = TAU * i as f64 / samples as f64;
            let mut local = toolbox.clone();
            local.set_phase(phase);

            let states = circuit.evolve(&local)?;
            let output = &states[states.len() - 1];
            Ok(PhaseSample {
                phase,
                wire_probabilities: wire_probabilities(output, circuit.num_wires()),
                peeks: peek_readouts(circuit.slices(), &states),
            })
        })
        .collect()
}
