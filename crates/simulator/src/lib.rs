pub mod circuit;
pub mod clock;
pub mod error;
pub mod evolve;
pub mod output;
pub mod random;
pub mod sweep;
pub mod text;

pub use circuit::{Circuit, PeekReadout};
pub use clock::{PhaseClock, Simulation, Snapshot};
pub use error::{Result, SimError};
pub use evolve::{evolve, final_state, initial_state};
pub use sweep::{phase_sweep, PhaseSample};
pub use text::{format_circuit, parse_circuit};
