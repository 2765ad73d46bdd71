pub mod error;
pub mod gate;
pub mod gates;
pub mod measurement;
pub mod slice;
pub mod state;
pub mod toolbox;

pub use error::{QuantumError, Result};
pub use gate::{Animation, Gate, GateId, GateSlot};
pub use measurement::{
    conditional_probability, marginal_probability, slice_peek_statistics, wire_probabilities,
    PeekStatistics,
};
pub use slice::{build_slice_operator, OperationSlice};
pub use toolbox::Toolbox;
