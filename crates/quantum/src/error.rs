use linalg::LinalgError;
use thiserror::Error;

use crate::gate::GateId;

pub type Result<T> = std::result::Result<T, QuantumError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantumError {
    /// A non-sentinel gate whose matrix is not a 2×2 unitary.
    #[error("malformed gate '{symbol}': {reason}")]
    MalformedGate { symbol: String, reason: String },

    #[error("gate {0:?} is not registered in the toolbox")]
    UnknownGate(GateId),

    #[error("wire count mismatch: expected {expected}, got {actual}")]
    WireCountMismatch { expected: usize, actual: usize },

    #[error("wire {wire} out of range for a {num_wires}-wire register")]
    WireOutOfRange { wire: usize, num_wires: usize },

    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

impl QuantumError {
    pub fn malformed(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedGate {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
