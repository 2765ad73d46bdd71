use linalg::LinalgError;
use quantum::QuantumError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    #[error("slice {slice}, wire {wire}: {reason}")]
    Parse {
        slice: usize,
        wire: usize,
        reason: String,
    },

    #[error("circuit text is empty")]
    EmptyCircuitText,
}

impl From<LinalgError> for SimError {
    fn from(err: LinalgError) -> Self {
        Self::Quantum(err.into())
    }
}
