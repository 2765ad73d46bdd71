use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinalgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`. Shapes are `(height, width)`.
    #[error("dimension mismatch in {op}: lhs is {lhs:?}, rhs is {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("ragged rows: row {row} has {actual} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{len} values do not form a square matrix")]
    NotSquare { len: usize },
}
