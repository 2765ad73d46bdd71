pub mod complex;
pub mod error;
pub mod matrix;
mod rotation;

pub use complex::{fmt_c64, ComplexExt, C64, DEFAULT_EPSILON};
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
