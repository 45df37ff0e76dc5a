//! Error types for the geometry kernels.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// An input's length does not line up with the matrix it is paired with
    #[error("Dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A row's squared norm does not fit the element type
    #[error("Squared norm of row {row} overflows the element type")]
    NormOverflow { row: usize },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
