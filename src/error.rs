//! Error types for the Hopfield memory.

use thiserror::Error;

/// Result type for this library
pub type Result<T> = std::result::Result<T, HopfieldError>;

/// Library error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HopfieldError {
    #[error("Invalid neuron count {0}: a network needs at least one neuron")]
    InvalidDimension(usize),

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Value {value} at index {index} is not bipolar (expected +1.0 or -1.0)")]
    NotBipolar { index: usize, value: f64 },

    #[error("Neuron index {index} out of range for {dimension} neurons")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("Invalid weight matrix: {0}")]
    InvalidWeights(String),

    #[error("Recall did not reach a stable state within {sweeps} sweeps")]
    ConvergenceTimeout { sweeps: usize },

    #[error("Unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Shared network lock poisoned")]
    LockPoisoned,
}

impl HopfieldError {
    /// Convenience constructor for length checks
    pub fn mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
