//! Discrete Hopfield Network
//!
//! This module provides the Hebbian weight matrix, the asynchronous recall
//! engine built on it, and a lock-guarded handle for sharing a trained network
//! across threads.

pub mod network;
pub mod shared;
pub mod weights;

pub use network::HopfieldNetwork;
pub use shared::SharedNetwork;
pub use weights::WeightMatrix;

use crate::error::{HopfieldError, Result};

/// Common interface for associative memories over bipolar patterns
pub trait AssociativeMemory {
    /// Number of neurons (pattern length)
    fn dimension(&self) -> usize;

    /// Number of patterns stored so far
    fn pattern_count(&self) -> usize;

    /// Store patterns in the memory
    fn store(&mut self, patterns: &[Vec<f64>]) -> Result<()>;

    /// Retrieve the stable state reached from the input
    fn retrieve(&self, input: &[f64]) -> Result<Vec<f64>>;

    /// Energy of a given state
    fn energy(&self, state: &[f64]) -> Result<f64>;
}

/// Result of a recall
#[derive(Debug, Clone, PartialEq)]
pub struct RecallResult {
    /// The stable state
    pub pattern: Vec<f64>,
    /// Sweeps performed, including the final sweep without flips
    pub sweeps: usize,
    /// Total neuron flips across all sweeps
    pub flips: usize,
    /// Energy of the stable state
    pub energy: f64,
    /// Index of the stored pattern equal to the stable state, if any
    pub matched_index: Option<usize>,
}

impl RecallResult {
    /// Whether the stable state is one of the stored patterns
    pub fn is_stored_pattern(&self) -> bool {
        self.matched_index.is_some()
    }
}

/// Binarize a continuous pattern to {-1, +1}; zero maps to +1
pub fn binarize_pattern(pattern: &[f64]) -> Vec<f64> {
    pattern.iter().map(|&x| if x >= 0.0 { 1.0 } else { -1.0 }).collect()
}

/// Check that every element is exactly +1.0 or -1.0
pub fn is_bipolar(pattern: &[f64]) -> bool {
    pattern.iter().all(|&x| x == 1.0 || x == -1.0)
}

/// Number of positions where two patterns differ
pub fn hamming_distance(a: &[f64], b: &[f64]) -> usize {
    assert_eq!(a.len(), b.len(), "Patterns must have same length");

    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Normalized overlap m = (1/N) Σ a_i b_i, in [-1, 1] for bipolar patterns
pub fn overlap(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Patterns must have same length");

    if a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    dot / a.len() as f64
}

/// Validate length and bipolarity of a pattern against the neuron count
pub(crate) fn validate_bipolar(pattern: &[f64], dimension: usize) -> Result<()> {
    if pattern.len() != dimension {
        return Err(HopfieldError::mismatch(dimension, pattern.len()));
    }

    match pattern
        .iter()
        .enumerate()
        .find(|(_, &x)| x != 1.0 && x != -1.0)
    {
        Some((index, &value)) => Err(HopfieldError::NotBipolar { index, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_pattern() {
        let pattern = vec![-0.5, 0.3, -0.1, 0.8, 0.0];
        let binary = binarize_pattern(&pattern);
        assert_eq!(binary, vec![-1.0, 1.0, -1.0, 1.0, 1.0]);
        assert!(is_bipolar(&binary));
    }

    #[test]
    fn test_hamming_and_overlap() {
        let a = vec![1.0, -1.0, 1.0, -1.0];
        let b = vec![1.0, 1.0, 1.0, -1.0];
        assert_eq!(hamming_distance(&a, &b), 1);
        assert!((overlap(&a, &b) - 0.5).abs() < 1e-12);

        let inverse: Vec<f64> = a.iter().map(|x| -x).collect();
        assert!((overlap(&a, &inverse) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_bipolar() {
        assert!(validate_bipolar(&[1.0, -1.0], 2).is_ok());
        assert_eq!(
            validate_bipolar(&[1.0, -1.0], 3),
            Err(HopfieldError::DimensionMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            validate_bipolar(&[1.0, 0.5, -1.0], 3),
            Err(HopfieldError::NotBipolar { index: 1, value: 0.5 })
        );
    }
}
