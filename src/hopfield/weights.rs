//! Hebbian weight matrix
//!
//! Stores pairwise neuron correlations. Training superimposes patterns:
//! every call to [`WeightMatrix::update`] adds the outer product of the
//! pattern with itself (diagonal excluded) to the existing weights.

use ndarray::{Array2, ArrayView1};
use tracing::warn;

use crate::error::{HopfieldError, Result};

/// Symmetric N×N association matrix with a zero diagonal
///
/// # Example
///
/// ```rust
/// use hopfield_memory::hopfield::WeightMatrix;
///
/// let mut weights = WeightMatrix::new(4).unwrap();
/// weights.update(&[1.0, 1.0, -1.0, -1.0]).unwrap();
///
/// assert_eq!(weights.get(0, 1), 1.0);
/// assert_eq!(weights.get(0, 2), -1.0);
/// assert_eq!(weights.get(2, 2), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    weights: Array2<f64>,
    dimension: usize,
}

impl WeightMatrix {
    /// Create an all-zero matrix for `n` neurons
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(HopfieldError::InvalidDimension(n));
        }

        Ok(Self {
            weights: Array2::zeros((n, n)),
            dimension: n,
        })
    }

    /// Adopt caller-supplied weights.
    ///
    /// The matrix must be square, non-empty and have a zero diagonal.
    /// Asymmetric matrices are accepted but lose the convergence guarantee,
    /// so recall on them relies on the sweep cap.
    pub fn from_array(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 {
            return Err(HopfieldError::InvalidDimension(rows));
        }
        if rows != cols {
            return Err(HopfieldError::InvalidWeights(format!(
                "matrix must be square, got {}x{}",
                rows, cols
            )));
        }
        if let Some(i) = (0..rows).find(|&i| weights[[i, i]] != 0.0) {
            return Err(HopfieldError::InvalidWeights(format!(
                "self-connection at neuron {} is {}",
                i,
                weights[[i, i]]
            )));
        }

        let matrix = Self {
            weights,
            dimension: rows,
        };
        if !matrix.is_symmetric() {
            warn!(
                neurons = rows,
                "adopting asymmetric weight matrix; recall may not converge"
            );
        }

        Ok(matrix)
    }

    /// Number of neurons
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Weight between neurons `i` and `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[[i, j]]
    }

    /// Incoming weights of neuron `i`
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.weights.row(i)
    }

    /// Read-only access to the underlying matrix
    pub fn as_array(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Superimpose one pattern: W[i][j] += p[i] * p[j] for every i != j.
    ///
    /// Calling this twice with the same pattern doubles its contribution.
    pub fn update(&mut self, pattern: &[f64]) -> Result<()> {
        self.check_len(pattern)?;
        self.accumulate(pattern);
        Ok(())
    }

    /// Hebbian outer-product accumulation; length already checked
    pub(crate) fn accumulate(&mut self, pattern: &[f64]) {
        for ((i, j), w) in self.weights.indexed_iter_mut() {
            if i != j {
                *w += pattern[i] * pattern[j];
            }
        }
    }

    /// Weighted input to neuron `i`: Σ_j W[i][j] * state[j]
    pub fn weighted_sum(&self, state: &[f64], i: usize) -> Result<f64> {
        self.check_len(state)?;
        if i >= self.dimension {
            return Err(HopfieldError::IndexOutOfRange {
                index: i,
                dimension: self.dimension,
            });
        }

        Ok(self.local_field(state, i))
    }

    /// Unchecked weighted sum used inside the recall loop
    pub(crate) fn local_field(&self, state: &[f64], i: usize) -> f64 {
        self.weights.row(i).dot(&ArrayView1::from(state))
    }

    /// Energy E(s) = -1/2 Σ_i Σ_j W[i][j] s_i s_j
    pub fn energy(&self, state: &[f64]) -> Result<f64> {
        self.check_len(state)?;
        Ok(self.energy_unchecked(state))
    }

    pub(crate) fn energy_unchecked(&self, state: &[f64]) -> f64 {
        let s = ArrayView1::from(state);
        -0.5 * s.dot(&self.weights.dot(&s))
    }

    /// Check W[i][j] == W[j][i] for every pair
    pub fn is_symmetric(&self) -> bool {
        let n = self.dimension;
        (0..n).all(|i| (i + 1..n).all(|j| self.weights[[i, j]] == self.weights[[j, i]]))
    }

    fn check_len(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.dimension {
            return Err(HopfieldError::mismatch(self.dimension, values.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_is_zero() {
        let weights = WeightMatrix::new(3).unwrap();
        assert_eq!(weights.dimension(), 3);
        assert!(weights.as_array().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_zero_neurons_rejected() {
        assert_eq!(
            WeightMatrix::new(0),
            Err(HopfieldError::InvalidDimension(0))
        );
    }

    #[test]
    fn test_single_pattern_weights() {
        let mut weights = WeightMatrix::new(4).unwrap();
        weights.update(&[1.0, 1.0, -1.0, -1.0]).unwrap();

        let expected = array![
            [0.0, 1.0, -1.0, -1.0],
            [1.0, 0.0, -1.0, -1.0],
            [-1.0, -1.0, 0.0, 1.0],
            [-1.0, -1.0, 1.0, 0.0],
        ];
        assert_eq!(weights.as_array(), &expected);
    }

    #[test]
    fn test_repeated_update_accumulates() {
        let pattern = [1.0, -1.0, 1.0];
        let mut weights = WeightMatrix::new(3).unwrap();
        weights.update(&pattern).unwrap();
        weights.update(&pattern).unwrap();

        assert_eq!(weights.get(0, 1), -2.0);
        assert_eq!(weights.get(0, 2), 2.0);
        assert_eq!(weights.get(1, 1), 0.0);
    }

    #[test]
    fn test_symmetry_and_zero_diagonal() {
        let mut weights = WeightMatrix::new(5).unwrap();
        weights.update(&[1.0, -1.0, 1.0, 1.0, -1.0]).unwrap();
        weights.update(&[-1.0, -1.0, 1.0, -1.0, 1.0]).unwrap();
        weights.update(&[1.0, 1.0, 1.0, -1.0, -1.0]).unwrap();

        assert!(weights.is_symmetric());
        for i in 0..5 {
            assert_eq!(weights.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_update_length_mismatch() {
        let mut weights = WeightMatrix::new(4).unwrap();
        let result = weights.update(&[1.0, -1.0]);
        assert_eq!(
            result,
            Err(HopfieldError::DimensionMismatch { expected: 4, actual: 2 })
        );
        assert!(weights.as_array().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_weighted_sum() {
        let mut weights = WeightMatrix::new(4).unwrap();
        weights.update(&[1.0, 1.0, -1.0, -1.0]).unwrap();

        let state = [-1.0, 1.0, -1.0, -1.0];
        assert_eq!(weights.weighted_sum(&state, 0).unwrap(), 3.0);
        assert_eq!(weights.weighted_sum(&state, 1).unwrap(), 1.0);

        assert!(matches!(
            weights.weighted_sum(&state, 4),
            Err(HopfieldError::IndexOutOfRange { index: 4, dimension: 4 })
        ));
        assert!(weights.weighted_sum(&state[..3], 0).is_err());
    }

    #[test]
    fn test_energy_of_stored_pattern() {
        let pattern = [1.0, 1.0, -1.0, -1.0];
        let mut weights = WeightMatrix::new(4).unwrap();
        weights.update(&pattern).unwrap();

        // Every off-diagonal term contributes +1: -1/2 * 12
        assert_eq!(weights.energy(&pattern).unwrap(), -6.0);
        assert_eq!(weights.energy(&[-1.0, 1.0, -1.0, -1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_from_array_validation() {
        let asymmetric = array![[0.0, 1.0], [-1.0, 0.0]];
        let weights = WeightMatrix::from_array(asymmetric).unwrap();
        assert!(!weights.is_symmetric());

        let self_loop = array![[1.0, 0.0], [0.0, 0.0]];
        assert!(matches!(
            WeightMatrix::from_array(self_loop),
            Err(HopfieldError::InvalidWeights(_))
        ));

        let rectangular = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            WeightMatrix::from_array(rectangular),
            Err(HopfieldError::InvalidWeights(_))
        ));

        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(
            WeightMatrix::from_array(empty),
            Err(HopfieldError::InvalidDimension(0))
        );
    }
}
