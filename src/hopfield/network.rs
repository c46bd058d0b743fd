//! Classical Hopfield Network (1982)
//!
//! Binary associative memory with Hebbian learning and asynchronous,
//! in-place recall. Each sweep visits neurons in index order and updates
//! them using the latest values of all other neurons, so sweeps are
//! inherently sequential.

use tracing::{debug, trace, warn};

use super::{validate_bipolar, AssociativeMemory, RecallResult, WeightMatrix};
use crate::config::HopfieldConfig;
use crate::error::{HopfieldError, Result};

/// Discrete Hopfield network over bipolar states
///
/// Training accumulates: patterns from every [`train`](Self::train) call are
/// superimposed on the same weight matrix. Construct a new network to start
/// from a blank memory.
///
/// # Example
///
/// ```rust
/// use hopfield_memory::HopfieldNetwork;
///
/// let mut network = HopfieldNetwork::new(4).unwrap();
/// network.train(&[vec![1.0, 1.0, -1.0, -1.0]]).unwrap();
///
/// let recalled = network.recall(&[-1.0, 1.0, -1.0, -1.0]).unwrap();
/// assert_eq!(recalled, vec![1.0, 1.0, -1.0, -1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct HopfieldNetwork {
    weights: WeightMatrix,
    config: HopfieldConfig,
    /// Patterns superimposed so far, in training order
    stored_patterns: Vec<Vec<f64>>,
}

impl HopfieldNetwork {
    /// Create an untrained network with `n` neurons
    pub fn new(n: usize) -> Result<Self> {
        Self::with_config(n, HopfieldConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(n: usize, config: HopfieldConfig) -> Result<Self> {
        Ok(Self::from_weights(WeightMatrix::new(n)?, config))
    }

    /// Wrap an existing weight matrix
    pub fn from_weights(weights: WeightMatrix, config: HopfieldConfig) -> Self {
        Self {
            weights,
            config,
            stored_patterns: Vec::new(),
        }
    }

    /// Number of neurons
    pub fn dimension(&self) -> usize {
        self.weights.dimension()
    }

    /// Number of patterns trained so far
    pub fn pattern_count(&self) -> usize {
        self.stored_patterns.len()
    }

    /// Patterns trained so far, in training order
    pub fn stored_patterns(&self) -> &[Vec<f64>] {
        &self.stored_patterns
    }

    /// The weight matrix
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Get the configuration
    pub fn config(&self) -> &HopfieldConfig {
        &self.config
    }

    /// Maximum sweeps a single recall may take
    pub fn sweep_cap(&self) -> usize {
        self.config.sweep_cap(self.dimension())
    }

    /// Superimpose `patterns` onto the weight matrix.
    ///
    /// Every pattern is validated before any weight changes, so a failed
    /// call leaves the network exactly as it was.
    pub fn train(&mut self, patterns: &[Vec<f64>]) -> Result<()> {
        let n = self.dimension();
        for pattern in patterns {
            validate_bipolar(pattern, n)?;
        }

        for pattern in patterns {
            self.weights.accumulate(pattern);
            self.stored_patterns.push(pattern.clone());
        }

        debug!(
            trained = patterns.len(),
            total = self.stored_patterns.len(),
            neurons = n,
            "superimposed patterns"
        );
        Ok(())
    }

    /// Relax `input` to a stable state. The input itself is never modified.
    pub fn recall(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.recall_detailed(input).map(|result| result.pattern)
    }

    /// Relax `input` to a stable state and report how it got there
    pub fn recall_detailed(&self, input: &[f64]) -> Result<RecallResult> {
        validate_bipolar(input, self.dimension())?;

        let mut state = input.to_vec();
        let cap = self.sweep_cap();
        let mut flips = 0;

        for sweep in 1..=cap {
            let changed = self.sweep(&mut state);
            flips += changed;
            trace!(sweep, flips = changed, "completed sweep");

            if changed == 0 {
                let energy = self.weights.energy_unchecked(&state);
                let matched_index = self.stored_patterns.iter().position(|p| *p == state);
                debug!(sweeps = sweep, flips, energy, "recall converged");

                return Ok(RecallResult {
                    pattern: state,
                    sweeps: sweep,
                    flips,
                    energy,
                    matched_index,
                });
            }
        }

        warn!(sweeps = cap, "recall hit sweep cap without stabilizing");
        Err(HopfieldError::ConvergenceTimeout { sweeps: cap })
    }

    /// Energy of a state under the current weights
    pub fn energy(&self, state: &[f64]) -> Result<f64> {
        self.weights.energy(state)
    }

    /// One asynchronous sweep in index order; returns the number of flips.
    /// A zero weighted sum maps to +1.
    fn sweep(&self, state: &mut [f64]) -> usize {
        let mut flips = 0;
        for i in 0..state.len() {
            let field = self.weights.local_field(state, i);
            let next = if field >= 0.0 { 1.0 } else { -1.0 };
            if next != state[i] {
                state[i] = next;
                flips += 1;
            }
        }
        flips
    }
}

impl AssociativeMemory for HopfieldNetwork {
    fn dimension(&self) -> usize {
        HopfieldNetwork::dimension(self)
    }

    fn pattern_count(&self) -> usize {
        HopfieldNetwork::pattern_count(self)
    }

    fn store(&mut self, patterns: &[Vec<f64>]) -> Result<()> {
        self.train(patterns)
    }

    fn retrieve(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.recall(input)
    }

    fn energy(&self, state: &[f64]) -> Result<f64> {
        HopfieldNetwork::energy(self, state)
    }
}
