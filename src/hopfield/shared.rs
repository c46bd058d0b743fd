//! Thread-safe handle to a trained network
//!
//! Recalls only read the weight matrix, so any number of them may run at
//! once. Training needs exclusive access and waits for in-flight recalls.

use std::sync::{Arc, RwLock};

use super::{HopfieldNetwork, RecallResult};
use crate::error::{HopfieldError, Result};

/// Shared-read, exclusive-write wrapper around [`HopfieldNetwork`]
///
/// Clones share the same underlying network.
#[derive(Debug, Clone)]
pub struct SharedNetwork {
    inner: Arc<RwLock<HopfieldNetwork>>,
}

impl SharedNetwork {
    /// Wrap a network for sharing
    pub fn new(network: HopfieldNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    /// Train under the write lock
    pub fn train(&self, patterns: &[Vec<f64>]) -> Result<()> {
        let mut network = self
            .inner
            .write()
            .map_err(|_| HopfieldError::LockPoisoned)?;
        network.train(patterns)
    }

    /// Recall under the read lock
    pub fn recall(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.read()?.recall(input)
    }

    /// Detailed recall under the read lock
    pub fn recall_detailed(&self, input: &[f64]) -> Result<RecallResult> {
        self.read()?.recall_detailed(input)
    }

    /// Energy of a state under the current weights
    pub fn energy(&self, state: &[f64]) -> Result<f64> {
        self.read()?.energy(state)
    }

    pub fn dimension(&self) -> Result<usize> {
        Ok(self.read()?.dimension())
    }

    pub fn pattern_count(&self) -> Result<usize> {
        Ok(self.read()?.pattern_count())
    }

    /// Copy of the current network state
    pub fn snapshot(&self) -> Result<HopfieldNetwork> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HopfieldNetwork>> {
        self.inner.read().map_err(|_| HopfieldError::LockPoisoned)
    }
}

impl From<HopfieldNetwork> for SharedNetwork {
    fn from(network: HopfieldNetwork) -> Self {
        Self::new(network)
    }
}
