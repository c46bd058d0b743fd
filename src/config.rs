//! Configuration management
//!
//! Recall settings can be built in code or loaded from a TOML file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sweeps allowed per neuron when no explicit cap is configured
pub const DEFAULT_SWEEP_FACTOR: usize = 100;

/// Configuration for recall behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HopfieldConfig {
    /// Hard cap on sweeps per recall. `None` derives the cap from `sweep_factor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sweeps: Option<usize>,
    /// Sweeps allowed per neuron when `max_sweeps` is unset
    pub sweep_factor: usize,
}

impl Default for HopfieldConfig {
    fn default() -> Self {
        Self {
            max_sweeps: None,
            sweep_factor: DEFAULT_SWEEP_FACTOR,
        }
    }
}

impl HopfieldConfig {
    /// Configuration with a fixed sweep cap
    pub fn with_max_sweeps(max_sweeps: usize) -> Self {
        Self {
            max_sweeps: Some(max_sweeps),
            ..Default::default()
        }
    }

    /// Sweep cap for a network of `neurons` neurons (never below one sweep)
    pub fn sweep_cap(&self, neurons: usize) -> usize {
        self.max_sweeps
            .unwrap_or_else(|| self.sweep_factor.saturating_mul(neurons))
            .max(1)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
