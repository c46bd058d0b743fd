//! # Hopfield Memory
//!
//! A discrete Hopfield associative memory: bipolar patterns are stored in a
//! symmetric weight matrix by Hebbian learning, and a noisy or partial input
//! is relaxed to a stable state by asynchronous updates.
//!
//! ## Features
//!
//! - Hebbian weight matrix with superposition across training calls
//! - Asynchronous, index-ordered recall with a configurable sweep cap
//! - Shared-read / exclusive-write handle for concurrent recall
//! - Pattern sources for grayscale pixels and text grids
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield_memory::prelude::*;
//!
//! fn main() -> hopfield_memory::Result<()> {
//!     let grid = AsciiGrid::new(4, 1);
//!     let stored = grid.encode("##..")?;
//!
//!     let mut network = HopfieldNetwork::new(grid.dimension())?;
//!     network.train(&[stored.clone()])?;
//!
//!     let noisy = grid.encode(".#..")?;
//!     assert_eq!(network.recall(&noisy)?, stored);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod hopfield;
pub mod source;
pub mod utils;

// Re-export main types for convenience
pub use config::HopfieldConfig;
pub use error::{HopfieldError, Result};
pub use hopfield::{AssociativeMemory, HopfieldNetwork, RecallResult, SharedNetwork, WeightMatrix};
pub use source::{AsciiGrid, LuminanceThreshold, PatternSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::HopfieldConfig;
    pub use crate::error::{HopfieldError, Result};
    pub use crate::hopfield::{
        hamming_distance, overlap, AssociativeMemory, HopfieldNetwork, RecallResult,
        SharedNetwork, WeightMatrix,
    };
    pub use crate::source::{AsciiGrid, LuminanceThreshold, PatternSource};
    pub use crate::utils::{flip_indices, flip_random};
}
