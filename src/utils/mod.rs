//! Utility module for common operations
//!
//! This module provides helpers for preparing recall probes.

pub mod noise;

pub use noise::{flip_indices, flip_random};
