//! Pattern sources
//!
//! Adapters that turn raw inputs (pixel buffers, hand-drawn text grids) into
//! bipolar vectors of a fixed length. The network never decodes images
//! itself; callers pick a source whose [`PatternSource::dimension`] matches
//! the network's neuron count.

pub mod grid;
pub mod image;

pub use grid::AsciiGrid;
pub use image::LuminanceThreshold;

use crate::error::Result;

/// Converts raw inputs into bipolar patterns of a fixed length
pub trait PatternSource {
    /// Raw input type consumed by this source
    type Input: ?Sized;

    /// Length of every produced pattern
    fn dimension(&self) -> usize;

    /// Encode one input into a bipolar vector of length [`dimension`](Self::dimension)
    fn encode(&self, input: &Self::Input) -> Result<Vec<f64>>;

    /// Encode several inputs, failing on the first bad one
    fn encode_all<'a, I>(&self, inputs: I) -> Result<Vec<Vec<f64>>>
    where
        I: IntoIterator<Item = &'a Self::Input>,
        Self::Input: 'a,
    {
        inputs.into_iter().map(|input| self.encode(input)).collect()
    }
}
