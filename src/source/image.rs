//! Grayscale image thresholding

use crate::error::{HopfieldError, Result};

use super::PatternSource;

/// Default luminance cutoff: pixels brighter than this become +1
pub const DEFAULT_CUTOFF: u8 = 127;

/// Maps a row-major grayscale buffer to one neuron per pixel
///
/// A pixel strictly above `cutoff` encodes as +1.0, anything else as -1.0.
///
/// # Example
///
/// ```rust
/// use hopfield_memory::source::{LuminanceThreshold, PatternSource};
///
/// let source = LuminanceThreshold::new(2, 2);
/// let pattern = source.encode(&[0u8, 255, 128, 127][..]).unwrap();
/// assert_eq!(pattern, vec![-1.0, 1.0, 1.0, -1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceThreshold {
    pub width: usize,
    pub height: usize,
    pub cutoff: u8,
}

impl LuminanceThreshold {
    /// Source for `width` x `height` images with the default cutoff
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_cutoff(width, height, DEFAULT_CUTOFF)
    }

    pub fn with_cutoff(width: usize, height: usize, cutoff: u8) -> Self {
        Self {
            width,
            height,
            cutoff,
        }
    }

    /// Encode packed ARGB pixels, thresholding the lowest byte (blue channel)
    pub fn encode_argb(&self, pixels: &[u32]) -> Result<Vec<f64>> {
        self.check_len(pixels.len())?;
        Ok(pixels
            .iter()
            .map(|&argb| self.threshold((argb & 0xFF) as u8))
            .collect())
    }

    fn threshold(&self, luminance: u8) -> f64 {
        if luminance > self.cutoff {
            1.0
        } else {
            -1.0
        }
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        let expected = self.dimension();
        if actual != expected {
            return Err(HopfieldError::mismatch(expected, actual));
        }
        Ok(())
    }
}

impl PatternSource for LuminanceThreshold {
    type Input = [u8];

    fn dimension(&self) -> usize {
        self.width * self.height
    }

    fn encode(&self, pixels: &[u8]) -> Result<Vec<f64>> {
        self.check_len(pixels.len())?;
        Ok(pixels.iter().map(|&p| self.threshold(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_is_exclusive() {
        let source = LuminanceThreshold::with_cutoff(3, 1, 100);
        let pattern = source.encode(&[100u8, 101, 0][..]).unwrap();
        assert_eq!(pattern, vec![-1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_wrong_pixel_count() {
        let source = LuminanceThreshold::new(10, 10);
        assert_eq!(
            source.encode(&[0u8; 99][..]),
            Err(HopfieldError::DimensionMismatch { expected: 100, actual: 99 })
        );
    }

    #[test]
    fn test_argb_uses_low_byte() {
        let source = LuminanceThreshold::new(2, 1);
        // Bright red with dark blue, then black with bright blue
        let pattern = source.encode_argb(&[0xFFFF_0010, 0xFF00_00F0]).unwrap();
        assert_eq!(pattern, vec![-1.0, 1.0]);
    }

    #[test]
    fn test_encode_all() {
        let source = LuminanceThreshold::new(1, 2);
        let images: Vec<&[u8]> = vec![&[255u8, 0][..], &[0u8, 255][..]];
        let patterns = source.encode_all(images).unwrap();
        assert_eq!(patterns, vec![vec![1.0, -1.0], vec![-1.0, 1.0]]);
    }
}
