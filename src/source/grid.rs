//! Text grid patterns
//!
//! Handy for drawing small bitmaps inline, e.g.
//!
//! ```text
//! . # # .
//! # . . #
//! ```

use crate::error::{HopfieldError, Result};

use super::PatternSource;

/// Parses whitespace-separated or packed character grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiGrid {
    pub width: usize,
    pub height: usize,
    /// Symbol for +1.0
    pub on: char,
    /// Symbol for -1.0
    pub off: char,
}

impl AsciiGrid {
    /// Grid using `#` for on and `.` for off
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_symbols(width, height, '#', '.')
    }

    pub fn with_symbols(width: usize, height: usize, on: char, off: char) -> Self {
        Self {
            width,
            height,
            on,
            off,
        }
    }
}

impl PatternSource for AsciiGrid {
    type Input = str;

    fn dimension(&self) -> usize {
        self.width * self.height
    }

    fn encode(&self, text: &str) -> Result<Vec<f64>> {
        let pattern = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, symbol)| match symbol {
                s if s == self.on => Ok(1.0),
                s if s == self.off => Ok(-1.0),
                _ => Err(HopfieldError::UnknownSymbol { symbol, position }),
            })
            .collect::<Result<Vec<f64>>>()?;

        if pattern.len() != self.dimension() {
            return Err(HopfieldError::mismatch(self.dimension(), pattern.len()));
        }
        Ok(pattern)
    }
}
