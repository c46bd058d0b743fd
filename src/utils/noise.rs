//! Noise injection for bipolar patterns
//!
//! Used to build corrupted probes for recall.

use rand::seq::index::sample;
use rand::Rng;

/// Copy of `pattern` with the sign of each listed position flipped.
/// Indices past the end are ignored; repeated indices flip back.
pub fn flip_indices(pattern: &[f64], indices: &[usize]) -> Vec<f64> {
    let mut noisy = pattern.to_vec();
    for &i in indices {
        if let Some(value) = noisy.get_mut(i) {
            *value = -*value;
        }
    }
    noisy
}

/// Copy of `pattern` with `count` distinct random positions flipped.
/// `count` is clamped to the pattern length.
pub fn flip_random<R: Rng + ?Sized>(pattern: &[f64], count: usize, rng: &mut R) -> Vec<f64> {
    let count = count.min(pattern.len());
    let indices = sample(rng, pattern.len(), count).into_vec();
    flip_indices(pattern, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hopfield::hamming_distance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_flip_indices() {
        let pattern = vec![1.0, 1.0, -1.0, -1.0];
        assert_eq!(flip_indices(&pattern, &[0, 3]), vec![-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(flip_indices(&pattern, &[1, 1]), pattern);
        assert_eq!(flip_indices(&pattern, &[10]), pattern);
    }

    #[test]
    fn test_flip_random_exact_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let pattern = vec![1.0; 50];

        for count in [0, 1, 10, 50] {
            let noisy = flip_random(&pattern, count, &mut rng);
            assert_eq!(hamming_distance(&pattern, &noisy), count);
        }
    }

    #[test]
    fn test_flip_random_clamps() {
        let mut rng = StdRng::seed_from_u64(1);
        let noisy = flip_random(&[1.0, -1.0], 5, &mut rng);
        assert_eq!(noisy, vec![-1.0, 1.0]);
    }
}
