//! Reflected binary Gray code over the subsets of `width` items.
//!
//! Starting from the empty subset, step `b` (for `b` in `1..2^width`) toggles
//! item `trailing_zeros(b)`. After step `b` the included items are exactly the
//! set bits of `b ^ (b >> 1)`, so every non-empty subset is visited once.

/// Iterator over the item toggled at each Gray-code step.
#[derive(Debug, Clone)]
pub struct GrayFlips {
    step: u64,
    end: u64,
}

/// Enumerates the toggles that walk every subset of `width` items.
///
/// `width` must be below 64.
pub fn gray_flips(width: usize) -> GrayFlips {
    GrayFlips {
        step: 1,
        end: 1u64 << width,
    }
}

impl Iterator for GrayFlips {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.end {
            return None;
        }
        let flipped = self.step.trailing_zeros() as usize;
        self.step += 1;
        Some(flipped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.end - self.step).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for GrayFlips {}

/// Subset mask reached after `step` toggles.
pub fn gray_code(step: u64) -> u64 {
    step ^ (step >> 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn visits_every_non_empty_subset_once() {
        for width in 0..8 {
            let mut mask = 0u64;
            let mut seen = BTreeSet::new();
            for (idx, flip) in gray_flips(width).enumerate() {
                mask ^= 1 << flip;
                assert_eq!(mask, gray_code(idx as u64 + 1));
                assert!(seen.insert(mask));
            }
            assert_eq!(seen.len(), (1usize << width) - 1);
            assert!(!seen.contains(&0));
        }
    }

    #[test]
    fn reports_exact_length() {
        assert_eq!(gray_flips(0).len(), 0);
        assert_eq!(gray_flips(5).len(), 31);
        assert_eq!(gray_flips(3).collect::<Vec<_>>(), vec![0, 1, 0, 2, 0, 1, 0]);
    }
}
