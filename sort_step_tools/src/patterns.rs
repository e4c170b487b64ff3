//! Deterministic input patterns for the engine test battery and benches.
//!
//! Every pattern derives its rng seed from the requested length, so a failing
//! test names a reproducible input.

use rand::distributions::Distribution;
use rand::prelude::*;
use rand::rngs::StdRng;

const PATTERN_SEED: u64 = 0x5eed_50f7_1234_abcd;

/// Uniform values in the visualizer's 1..=100 range, duplicates possible.
pub fn random_uniform(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(PATTERN_SEED ^ len as u64);
    (0..len).map(|_| rng.gen_range(1..=100)).collect()
}

/// Already sorted ascending.
pub fn ascending(len: usize) -> Vec<i64> {
    (1..=len as i64).collect()
}

/// Sorted descending, the comparison-sort worst case.
pub fn descending(len: usize) -> Vec<i64> {
    (1..=len as i64).rev().collect()
}

/// Every element equal.
pub fn all_equal(len: usize) -> Vec<i64> {
    vec![42; len]
}

/// Zipf-skewed duplicates over roughly len/2 distinct values.
pub fn zipf_skewed(len: usize) -> Vec<i64> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(PATTERN_SEED ^ (len as u64).rotate_left(17));
    let distinct = (len / 2).max(1);
    let dist = zipf::ZipfDistribution::new(distinct, 1.1)
        .expect("distinct >= 1 and exponent > 0 are always valid");
    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_requested_length() {
        for len in [0usize, 1, 2, 7, 20] {
            assert_eq!(random_uniform(len).len(), len);
            assert_eq!(ascending(len).len(), len);
            assert_eq!(descending(len).len(), len);
            assert_eq!(all_equal(len).len(), len);
            assert_eq!(zipf_skewed(len).len(), len);
        }
    }

    #[test]
    fn patterns_are_deterministic() {
        assert_eq!(random_uniform(12), random_uniform(12));
        assert_eq!(zipf_skewed(12), zipf_skewed(12));
    }

    #[test]
    fn random_uniform_stays_in_display_range() {
        assert!(random_uniform(50).iter().all(|&v| (1..=100).contains(&v)));
    }
}
