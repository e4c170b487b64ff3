//! Input parsing and random data generation for the visualizer.

use rand::prelude::*;
use rand::rngs::StdRng;
use thiserror::Error;

/// Random values are drawn from this inclusive range, matching the bar chart's
/// expected scale.
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Smallest sequence worth animating.
pub const MIN_COUNT: usize = 2;

/// Largest sequence the animation stays readable at.
pub const MAX_COUNT: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number: {0:?} (use comma-separated integers)")]
    InvalidToken(String),

    #[error("need at least {MIN_COUNT} values, got {0}")]
    TooFew(usize),

    #[error("element count must be between {MIN_COUNT} and {MAX_COUNT}, got {0}")]
    CountOutOfRange(usize),
}

/// Parses a comma-separated list of integers. Whitespace around tokens is
/// tolerated and empty tokens (trailing commas) are skipped.
pub fn parse_values(input: &str) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| InputError::InvalidToken(token.to_string()))?;
        values.push(value);
    }

    if values.len() < MIN_COUNT {
        return Err(InputError::TooFew(values.len()));
    }
    Ok(values)
}

/// Samples `count` distinct values from [`VALUE_RANGE`], like dealing from a
/// shuffled deck. A seed makes the hand reproducible.
pub fn random_values(count: usize, seed: Option<u64>) -> Result<Vec<i64>, InputError> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(InputError::CountOutOfRange(count));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pool: Vec<i64> = VALUE_RANGE.collect();
    pool.shuffle(&mut rng);
    pool.truncate(count);
    Ok(pool)
}
