//! Input provisioning: manual parsing and seeded random generation.
//!
//! Everything the generators assume about their input is enforced here:
//! at least two values, unique dense ids, `Default` status, and (for
//! binary search) the ascending-sorted precondition. The generators
//! themselves never validate.
//!
//! Random generation uses a seeded ChaCha PRNG, so the same seed always
//! reproduces the same array.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use algoviz_core::{Element, ElementId};

use crate::error::EngineError;

/// Minimum number of values the visualizer accepts.
const MIN_VALUES: usize = 2;

/// Parses comma-separated integers, e.g. `"5, 2, 9, 1, 5"`.
///
/// Whitespace around tokens is ignored. Requires at least two values.
pub fn parse_values(input: &str) -> Result<Vec<i64>, EngineError> {
    if input.trim().is_empty() {
        return Err(EngineError::Empty);
    }

    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let value: i64 = token.parse().map_err(|_| EngineError::InvalidNumber {
            token: token.to_string(),
        })?;
        values.push(value);
    }

    if values.len() < MIN_VALUES {
        return Err(EngineError::NotEnoughValues { got: values.len() });
    }

    Ok(values)
}

/// Builds elements from raw values, assigning dense ids `0..n` and
/// `Default` status.
pub fn elements_from_values(values: &[i64]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Element::new(value, ElementId(i as u32)))
        .collect()
}

/// Generates `size` random elements with values in `min..=max`.
///
/// Reproducible: the same seed yields the same array.
pub fn random_elements(
    size: usize,
    min: i64,
    max: i64,
    seed: u64,
) -> Result<Vec<Element>, EngineError> {
    if size < MIN_VALUES {
        return Err(EngineError::NotEnoughValues { got: size });
    }
    if min > max {
        return Err(EngineError::InvalidRange { min, max });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values: Vec<i64> = (0..size).map(|_| rng.gen_range(min..=max)).collect();
    Ok(elements_from_values(&values))
}

/// Checks the binary-search precondition: values ascending by `value`.
///
/// Returns the first index that breaks the order.
pub fn ensure_sorted(elements: &[Element]) -> Result<(), EngineError> {
    for i in 1..elements.len() {
        if elements[i - 1].value > elements[i].value {
            return Err(EngineError::NotSorted { index: i });
        }
    }
    Ok(())
}
