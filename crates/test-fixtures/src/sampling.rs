//! Random subset sampling.

use rand::Rng;
use rand::seq::SliceRandom;

/// Selects a random subset of `items` whose size is the floor of
/// `items.len() * fraction`.
///
/// Elements are distinct (no index is picked twice) and the output order is
/// unspecified. Fractions outside `[0, 1]` clamp the subset size to
/// `0..=items.len()`.
pub fn select_random<T: Clone>(items: &[T], fraction: f64, rng: &mut impl Rng) -> Vec<T> {
    let count = ((items.len() as f64) * fraction).floor() as usize;
    items
        .choose_multiple(rng, count.min(items.len()))
        .cloned()
        .collect()
}
