//! Test fixtures and helpers.
//!
//! Deterministic item construction and vector setup for integration tests
//! and benchmarks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use rangesync_core::{Item, ItemId, SealedVector, Vector, VectorBuilder, VectorConfig, ID_SIZE};

/// An item whose id is `fill` repeated.
pub fn item(timestamp: u64, fill: u8) -> Item {
    Item::new(timestamp, ItemId([fill; ID_SIZE]))
}

/// An item whose id is `first` followed by zeros.
pub fn item_with_first_byte(timestamp: u64, first: u8) -> Item {
    let mut id = [0u8; ID_SIZE];
    id[0] = first;
    Item::new(timestamp, ItemId(id))
}

/// `count` distinct items with random ids and non-decreasing timestamps.
///
/// The same `seed` always yields the same items.
pub fn random_items(count: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut timestamp = 1_700_000_000u64;
    (0..count)
        .map(|_| {
            timestamp += rng.gen_range(0..3);
            Item::new(timestamp, ItemId(rng.gen()))
        })
        .collect()
}

/// A copy of `items` in a seeded random order.
pub fn shuffled(items: &[Item], seed: u64) -> Vec<Item> {
    let mut out = items.to_vec();
    out.shuffle(&mut StdRng::seed_from_u64(seed));
    out
}

/// Insert `items` into a fresh [`Vector`] and seal it.
///
/// Panics if the items contain a duplicate.
pub fn sealed_vector(items: &[Item]) -> Vector {
    let mut vector = Vector::with_config(&VectorConfig::with_capacity(items.len()));
    for item in items {
        vector.insert_item(*item).expect("open vector accepts items");
    }
    vector.seal().expect("fixture items are distinct");
    vector
}

/// Build a [`SealedVector`] from `items`.
///
/// Panics if the items contain a duplicate.
pub fn sealed(items: &[Item]) -> SealedVector {
    items
        .iter()
        .copied()
        .collect::<VectorBuilder>()
        .seal()
        .expect("fixture items are distinct")
}

/// Two parties' vectors: both hold `shared`, each holds its own extras.
pub struct PartyPair {
    pub local: Vector,
    pub remote: Vector,
}

impl PartyPair {
    /// Build and seal both sides.
    pub fn new(shared: &[Item], local_only: &[Item], remote_only: &[Item]) -> Self {
        let local: Vec<Item> = shared.iter().chain(local_only).copied().collect();
        let remote: Vec<Item> = shared.iter().chain(remote_only).copied().collect();
        Self {
            local: sealed_vector(&shuffled(&local, 1)),
            remote: sealed_vector(&shuffled(&remote, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangesync_core::Storage;

    #[test]
    fn test_random_items_deterministic() {
        assert_eq!(random_items(50, 7), random_items(50, 7));
        assert_ne!(random_items(50, 7), random_items(50, 8));
    }

    #[test]
    fn test_random_items_seal() {
        let v = sealed_vector(&random_items(200, 3));
        assert_eq!(v.size(), 200);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let items = random_items(20, 1);
        let mut mixed = shuffled(&items, 99);
        mixed.sort();
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(mixed, sorted);
    }

    #[test]
    fn test_party_pair_sizes() {
        let shared = random_items(10, 1);
        let pair = PartyPair::new(&shared, &[item(1, 0xaa)], &[]);
        assert_eq!(pair.local.size(), 11);
        assert_eq!(pair.remote.size(), 10);
    }

    #[test]
    fn test_sealed_helper() {
        let s = sealed(&[item(2, 2), item(1, 1)]);
        assert_eq!(s.get_item(0).unwrap(), item(1, 1));
    }
}
