//! Shared data generators and constants for the benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use saltbloom::hash::SaltedHasher;
use saltbloom::SaltedBloomFilter;
use std::collections::HashSet;

/// Filter capacities exercised by the size benchmarks.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Target false positive rates. Lower rates mean more salts per key.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Key lengths in bytes.
pub const KEY_LENGTHS: &[usize] = &[8, 32, 128, 512];

/// Batch sizes for the batch benchmarks.
pub const BATCH_SIZES: &[usize] = &[10, 100, 1_000];

/// Seed for every generator, so runs are comparable.
pub const SEED: u64 = 0xbe_4c_45_ed;

/// Random alphanumeric keys of `len` bytes.
pub fn generate_keys(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(len).collect())
        .collect()
}

/// Format: "item_00000001", "item_00000002", ...
pub fn generate_sequential_keys(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("item_{:08}", i).into_bytes())
        .collect()
}

/// Two key sets with no key in common.
pub fn create_disjoint_sets(count: usize, len: usize) -> (Vec<Vec<u8>>, Vec<Vec<u8>>) {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    let mut seen = HashSet::with_capacity(count * 2);
    let mut keys = Vec::with_capacity(count * 2);

    while keys.len() < count * 2 {
        let key: Vec<u8> = (&mut rng).sample_iter(&Alphanumeric).take(len).collect();
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    let negatives = keys.split_off(count);
    (keys, negatives)
}

/// Filter sized for `capacity` with `keys` already inserted.
pub fn filled_filter<H: SaltedHasher>(
    capacity: usize,
    fp_rate: f64,
    hasher: H,
    keys: &[Vec<u8>],
) -> SaltedBloomFilter<H> {
    let mut filter = SaltedBloomFilter::with_salt_seed(capacity, fp_rate, hasher, SEED)
        .expect("valid benchmark parameters");
    filter.insert_batch(keys);
    filter
}
