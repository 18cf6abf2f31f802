//! Membership-filter trait.
//!
//! # Guarantees
//!
//! 1. **No false negatives**: once `insert(x)` has run, `exists(x)` returns `true`
//!    for the rest of the filter's life.
//! 2. **Bounded false positives** while `elements() <= capacity`.
//! 3. **Monotonic**: nothing reachable through this trait ever clears a bit.
//!
//! # Concurrency
//!
//! `insert` takes `&mut self`. For shared use, wrap the filter in
//! `Arc<RwLock<_>>`: readers call `exists` in parallel, writers are exclusive.
//!
//! ```
//! use saltbloom::core::BloomFilter;
//! use saltbloom::hash::Fnv32;
//! use saltbloom::SaltedBloomFilter;
//! use std::sync::{Arc, RwLock};
//!
//! let filter = SaltedBloomFilter::with_salt_seed(1000, 0.01, Fnv32, 7).unwrap();
//! let shared = Arc::new(RwLock::new(filter));
//!
//! let writer = Arc::clone(&shared);
//! std::thread::spawn(move || {
//!     writer.write().unwrap().insert(b"item");
//! })
//! .join()
//! .unwrap();
//!
//! assert!(shared.read().unwrap().exists(b"item"));
//! ```

/// Probabilistic set over byte-string keys.
pub trait BloomFilter {
    /// Add `key` to the set.
    ///
    /// Returns `false` once the element counter has reached the configured
    /// capacity. The insert still happens; the return only signals that the
    /// false positive bound no longer holds.
    fn insert(&mut self, key: &[u8]) -> bool;

    /// Test whether `key` may be in the set.
    ///
    /// * `true` - possibly present (could be a false positive)
    /// * `false` - definitely never inserted
    #[must_use]
    fn exists(&self, key: &[u8]) -> bool;

    /// Number of `insert` calls so far, duplicates included.
    #[must_use]
    fn elements(&self) -> usize;

    /// `true` if nothing has been inserted.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.elements() == 0
    }
}
