//! Salted multi-hash Bloom filter.
//!
//! Each of the `k` hash rounds feeds one salt followed by the key to the same
//! 32-bit hash primitive. The digest reduced modulo `m` selects the bit.
//!
//! ```text
//! for salt in salts:
//!     index = digest(salt ++ key) % m
//!     insert: bits[index] = 1
//!     exists: if bits[index] == 0 { return false }
//! ```
//!
//! `m` comes from [`filter_bits`] and is always a power of two of at least
//! 1024 bits. The caller normally supplies exactly [`salts_required`] salts,
//! or asks the filter to derive them from a seed.
//!
//! # Capacity
//!
//! `insert` never refuses a key. Its return value turns `false` on the call
//! that brings the element counter up to the configured capacity, which is the
//! point after which the configured error rate is no longer promised.
//!
//! # Examples
//!
//! ```
//! use saltbloom::filters::SaltedBloomFilter;
//! use saltbloom::hash::{salts_from_seed, Fnv32};
//! use saltbloom::core::params::salts_required;
//!
//! let k = salts_required(1_000, 0.01).unwrap();
//! let salts = salts_from_seed(0x5eed, k);
//! let mut filter = SaltedBloomFilter::new(1_000, 0.01, Fnv32, &salts).unwrap();
//!
//! assert!(filter.insert(b"apple"));
//! assert!(filter.exists(b"apple"));
//! assert!(!filter.exists(b"pear"));
//! assert_eq!(filter.elements(), 1);
//! ```

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

use crate::core::bitvec::BitVec;
use crate::core::filter::BloomFilter;
use crate::core::params::{filter_bits, salts_required};
use crate::error::{Result, SaltBloomError};
use crate::hash::{encode_salts, salts_from_seed, Fnv32, Salt, SaltedHasher};

/// Bloom filter over byte keys using one salted digest per hash round.
///
/// # Type Parameters
///
/// * `H` - Hash primitive (defaults to [`Fnv32`])
///
/// # Thread Safety
///
/// `exists` takes `&self` and the hasher keeps no state between calls, so the
/// filter is `Sync` whenever `H` is. Inserts need `&mut self`.
#[derive(Debug, Clone)]
pub struct SaltedBloomFilter<H = Fnv32>
where
    H: SaltedHasher,
{
    capacity: usize,
    false_positive_rate: f64,
    elements: usize,
    bits: BitVec,
    hasher: H,
    salts: Vec<Salt>,
}

impl<H: SaltedHasher> SaltedBloomFilter<H> {
    /// Create an empty filter sized for `capacity` elements at `false_positive_rate`.
    ///
    /// `salts` are encoded big-endian and used in order, one per hash round.
    /// Passing fewer than [`salts_required`] weakens the error bound; passing
    /// more costs extra hashing. Neither is rejected.
    ///
    /// # Errors
    ///
    /// - [`SaltBloomError::InvalidItemCount`] if `capacity == 0`
    /// - [`SaltBloomError::FalsePositiveRateOutOfBounds`] if the rate is not in (0, 1)
    /// - [`SaltBloomError::InvalidSaltCount`] if `salts` is empty
    /// - [`SaltBloomError::InvalidFilterSize`] if the filter would exceed 2^32 bits
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::filters::SaltedBloomFilter;
    /// use saltbloom::hash::Fnv32a;
    ///
    /// let filter = SaltedBloomFilter::new(100, 0.01, Fnv32a, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(filter.bit_count(), 1024);
    /// assert_eq!(filter.salt_count(), 7);
    ///
    /// assert!(SaltedBloomFilter::new(100, 0.01, Fnv32a, &[]).is_err());
    /// ```
    pub fn new(capacity: usize, false_positive_rate: f64, hasher: H, salts: &[u32]) -> Result<Self> {
        if capacity == 0 {
            return Err(SaltBloomError::invalid_item_count(capacity));
        }
        if salts.is_empty() {
            return Err(SaltBloomError::invalid_salt_count(0, 1));
        }

        let bit_count = filter_bits(capacity, false_positive_rate)?;
        let bits = BitVec::new(bit_count)?;

        #[cfg(feature = "trace")]
        {
            let required = salts_required(capacity, false_positive_rate)?;
            if salts.len() != required {
                tracing::warn!(
                    supplied = salts.len(),
                    required,
                    "salt count differs from the sizing recommendation"
                );
            }
            tracing::debug!(
                capacity,
                false_positive_rate,
                bit_count,
                salts = salts.len(),
                hasher = hasher.name(),
                "SaltedBloomFilter::new"
            );
        }

        Ok(Self {
            capacity,
            false_positive_rate,
            elements: 0,
            bits,
            hasher,
            salts: encode_salts(salts),
        })
    }

    /// Create a filter whose salts are derived from `seed`.
    ///
    /// Exactly [`salts_required`] salts are generated. Two filters built with
    /// the same arguments set identical bits for identical inserts.
    ///
    /// # Errors
    ///
    /// Same as [`SaltedBloomFilter::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::filters::SaltedBloomFilter;
    /// use saltbloom::hash::Fnv32;
    ///
    /// let filter = SaltedBloomFilter::with_salt_seed(10_000, 0.01, Fnv32, 42).unwrap();
    /// assert_eq!(filter.salt_count(), 9);
    /// ```
    pub fn with_salt_seed(
        capacity: usize,
        false_positive_rate: f64,
        hasher: H,
        seed: u64,
    ) -> Result<Self> {
        let count = salts_required(capacity, false_positive_rate)?;
        let salts = salts_from_seed(seed, count);
        Self::new(capacity, false_positive_rate, hasher, &salts)
    }

    /// Add `key` and report whether the filter is still under capacity.
    ///
    /// The counter is bumped even when `key` is already present. The call
    /// that brings the counter to `capacity` returns `false`, as does every
    /// call after it, but the key is inserted regardless.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::filters::SaltedBloomFilter;
    /// use saltbloom::hash::Fnv32;
    ///
    /// let mut filter = SaltedBloomFilter::with_salt_seed(3, 0.01, Fnv32, 1).unwrap();
    /// assert!(filter.insert(b"a"));
    /// assert!(filter.insert(b"b"));
    /// assert!(!filter.insert(b"c"));
    /// assert!(filter.exists(b"c"));
    /// ```
    pub fn insert(&mut self, key: &[u8]) -> bool {
        self.elements += 1;

        for salt in &self.salts {
            let index = bit_index(&self.hasher, salt, key, self.bits.len());
            self.bits.set(index);
        }

        #[cfg(feature = "trace")]
        {
            tracing::trace!(elements = self.elements, "SaltedBloomFilter::insert");
            if self.elements == self.capacity {
                tracing::warn!(
                    capacity = self.capacity,
                    "filter reached capacity, false positive rate may exceed target"
                );
            }
        }

        self.elements < self.capacity
    }

    /// Insert every key. Returns `true` only if each insert did.
    pub fn insert_batch<K: AsRef<[u8]>>(&mut self, keys: &[K]) -> bool {
        let mut under_capacity = true;
        for key in keys {
            under_capacity &= self.insert(key.as_ref());
        }
        under_capacity
    }

    /// Test whether `key` may have been inserted.
    ///
    /// Returns `false` on the first unset bit. A `true` can be a false positive.
    #[must_use]
    pub fn exists(&self, key: &[u8]) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!("SaltedBloomFilter::exists");

        let bit_count = self.bits.len();
        self.salts
            .iter()
            .all(|salt| self.bits.get(bit_index(&self.hasher, salt, key, bit_count)))
    }

    /// Test several keys at once, preserving order.
    #[must_use]
    pub fn exists_batch<K: AsRef<[u8]>>(&self, keys: &[K]) -> Vec<bool> {
        keys.iter().map(|key| self.exists(key.as_ref())).collect()
    }

    /// Raw insert counter, duplicates included.
    #[must_use]
    #[inline]
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Fraction of bits set, in `[0, 1]`.
    ///
    /// Scans the whole vector. Meant for monitoring, not hot paths.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Configured capacity.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target false positive rate the filter was sized for.
    #[must_use]
    #[inline]
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// Number of bits (`m`).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash rounds (`k`).
    #[must_use]
    #[inline]
    pub fn salt_count(&self) -> usize {
        self.salts.len()
    }

    /// Salts in round order.
    #[must_use]
    pub fn salts(&self) -> &[Salt] {
        &self.salts
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// `true` once the counter has reached capacity, i.e. after the first
    /// `insert` that returned `false`.
    #[must_use]
    #[inline]
    pub fn is_over_capacity(&self) -> bool {
        self.elements >= self.capacity
    }

    /// Current false positive estimate from the fill ratio: `fill^k`.
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        let k = i32::try_from(self.salts.len()).unwrap_or(i32::MAX);
        self.fill_ratio().powi(k)
    }

    /// Heap bytes held by the bit vector and the salts.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage() + self.salts.len() * std::mem::size_of::<Salt>()
    }

    /// The hash primitive.
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

#[inline]
fn bit_index<H: SaltedHasher>(hasher: &H, salt: &Salt, key: &[u8], bit_count: usize) -> usize {
    hasher.digest(salt, key) as usize % bit_count
}

impl<H: SaltedHasher> BloomFilter for SaltedBloomFilter<H> {
    fn insert(&mut self, key: &[u8]) -> bool {
        SaltedBloomFilter::insert(self, key)
    }

    fn exists(&self, key: &[u8]) -> bool {
        SaltedBloomFilter::exists(self, key)
    }

    fn elements(&self) -> usize {
        self.elements
    }
}
