//! Builder for salted Bloom filters.
//!
//! # Type-State Pattern
//!
//! Capacity and false positive rate are required and must be given in that
//! order. The hasher and the salt source are optional and can be set in any
//! state.
//!
//! ```text
//! Initial → WithCapacity → Complete → SaltedBloomFilter
//!     ↓           ↓              ↓
//!  .capacity()  .false_positive_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use saltbloom::builder::SaltedBloomFilterBuilder;
//!
//! let filter = SaltedBloomFilterBuilder::new()
//!     .capacity(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.salt_count(), 9);
//! ```
//!
//! ## Full Configuration
//!
//! ```
//! use saltbloom::builder::SaltedBloomFilterBuilder;
//! use saltbloom::hash::Fnv32a;
//!
//! let filter = SaltedBloomFilterBuilder::new()
//!     .hasher(Fnv32a)
//!     .capacity(100)
//!     .false_positive_rate(0.01)
//!     .salts(vec![11, 22, 33, 44, 55, 66, 77])
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.salts()[0].value(), 11);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use saltbloom::builder::SaltedBloomFilterBuilder;
//!
//! let result = SaltedBloomFilterBuilder::new()
//!     .capacity(0)
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert!(result.is_err());
//! ```

#![allow(clippy::cast_precision_loss)]

use super::validation;
use super::DEFAULT_SALT_SEED;
use crate::core::params;
use crate::error::Result;
use crate::filters::SaltedBloomFilter;
use crate::hash::{salts_from_seed, DefaultHasher, SaltedHasher};
use std::marker::PhantomData;

/// Type-state marker: nothing set yet.
pub struct Initial;

/// Type-state marker: capacity is set.
pub struct WithCapacity;

/// Type-state marker: all required parameters set.
pub struct Complete;

#[derive(Debug, Clone)]
enum SaltSource {
    Seed(u64),
    Explicit(Vec<u32>),
}

/// Builder for [`SaltedBloomFilter`] with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: current builder state (`Initial`, `WithCapacity`, `Complete`)
/// - `H`: hash primitive (defaults to [`DefaultHasher`])
pub struct SaltedBloomFilterBuilder<State, H = DefaultHasher> {
    capacity: usize,
    fp_rate: f64,
    hasher: H,
    salts: SaltSource,
    _state: PhantomData<State>,
}

impl SaltedBloomFilterBuilder<Initial, DefaultHasher> {
    /// Create a builder with the default hasher and the default salt seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: 0,
            fp_rate: 0.0,
            hasher: DefaultHasher::default(),
            salts: SaltSource::Seed(DEFAULT_SALT_SEED),
            _state: PhantomData,
        }
    }
}

impl Default for SaltedBloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> SaltedBloomFilterBuilder<State, H> {
    fn transition<Next>(self) -> SaltedBloomFilterBuilder<Next, H> {
        SaltedBloomFilterBuilder {
            capacity: self.capacity,
            fp_rate: self.fp_rate,
            hasher: self.hasher,
            salts: self.salts,
            _state: PhantomData,
        }
    }

    /// Replace the hash primitive (optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::builder::SaltedBloomFilterBuilder;
    /// use saltbloom::hash::{SaltedHasher, StdBuildHasher};
    /// use std::collections::hash_map::RandomState;
    ///
    /// let filter = SaltedBloomFilterBuilder::new()
    ///     .capacity(1_000)
    ///     .false_positive_rate(0.01)
    ///     .hasher(StdBuildHasher::new(RandomState::new()))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(filter.hasher().name(), "std::hash");
    /// ```
    #[must_use]
    pub fn hasher<H2: SaltedHasher>(self, hasher: H2) -> SaltedBloomFilterBuilder<State, H2> {
        SaltedBloomFilterBuilder {
            capacity: self.capacity,
            fp_rate: self.fp_rate,
            hasher,
            salts: self.salts,
            _state: PhantomData,
        }
    }

    /// Use these salts, in order, instead of deriving them (optional).
    #[must_use]
    pub fn salts(mut self, salts: Vec<u32>) -> Self {
        self.salts = SaltSource::Explicit(salts);
        self
    }

    /// Derive [`params::salts_required`] salts from `seed` (optional).
    ///
    /// Overrides any explicit salts set earlier.
    #[must_use]
    pub fn salt_seed(mut self, seed: u64) -> Self {
        self.salts = SaltSource::Seed(seed);
        self
    }
}

impl<H> SaltedBloomFilterBuilder<Initial, H> {
    /// Set the capacity. Required; moves to `WithCapacity`.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> SaltedBloomFilterBuilder<WithCapacity, H> {
        self.capacity = capacity;
        self.transition()
    }
}

impl<H> SaltedBloomFilterBuilder<WithCapacity, H> {
    /// Set the target false positive rate. Required; moves to `Complete`.
    #[must_use]
    pub fn false_positive_rate(mut self, fp_rate: f64) -> SaltedBloomFilterBuilder<Complete, H> {
        self.fp_rate = fp_rate;
        self.transition()
    }
}

impl<H: SaltedHasher> SaltedBloomFilterBuilder<Complete, H> {
    fn resolve_salts(&self) -> Result<Vec<u32>> {
        validation::validate_capacity(self.capacity)?;
        validation::validate_fp_rate(self.fp_rate)?;

        match &self.salts {
            SaltSource::Seed(seed) => {
                let count = params::salts_required(self.capacity, self.fp_rate)?;
                Ok(salts_from_seed(*seed, count))
            }
            SaltSource::Explicit(salts) => {
                validation::validate_salts(salts)?;
                Ok(salts.clone())
            }
        }
    }

    /// Build the filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `capacity == 0`
    /// - `fp_rate` not in (0, 1)
    /// - explicit salts are empty
    /// - the filter would exceed 2^32 bits
    pub fn build(self) -> Result<SaltedBloomFilter<H>> {
        let salts = self.resolve_salts()?;
        SaltedBloomFilter::new(self.capacity, self.fp_rate, self.hasher, &salts)
    }

    /// Build the filter and return it with its sizing metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::builder::SaltedBloomFilterBuilder;
    ///
    /// let (filter, metadata) = SaltedBloomFilterBuilder::new()
    ///     .capacity(10_000)
    ///     .false_positive_rate(0.01)
    ///     .build_with_metadata()
    ///     .unwrap();
    ///
    /// assert_eq!(metadata.bit_count, filter.bit_count());
    /// println!("Bytes per item: {:.2}", metadata.bytes_per_item);
    /// ```
    pub fn build_with_metadata(self) -> Result<(SaltedBloomFilter<H>, FilterMetadata)> {
        let salts = self.resolve_salts()?;
        let filter = SaltedBloomFilter::new(self.capacity, self.fp_rate, self.hasher, &salts)?;

        let metadata = FilterMetadata {
            capacity: self.capacity,
            fp_rate: self.fp_rate,
            bit_count: filter.bit_count(),
            salt_count: filter.salt_count(),
            recommended_salts: params::salts_required(self.capacity, self.fp_rate)?,
            hasher: filter.hasher().name(),
            bytes_per_item: filter.bit_count() as f64 / 8.0 / self.capacity as f64,
        };

        Ok((filter, metadata))
    }
}

/// Parameters a filter was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMetadata {
    /// Configured capacity
    pub capacity: usize,
    /// Target false positive rate
    pub fp_rate: f64,
    /// Bits in the vector
    pub bit_count: usize,
    /// Salts in use
    pub salt_count: usize,
    /// Salts the sizing math asks for
    pub recommended_salts: usize,
    /// Hasher name
    pub hasher: &'static str,
    /// Memory efficiency (bytes per item at capacity)
    pub bytes_per_item: f64,
}

impl FilterMetadata {
    /// Bit vector size in bytes.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        (self.bit_count + 7) / 8
    }

    /// `false` when explicit salts differ in number from the recommendation.
    #[must_use]
    pub fn salts_match_recommendation(&self) -> bool {
        self.salt_count == self.recommended_salts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaltBloomError;
    use crate::hash::{Fnv32, Fnv32a};

    #[test]
    fn test_builder_minimal() {
        let filter = SaltedBloomFilterBuilder::new()
            .capacity(10_000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();

        assert_eq!(filter.elements(), 0);
        assert_eq!(filter.bit_count(), 131_072);
        assert_eq!(filter.salt_count(), 9);
        assert_eq!(filter.hasher(), &Fnv32);
    }

    #[test]
    fn test_default_seed_matches_with_salt_seed() {
        let built = SaltedBloomFilterBuilder::default()
            .capacity(500)
            .false_positive_rate(0.02)
            .build()
            .unwrap();
        let direct =
            SaltedBloomFilter::with_salt_seed(500, 0.02, Fnv32, DEFAULT_SALT_SEED).unwrap();

        assert_eq!(built.salts(), direct.salts());
    }

    #[test]
    fn test_explicit_salts() {
        let filter = SaltedBloomFilterBuilder::new()
            .capacity(100)
            .false_positive_rate(0.01)
            .salts(vec![5, 6, 7])
            .build()
            .unwrap();

        let values: Vec<u32> = filter.salts().iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![5, 6, 7]);
    }

    #[test]
    fn test_salt_seed_overrides_explicit() {
        let filter = SaltedBloomFilterBuilder::new()
            .salts(vec![1])
            .salt_seed(3)
            .capacity(100)
            .false_positive_rate(0.01)
            .build()
            .unwrap();

        assert_eq!(filter.salt_count(), 7);
    }

    #[test]
    fn test_hasher_any_state() {
        let early = SaltedBloomFilterBuilder::new()
            .hasher(Fnv32a)
            .capacity(100)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        let late = SaltedBloomFilterBuilder::new()
            .capacity(100)
            .false_positive_rate(0.01)
            .hasher(Fnv32a)
            .build()
            .unwrap();

        assert_eq!(early.hasher().name(), "FNV-1a/32");
        assert_eq!(late.hasher().name(), "FNV-1a/32");
    }

    #[test]
    fn test_builder_invalid_capacity() {
        let result = SaltedBloomFilterBuilder::new()
            .capacity(0)
            .false_positive_rate(0.01)
            .build();

        assert!(matches!(result, Err(SaltBloomError::InvalidItemCount { .. })));
    }

    #[test]
    fn test_builder_invalid_fp_rate() {
        for fp in [0.0, 1.0, -0.1, 1.5] {
            let result = SaltedBloomFilterBuilder::new()
                .capacity(10_000)
                .false_positive_rate(fp)
                .build();
            assert!(
                matches!(result, Err(SaltBloomError::FalsePositiveRateOutOfBounds { .. })),
                "fp={}",
                fp
            );
        }
    }

    #[test]
    fn test_builder_empty_salts() {
        let result = SaltedBloomFilterBuilder::new()
            .capacity(10)
            .false_positive_rate(0.01)
            .salts(Vec::new())
            .build();

        assert!(matches!(result, Err(SaltBloomError::InvalidSaltCount { .. })));
    }

    #[test]
    fn test_builder_with_metadata() {
        let (filter, metadata) = SaltedBloomFilterBuilder::new()
            .capacity(10_000)
            .false_positive_rate(0.01)
            .build_with_metadata()
            .unwrap();

        assert_eq!(metadata.capacity, 10_000);
        assert_eq!(metadata.bit_count, filter.bit_count());
        assert_eq!(metadata.salt_count, 9);
        assert!(metadata.salts_match_recommendation());
        assert_eq!(metadata.hasher, "FNV-1/32");
        assert_eq!(metadata.memory_bytes(), 16_384);
        assert!((metadata.bytes_per_item - 1.6384).abs() < 1e-9);
    }

    #[test]
    fn test_metadata_flags_salt_mismatch() {
        let (_, metadata) = SaltedBloomFilterBuilder::new()
            .capacity(1_000)
            .false_positive_rate(0.01)
            .salts(vec![1, 2])
            .build_with_metadata()
            .unwrap();

        assert_eq!(metadata.recommended_salts, 11);
        assert!(!metadata.salts_match_recommendation());
    }

    #[test]
    fn test_built_filter_works() {
        let mut filter = SaltedBloomFilterBuilder::new()
            .capacity(1_000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();

        filter.insert(b"hello");
        filter.insert(b"world");
        assert!(filter.exists(b"hello"));
        assert!(filter.exists(b"world"));
        assert!(!filter.exists(b"missing"));
    }
}
