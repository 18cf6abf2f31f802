//! Filter construction helpers.
//!
//! Two front doors lead to a [`SaltedBloomFilter`](crate::SaltedBloomFilter):
//!
//! - [`SaltedBloomFilterBuilder`]: fluent, type-state builder. Forgetting
//!   the capacity or the rate is a compile error.
//! - [`FilterConfig`]: plain data, loadable from JSON with the `serde` feature.
//!
//! Both validate with the same helpers before any sizing math runs.
//!
//! # Examples
//!
//! ```
//! use saltbloom::builder::{FilterConfig, SaltedBloomFilterBuilder};
//!
//! let from_builder = SaltedBloomFilterBuilder::new()
//!     .capacity(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! let from_config = FilterConfig::default().build().unwrap();
//! assert_eq!(from_builder.salts(), from_config.salts());
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod salted;

pub use config::FilterConfig;
pub use salted::{FilterMetadata, SaltedBloomFilterBuilder};

use crate::error::{Result, SaltBloomError};

/// Salt seed used when none is given.
pub const DEFAULT_SALT_SEED: u64 = 0x5a17_b100_d5ee_d001;

/// Common validation functions for the builder and the config.
pub(crate) mod validation {
    use super::*;
    use std::collections::HashSet;

    /// # Errors
    ///
    /// Returns error if `capacity == 0`.
    #[inline]
    pub fn validate_capacity(capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(SaltBloomError::invalid_item_count(capacity));
        }
        Ok(())
    }

    pub(crate) use crate::core::params::validate_fp_rate;

    /// # Errors
    ///
    /// Returns error if `salts` is empty or repeats a value. A repeated salt
    /// hashes to the same bit as its twin and adds no rounds.
    pub fn validate_salts(salts: &[u32]) -> Result<()> {
        if salts.is_empty() {
            return Err(SaltBloomError::invalid_salt_count(0, 1));
        }

        let mut seen = HashSet::with_capacity(salts.len());
        if let Some(dup) = salts.iter().find(|&&s| !seen.insert(s)) {
            return Err(SaltBloomError::invalid_parameters(format!(
                "salt {:#010x} appears more than once",
                dup
            )));
        }
        Ok(())
    }
}
