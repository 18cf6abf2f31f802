//! Plain-data filter configuration.
//!
//! [`FilterConfig`] carries the three knobs that fully determine an empty
//! filter: capacity, target rate and salt seed. With the `serde` feature it
//! can be loaded from JSON, any missing field taking its default.
//!
//! # Examples
//!
//! ```
//! use saltbloom::builder::FilterConfig;
//!
//! let config = FilterConfig {
//!     capacity: 5_000,
//!     ..FilterConfig::default()
//! };
//! let filter = config.build().unwrap();
//! assert_eq!(filter.capacity(), 5_000);
//! ```

use super::validation;
use super::DEFAULT_SALT_SEED;
use crate::core::params::{self, FilterParams};
use crate::error::Result;
use crate::filters::SaltedBloomFilter;
use crate::hash::{DefaultHasher, SaltedHasher};

#[cfg(feature = "serde")]
use crate::error::SaltBloomError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity, rate and salt seed for one filter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FilterConfig {
    /// Elements before the error bound stops holding
    pub capacity: usize,
    /// Target false positive rate, in (0, 1)
    pub false_positive_rate: f64,
    /// Seed the salts are derived from
    pub salt_seed: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            false_positive_rate: 0.01,
            salt_seed: DEFAULT_SALT_SEED,
        }
    }
}

impl FilterConfig {
    /// Check capacity and rate.
    ///
    /// # Errors
    ///
    /// - [`crate::SaltBloomError::InvalidItemCount`] if `capacity == 0`
    /// - [`crate::SaltBloomError::FalsePositiveRateOutOfBounds`] if the rate is not in (0, 1)
    pub fn validate(&self) -> Result<()> {
        validation::validate_capacity(self.capacity)?;
        validation::validate_fp_rate(self.false_positive_rate)
    }

    /// Bit count and salt count this configuration produces.
    ///
    /// # Errors
    ///
    /// Same as [`FilterConfig::validate`], plus oversize filters.
    pub fn params(&self) -> Result<FilterParams> {
        self.validate()?;
        params::calculate_filter_params(self.capacity, self.false_positive_rate)
    }

    /// Build a filter with the default hasher.
    ///
    /// # Errors
    ///
    /// Same as [`FilterConfig::params`].
    pub fn build(&self) -> Result<SaltedBloomFilter<DefaultHasher>> {
        self.build_with_hasher(DefaultHasher::default())
    }

    /// Build a filter with `hasher`.
    ///
    /// # Errors
    ///
    /// Same as [`FilterConfig::params`].
    pub fn build_with_hasher<H: SaltedHasher>(&self, hasher: H) -> Result<SaltedBloomFilter<H>> {
        self.validate()?;
        SaltedBloomFilter::with_salt_seed(
            self.capacity,
            self.false_positive_rate,
            hasher,
            self.salt_seed,
        )
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`SaltBloomError::ConfigError`] on malformed JSON or unknown fields,
    /// otherwise the errors of [`FilterConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "serde")]
    /// # {
    /// use saltbloom::builder::FilterConfig;
    ///
    /// let config = FilterConfig::from_json_str(r#"{"capacity": 2000}"#).unwrap();
    /// assert_eq!(config.capacity, 2000);
    /// assert_eq!(config.false_positive_rate, 0.01);
    /// # }
    /// ```
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SaltBloomError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`SaltBloomError::ConfigError`] if serialization fails.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SaltBloomError::config_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaltBloomError;
    use crate::hash::Fnv32a;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.capacity, 10_000);
        assert!((config.false_positive_rate - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.salt_seed, DEFAULT_SALT_SEED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_params() {
        let params = FilterConfig::default().params().unwrap();
        assert_eq!(params.bit_count, 131_072);
        assert_eq!(params.salt_count, 9);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = FilterConfig {
            capacity: 0,
            ..FilterConfig::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(SaltBloomError::InvalidItemCount { .. })
        ));

        let bad_rate = FilterConfig {
            false_positive_rate: 1.0,
            ..FilterConfig::default()
        };
        assert!(bad_rate.build().is_err());
    }

    #[test]
    fn test_build_uses_seed() {
        let a = FilterConfig {
            salt_seed: 1,
            ..FilterConfig::default()
        };
        let b = FilterConfig {
            salt_seed: 2,
            ..FilterConfig::default()
        };
        assert_eq!(a.build().unwrap().salts(), a.build().unwrap().salts());
        assert_ne!(a.build().unwrap().salts(), b.build().unwrap().salts());
    }

    #[test]
    fn test_build_with_hasher() {
        let filter = FilterConfig::default().build_with_hasher(Fnv32a).unwrap();
        assert_eq!(filter.hasher().name(), "FNV-1a/32");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_partial() {
        let config = FilterConfig::from_json_str(r#"{"capacity": 123, "salt_seed": 9}"#).unwrap();
        assert_eq!(config.capacity, 123);
        assert_eq!(config.salt_seed, 9);
        assert!((config.false_positive_rate - 0.01).abs() < f64::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            FilterConfig::from_json_str("{not json"),
            Err(SaltBloomError::ConfigError { .. })
        ));
        assert!(matches!(
            FilterConfig::from_json_str(r#"{"capacty": 10}"#),
            Err(SaltBloomError::ConfigError { .. })
        ));
        assert!(matches!(
            FilterConfig::from_json_str(r#"{"false_positive_rate": 2.0}"#),
            Err(SaltBloomError::FalsePositiveRateOutOfBounds { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = FilterConfig {
            capacity: 777,
            false_positive_rate: 0.05,
            salt_seed: 31,
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(FilterConfig::from_json_str(&json).unwrap(), config);
    }
}
