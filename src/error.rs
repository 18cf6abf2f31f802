//! Error types for saltbloom operations.
//!
//! Every fallible constructor and sizing function returns [`Result<T>`]. The
//! filter's insert path never fails: running past capacity is reported through
//! the boolean return of `insert`, not through this type.
//!
//! # Error Propagation
//!
//! ```
//! use saltbloom::{Result, SaltBloomError};
//! use saltbloom::core::params::{filter_bits, salts_required};
//!
//! fn sizing(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = filter_bits(n, fp)?;
//!     let k = salts_required(n, fp)?;
//!     Ok((m, k))
//! }
//! # assert!(sizing(1000, 0.01).is_ok());
//! # assert!(sizing(1000, 1.5).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SaltBloomError>;

/// Errors that can occur while sizing or constructing a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum SaltBloomError {
    /// Parameters are individually valid but do not describe a usable filter.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate outside the open interval (0, 1).
    ///
    /// A rate of 0 would need infinite memory and a rate of 1 accepts
    /// everything; negative or larger values have no meaning.
    FalsePositiveRateOutOfBounds {
        /// The rate that was provided.
        fp_rate: f64,
    },

    /// Capacity is unusable for the requested computation (zero).
    InvalidItemCount {
        /// The count that was provided.
        count: usize,
    },

    /// Bit vector size is zero or beyond what a 32-bit digest can address.
    InvalidFilterSize {
        /// The requested size in bits.
        size: u64,
    },

    /// No salts were supplied, so no bit would ever be touched.
    InvalidSaltCount {
        /// Number of salts supplied.
        count: usize,
        /// Minimum accepted.
        min: usize,
    },

    /// Bit index at or beyond the vector length.
    IndexOutOfBounds {
        /// The invalid index that was accessed.
        index: usize,
        /// The valid length of the bit vector.
        length: usize,
    },

    /// A configuration document could not be parsed.
    #[cfg(feature = "serde")]
    ConfigError {
        /// Description of what failed.
        message: String,
    },
}

impl fmt::Display for SaltBloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid capacity: {}. Capacity must be greater than 0.",
                    count
                )
            }
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Must be positive and addressable by a 32-bit digest.",
                    size
                )
            }
            Self::InvalidSaltCount { count, min } => {
                write!(
                    f,
                    "Invalid salt count: {}. At least {} salt is required.",
                    count, min
                )
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for bit vector of length {}",
                    index, length
                )
            }
            #[cfg(feature = "serde")]
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}.", message)
            }
        }
    }
}

impl std::error::Error for SaltBloomError {}

impl SaltBloomError {
    /// Create an `InvalidParameters` error with a formatted message.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: u64) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidSaltCount` error.
    #[must_use]
    pub fn invalid_salt_count(count: usize, min: usize) -> Self {
        Self::InvalidSaltCount { count, min }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create a `ConfigError`.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}
