//! Filter sizing from a target capacity and false positive rate.
//!
//! Given:
//! - `n`: capacity (elements before the error bound may degrade)
//! - `ε`: target false positive rate
//!
//! The bit count starts from the textbook optimum and is then rounded up to a
//! power of two, never smaller than [`MIN_FILTER_BITS`]:
//!
//! ```text
//! m = next_pow2(⌊ n × -ln(ε) / (ln 2)² ⌋)      m ≥ 1024
//! k = ⌊ 0.7 × (m / n) ⌋                        k ≥ 2
//! ```
//!
//! `0.7` stands in for `ln 2 ≈ 0.693` in the optimal `k = (m/n) × ln 2`.
//! Because `m` was rounded up, `k` is computed from the rounded `m`, which
//! keeps the real error rate at or below the target.
//!
//! # Examples
//!
//! ```
//! use saltbloom::core::params::{filter_bits, salts_required};
//!
//! let m = filter_bits(10_000, 0.01).unwrap();
//! let k = salts_required(10_000, 0.01).unwrap();
//! assert_eq!(m, 131_072);
//! assert_eq!(k, 9);
//! ```

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, SaltBloomError};
use std::f64::consts::LN_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Smallest bit vector ever produced by [`filter_bits`].
pub const MIN_FILTER_BITS: usize = 1024;

/// Largest bit vector a 32-bit digest reduced modulo `m` can address.
pub const MAX_FILTER_BITS: u64 = 1 << 32;

/// Smallest salt count ever produced by [`salts_required`].
pub const MIN_SALTS: usize = 2;

/// Approximation of ln 2 used when deriving the salt count.
pub const SALT_FACTOR: f32 = 0.7;

/// Reject rates outside the open interval (0, 1), NaN included.
#[inline]
pub(crate) fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(SaltBloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(())
}

/// Number of bits needed for `capacity` elements at `fp_rate`.
///
/// The raw optimum is truncated to an integer, rounded up to the next power
/// of two and floored at [`MIN_FILTER_BITS`]. A capacity of 0 yields the floor.
///
/// # Errors
///
/// - [`SaltBloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1)
/// - [`SaltBloomError::InvalidFilterSize`] if the result exceeds [`MAX_FILTER_BITS`]
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::filter_bits;
///
/// assert_eq!(filter_bits(1000, 0.01).unwrap(), 16_384);
/// assert_eq!(filter_bits(10, 0.1).unwrap(), 1024);
/// assert!(filter_bits(1000, 0.0).is_err());
/// ```
pub fn filter_bits(capacity: usize, fp_rate: f64) -> Result<usize> {
    validate_fp_rate(fp_rate)?;

    let raw = capacity as f64 * -fp_rate.ln() / LN2_SQUARED;
    if raw >= MAX_FILTER_BITS as f64 {
        return Err(SaltBloomError::invalid_filter_size(raw as u64));
    }

    let m = (raw as u64).next_power_of_two();
    if m > MAX_FILTER_BITS {
        return Err(SaltBloomError::invalid_filter_size(m));
    }

    let m = usize::try_from(m).map_err(|_| SaltBloomError::invalid_filter_size(m))?;
    Ok(m.max(MIN_FILTER_BITS))
}

/// Number of salts (hash rounds) the caller should generate.
///
/// Computed from the bit count returned by [`filter_bits`] for the same
/// inputs, so it must be called before generating salts for the constructor.
///
/// # Errors
///
/// - [`SaltBloomError::InvalidItemCount`] if `capacity == 0`
/// - any error from [`filter_bits`]
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::salts_required;
///
/// assert_eq!(salts_required(1000, 0.01).unwrap(), 11);
/// // Tight filters still get at least two rounds.
/// assert_eq!(salts_required(1_000_000, 0.5).unwrap(), 2);
/// ```
pub fn salts_required(capacity: usize, fp_rate: f64) -> Result<usize> {
    if capacity == 0 {
        return Err(SaltBloomError::invalid_item_count(capacity));
    }

    let m = filter_bits(capacity, fp_rate)?;
    let ratio = (m as f64 / capacity as f64) as f32;
    let salts = (SALT_FACTOR * ratio) as usize;

    Ok(salts.max(MIN_SALTS))
}

/// Theoretical false positive rate `(1 - e^(-kn/m))^k`.
///
/// # Errors
///
/// - [`SaltBloomError::InvalidFilterSize`] if `bit_count == 0`
/// - [`SaltBloomError::InvalidSaltCount`] if `salt_count == 0`
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(131_072, 10_000, 9).unwrap();
/// assert!(fp < 0.01);
/// ```
pub fn expected_fp_rate(bit_count: usize, items: usize, salt_count: usize) -> Result<f64> {
    if bit_count == 0 {
        return Err(SaltBloomError::invalid_filter_size(0));
    }
    if salt_count == 0 {
        return Err(SaltBloomError::invalid_salt_count(0, 1));
    }
    if items == 0 {
        return Ok(0.0);
    }

    let m = bit_count as f64;
    let n = items as f64;
    let k = salt_count as f64;

    let fp = (1.0 - (-(k * n) / m).exp()).powf(k);
    Ok(fp.clamp(0.0, 1.0))
}

/// Bit count and salt count for one `(capacity, fp_rate)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterParams {
    /// Bits in the vector (power of two, at least [`MIN_FILTER_BITS`]).
    pub bit_count: usize,
    /// Salts the caller should supply (at least [`MIN_SALTS`]).
    pub salt_count: usize,
}

impl FilterParams {
    /// Bits spent per element at full capacity.
    #[must_use]
    pub fn bits_per_element(&self, capacity: usize) -> f64 {
        if capacity == 0 {
            return self.bit_count as f64;
        }
        self.bit_count as f64 / capacity as f64
    }

    /// Memory taken by the packed vector, in bytes.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        (self.bit_count + 31) / 32 * std::mem::size_of::<u32>()
    }
}

/// Compute both [`filter_bits`] and [`salts_required`] at once.
///
/// # Errors
///
/// Same as [`salts_required`].
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::calculate_filter_params;
///
/// let params = calculate_filter_params(100, 0.01).unwrap();
/// assert_eq!(params.bit_count, 1024);
/// assert_eq!(params.salt_count, 7);
/// ```
pub fn calculate_filter_params(capacity: usize, fp_rate: f64) -> Result<FilterParams> {
    Ok(FilterParams {
        bit_count: filter_bits(capacity, fp_rate)?,
        salt_count: salts_required(capacity, fp_rate)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln2_squared_constant() {
        let expected = 0.480_453_013_918_201_4;
        assert!((LN2_SQUARED - expected).abs() < 1e-10);
    }

    #[test]
    fn test_filter_bits_reference_table() {
        let cases = [
            (100, 0.01, 1024),
            (1_000, 0.01, 16_384),
            (10_000, 0.01, 131_072),
            (1_000_000, 0.01, 16_777_216),
            (1_000, 0.1, 8_192),
            (1_000, 0.001, 16_384),
        ];

        for (n, fp, expected) in cases {
            assert_eq!(
                filter_bits(n, fp).unwrap(),
                expected,
                "n={}, fp={}",
                n,
                fp
            );
        }
    }

    #[test]
    fn test_filter_bits_floor() {
        assert_eq!(filter_bits(0, 0.01).unwrap(), MIN_FILTER_BITS);
        assert_eq!(filter_bits(1, 0.5).unwrap(), MIN_FILTER_BITS);
        assert_eq!(filter_bits(10, 0.99).unwrap(), MIN_FILTER_BITS);
    }

    #[test]
    fn test_filter_bits_is_power_of_two() {
        for n in [1, 7, 100, 999, 4_321, 65_536, 250_000] {
            for fp in [0.5, 0.1, 0.01, 0.001, 0.0001] {
                let m = filter_bits(n, fp).unwrap();
                assert!(m.is_power_of_two(), "n={}, fp={}, m={}", n, fp, m);
                assert!(m >= MIN_FILTER_BITS);
            }
        }
    }

    #[test]
    fn test_filter_bits_covers_optimum() {
        let n = 12_345;
        let fp: f64 = 0.02;
        let raw = n as f64 * -fp.ln() / LN2_SQUARED;
        let m = filter_bits(n, fp).unwrap() as f64;
        assert!(m >= raw.floor());
        assert!(m < raw * 2.0);
    }

    #[test]
    fn test_filter_bits_invalid_fp_rate() {
        for fp in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                filter_bits(1000, fp),
                Err(SaltBloomError::FalsePositiveRateOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_filter_bits_too_large() {
        let result = filter_bits(1_000_000_000, 0.0001);
        assert!(matches!(
            result,
            Err(SaltBloomError::InvalidFilterSize { .. })
        ));
    }

    #[test]
    fn test_salts_required_reference_table() {
        let cases = [
            (100, 0.01, 7),
            (1_000, 0.01, 11),
            (10_000, 0.01, 9),
            (1_000_000, 0.01, 11),
        ];

        for (n, fp, expected) in cases {
            assert_eq!(
                salts_required(n, fp).unwrap(),
                expected,
                "n={}, fp={}",
                n,
                fp
            );
        }
    }

    #[test]
    fn test_salts_required_floor() {
        assert_eq!(salts_required(1_000_000, 0.5).unwrap(), MIN_SALTS);
    }

    #[test]
    fn test_salts_required_zero_capacity() {
        assert!(matches!(
            salts_required(0, 0.01),
            Err(SaltBloomError::InvalidItemCount { count: 0 })
        ));
    }

    #[test]
    fn test_sizing_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(filter_bits(5_000, 0.03).unwrap(), filter_bits(5_000, 0.03).unwrap());
            assert_eq!(
                salts_required(5_000, 0.03).unwrap(),
                salts_required(5_000, 0.03).unwrap()
            );
        }
    }

    #[test]
    fn test_expected_fp_rate_at_capacity_meets_target() {
        for (n, target) in [(1_000, 0.01), (10_000, 0.01), (50_000, 0.001)] {
            let params = calculate_filter_params(n, target).unwrap();
            let fp = expected_fp_rate(params.bit_count, n, params.salt_count).unwrap();
            assert!(fp <= target, "n={}: expected <= {}, got {}", n, target, fp);
        }
    }

    #[test]
    fn test_expected_fp_rate_edge_cases() {
        assert_eq!(expected_fp_rate(1024, 0, 7).unwrap(), 0.0);
        assert!(expected_fp_rate(0, 10, 7).is_err());
        assert!(expected_fp_rate(1024, 10, 0).is_err());
        assert!(expected_fp_rate(1024, 10_000, 7).unwrap() > 0.9);
    }

    #[test]
    fn test_filter_params_helpers() {
        let params = calculate_filter_params(10_000, 0.01).unwrap();
        assert!((params.bits_per_element(10_000) - 13.1072).abs() < 1e-9);
        assert_eq!(params.memory_bytes(), 131_072 / 8);
    }
}
