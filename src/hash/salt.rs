//! Salt encoding and deterministic salt derivation.
//!
//! A salt is a 32-bit value stored as its 4-byte big-endian encoding. Each
//! salt is fed to the hasher ahead of the key, giving every hash round its
//! own domain.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Golden-ratio increment of SplitMix64.
const SPLITMIX_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// One hash-round separator: a `u32` in big-endian byte order.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::Salt;
///
/// let salt = Salt::from(0x0102_0304);
/// assert_eq!(salt.as_bytes(), &[1, 2, 3, 4]);
/// assert_eq!(salt.value(), 0x0102_0304);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Salt([u8; 4]);

impl Salt {
    /// Encode `value` big-endian.
    #[must_use]
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// The encoded bytes, as fed to the hasher.
    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// The decoded `u32`.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<u32> for Salt {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Salt> for u32 {
    fn from(salt: Salt) -> Self {
        salt.value()
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({:#010x})", self.value())
    }
}

/// Encode a slice of raw salt values.
#[must_use]
pub fn encode_salts(values: &[u32]) -> Vec<Salt> {
    values.iter().copied().map(Salt::new).collect()
}

/// Derive `count` salt values from `seed` with SplitMix64.
///
/// The same seed always yields the same sequence, which lets two filters
/// built from the same seed agree bit for bit.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::salts_from_seed;
///
/// let a = salts_from_seed(42, 9);
/// let b = salts_from_seed(42, 9);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 9);
/// ```
#[must_use]
pub fn salts_from_seed(seed: u64, count: usize) -> Vec<u32> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_add(SPLITMIX_GAMMA);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^= z >> 31;
            (z >> 32) as u32
        })
        .collect()
}
