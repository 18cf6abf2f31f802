//! Salted 32-bit hash primitives.
//!
//! A [`SaltedHasher`] maps `(salt, key)` to a 32-bit digest by feeding the
//! salt bytes and then the key bytes, in that order, to the primitive. The
//! salt acts as a prefix that separates hash rounds. The FNV and XXH32
//! primitives are streaming, so their digest equals hashing `salt ++ key` in
//! one call. [`StdBuildHasher`] makes no such promise, since a std `Hasher`
//! may depend on where one `write` ends and the next begins.
//!
//! Implementations take `&self` and keep any running hash state local to a
//! single `digest` call. Two threads can therefore query the same filter
//! through a shared reference without aliasing state.
//!
//! # Examples
//!
//! ```
//! use saltbloom::hash::{Fnv32, Salt, SaltedHasher};
//!
//! let hasher = Fnv32;
//! let a = hasher.digest(&Salt::new(1), b"apple");
//! let b = hasher.digest(&Salt::new(2), b"apple");
//! assert_ne!(a, b);
//! assert_eq!(a, hasher.digest(&Salt::new(1), b"apple"));
//! ```

#![allow(clippy::module_name_repetitions)]

use super::salt::Salt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hasher};

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// Hash primitive producing a 32-bit digest from a salt and a key.
pub trait SaltedHasher: Send + Sync {
    /// Digest of `salt.as_bytes()` followed by `key`.
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

impl<H: SaltedHasher + ?Sized> SaltedHasher for &H {
    #[inline]
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32 {
        (**self).digest(salt, key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<H: SaltedHasher + ?Sized> SaltedHasher for Box<H> {
    #[inline]
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32 {
        (**self).digest(salt, key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[inline]
fn fnv1_32(mut state: u32, bytes: &[u8]) -> u32 {
    for &byte in bytes {
        state = state.wrapping_mul(FNV32_PRIME);
        state ^= u32::from(byte);
    }
    state
}

#[inline]
fn fnv1a_32(mut state: u32, bytes: &[u8]) -> u32 {
    for &byte in bytes {
        state ^= u32::from(byte);
        state = state.wrapping_mul(FNV32_PRIME);
    }
    state
}

/// 32-bit FNV-1 (multiply, then xor). The default hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv32;

impl SaltedHasher for Fnv32 {
    #[inline]
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32 {
        let state = fnv1_32(FNV32_OFFSET_BASIS, salt.as_bytes());
        fnv1_32(state, key)
    }

    fn name(&self) -> &'static str {
        "FNV-1/32"
    }
}

/// 32-bit FNV-1a (xor, then multiply). Better avalanche on the last byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv32a;

impl SaltedHasher for Fnv32a {
    #[inline]
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32 {
        let state = fnv1a_32(FNV32_OFFSET_BASIS, salt.as_bytes());
        fnv1a_32(state, key)
    }

    fn name(&self) -> &'static str {
        "FNV-1a/32"
    }
}

/// Adapter turning any [`BuildHasher`] into a [`SaltedHasher`].
///
/// A fresh [`Hasher`] is built for every digest, fed the salt then the key,
/// and its 64-bit output is folded to 32 bits.
///
/// # Examples
///
/// ```
/// use saltbloom::hash::{Salt, SaltedHasher, StdBuildHasher};
/// use std::collections::hash_map::RandomState;
///
/// let hasher = StdBuildHasher::new(RandomState::new());
/// let d = hasher.digest(&Salt::new(5), b"key");
/// assert_eq!(d, hasher.digest(&Salt::new(5), b"key"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StdBuildHasher<S = BuildHasherDefault<DefaultHasher>> {
    build: S,
}

impl<S: BuildHasher> StdBuildHasher<S> {
    /// Wrap `build`.
    #[must_use]
    pub fn new(build: S) -> Self {
        Self { build }
    }
}

impl<S> SaltedHasher for StdBuildHasher<S>
where
    S: BuildHasher + Send + Sync,
{
    #[inline]
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32 {
        let mut hasher = self.build.build_hasher();
        hasher.write(salt.as_bytes());
        hasher.write(key);
        let h = hasher.finish();
        (h ^ (h >> 32)) as u32
    }

    fn name(&self) -> &'static str {
        "std::hash"
    }
}
