//! XXH32 backend for the salted hasher.
//!
//! Wraps the streaming `Xxh32` state from the `xxhash-rust` crate. A new
//! state is created for each digest, fed the salt then the key.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xxhash")]
//! # {
//! use saltbloom::hash::{Salt, SaltedHasher, Xxh32Hasher};
//!
//! let hasher = Xxh32Hasher::new();
//! let d = hasher.digest(&Salt::new(9), b"hello world");
//! assert_ne!(d, Xxh32Hasher::with_seed(1).digest(&Salt::new(9), b"hello world"));
//! # }
//! ```

#![allow(clippy::module_name_repetitions)]

use super::hasher::SaltedHasher;
use super::salt::Salt;
use xxhash_rust::xxh32::Xxh32;

/// XXH32 hasher with an optional seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh32Hasher {
    seed: u32,
}

impl Xxh32Hasher {
    /// Seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Explicit seed. Different seeds give unrelated digests.
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Configured seed.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl SaltedHasher for Xxh32Hasher {
    #[inline]
    fn digest(&self, salt: &Salt, key: &[u8]) -> u32 {
        let mut state = Xxh32::new(self.seed);
        state.update(salt.as_bytes());
        state.update(key);
        state.digest()
    }

    fn name(&self) -> &'static str {
        "XXH32"
    }
}
