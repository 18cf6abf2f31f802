//! Salted hash primitives.
//!
//! ```text
//! hash/
//! ├── hasher.rs  - SaltedHasher trait, FNV-1/FNV-1a, std BuildHasher adapter
//! ├── salt.rs    - Salt encoding and seed-derived salt sequences
//! ├── xxhash.rs  - XXH32 backend (feature = "xxhash")
//! └── mod.rs     - This file
//! ```
//!
//! # Choosing a Hasher
//!
//! | Hasher | Notes |
//! |--------|-------|
//! | [`Fnv32`] | Default. Tiny, fast on short keys |
//! | [`Fnv32a`] | FNV-1a variant, slightly better mixing |
//! | [`Xxh32Hasher`] | Fast on long keys, seedable (`xxhash` feature) |
//! | [`StdBuildHasher`] | Any `std::hash::BuildHasher` |
//!
//! # Examples
//!
//! ```
//! use saltbloom::hash::{salts_from_seed, Fnv32, Salt, SaltedHasher};
//!
//! let salts = salts_from_seed(1, 4);
//! let digests: Vec<u32> = salts
//!     .iter()
//!     .map(|&s| Fnv32.digest(&Salt::new(s), b"key"))
//!     .collect();
//! assert_eq!(digests.len(), 4);
//! ```

pub mod hasher;
pub mod salt;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxhash;

pub use hasher::{Fnv32, Fnv32a, SaltedHasher, StdBuildHasher};
pub use salt::{encode_salts, salts_from_seed, Salt};

#[cfg(feature = "xxhash")]
pub use xxhash::Xxh32Hasher;

/// Hasher used when none is specified.
pub type DefaultHasher = Fnv32;
