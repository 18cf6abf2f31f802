//! saltbloom: salted multi-hash Bloom filter over byte-string keys.
//!
//! A Bloom filter answers "possibly present" or "definitely absent" for a key
//! while spending only a few bits per element. This crate hashes every key
//! once per salt: the salt bytes followed by the key bytes are fed to a
//! 32-bit hash primitive, and the digest modulo the vector size picks a bit.
//!
//! # Quick Start
//!
//! ```
//! use saltbloom::SaltedBloomFilter;
//! use saltbloom::hash::Fnv32;
//!
//! // 10,000 elements at 1% false positives, salts derived from a seed
//! let mut filter = SaltedBloomFilter::with_salt_seed(10_000, 0.01, Fnv32, 0xfeed).unwrap();
//!
//! filter.insert(b"hello");
//! filter.insert(b"world");
//!
//! assert!(filter.exists(b"hello"));    // inserted, always true
//! assert!(!filter.exists(b"goodbye")); // never inserted
//! ```
//!
//! # Supplying Salts
//!
//! The sizing functions tell the caller how many salts to generate. Any
//! source of independent `u32` values will do:
//!
//! ```
//! use saltbloom::core::params::{filter_bits, salts_required};
//! use saltbloom::hash::Fnv32a;
//! use saltbloom::SaltedBloomFilter;
//!
//! let bits = filter_bits(1_000, 0.01).unwrap();
//! let k = salts_required(1_000, 0.01).unwrap();
//! assert_eq!((bits, k), (16_384, 11));
//!
//! let salts: Vec<u32> = (0..k as u32).map(|i| i.wrapping_mul(0x9e37_79b9)).collect();
//! let filter = SaltedBloomFilter::new(1_000, 0.01, Fnv32a, &salts).unwrap();
//! assert_eq!(filter.salt_count(), k);
//! ```
//!
//! # Capacity
//!
//! `insert` returns `false` from the call that brings the element counter to
//! the configured capacity onward. The filter keeps accepting keys, but the
//! configured false positive rate is no longer promised.
//!
//! # Concurrency
//!
//! `exists` takes `&self` and the hash primitives are stateless between
//! calls, so readers can share a filter freely. Writers need exclusive access,
//! typically through `Arc<RwLock<_>>`.
//!
//! # Feature Flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `xxhash` | yes | [`hash::Xxh32Hasher`] |
//! | `serde` | no | `Serialize`/`Deserialize` for config types, JSON config loading |
//! | `trace` | no | `tracing` events on construction, insert and lookup |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/saltbloom/0.1.0")]

/// Bit vector, sizing math and the filter trait
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Salted hash primitives
pub mod hash;

/// Type-state builder and plain-data configuration
pub mod builder;

pub use crate::error::{Result, SaltBloomError};

pub use crate::core::filter::BloomFilter;
pub use crate::core::params::{filter_bits, salts_required};

pub use crate::filters::SaltedBloomFilter;

pub use crate::builder::{FilterConfig, SaltedBloomFilterBuilder};

pub use crate::hash::{Fnv32, Fnv32a, Salt, SaltedHasher, StdBuildHasher};

#[cfg(feature = "xxhash")]
pub use crate::hash::Xxh32Hasher;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use saltbloom::prelude::*;
///
/// let mut filter = SaltedBloomFilterBuilder::new()
///     .capacity(1000)
///     .false_positive_rate(0.01)
///     .build()
///     .unwrap();
/// filter.insert(b"hello");
/// assert!(filter.exists(b"hello"));
/// ```
pub mod prelude {
    pub use crate::builder::{FilterConfig, SaltedBloomFilterBuilder};
    pub use crate::core::filter::BloomFilter;
    pub use crate::core::params::{filter_bits, salts_required};
    pub use crate::error::{Result, SaltBloomError};
    pub use crate::filters::SaltedBloomFilter;
    pub use crate::hash::{salts_from_seed, Fnv32, Fnv32a, Salt, SaltedHasher};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::Xxh32Hasher;
}
