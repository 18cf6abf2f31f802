//! Bloom filter implementations.
//!
//! - [`SaltedBloomFilter`] - fixed-size filter over byte keys, one salted
//!   32-bit digest per hash round
//!
//! # Examples
//!
//! ```
//! use saltbloom::filters::SaltedBloomFilter;
//! use saltbloom::hash::Fnv32;
//!
//! let mut filter = SaltedBloomFilter::with_salt_seed(10_000, 0.01, Fnv32, 0).unwrap();
//! filter.insert(b"hello");
//! assert!(filter.exists(b"hello"));
//! println!("fill: {:.4}", filter.fill_ratio());
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod salted;
pub use salted::SaltedBloomFilter;
