//! Core building blocks shared by the filter.
//!
//! ```text
//! core/
//! ├── filter.rs    - BloomFilter trait
//! ├── bitvec.rs    - Packed 32-bit-word bit vector
//! ├── params.rs    - Sizing (bit count, salt count)
//! └── mod.rs       - This file
//! ```
//!
//! # Using Parameter Calculations
//!
//! ```
//! use saltbloom::core::params::{filter_bits, salts_required};
//!
//! let m = filter_bits(10_000, 0.01).unwrap();
//! let k = salts_required(10_000, 0.01).unwrap();
//! println!("Need {} bits and {} salts", m, k);
//! ```
//!
//! # Using BitVec Directly
//!
//! ```
//! use saltbloom::core::BitVec;
//!
//! let mut bv = BitVec::new(1000).unwrap();
//! bv.set(42);
//! bv.set(999);
//! assert!(bv.get(42));
//! assert_eq!(bv.count_ones(), 2);
//! ```

pub mod bitvec;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use filter::BloomFilter;
pub use params::{
    calculate_filter_params, expected_fp_rate, filter_bits, salts_required, FilterParams,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_and_bitvec_together() {
        let params = calculate_filter_params(1000, 0.01).unwrap();
        let bv = BitVec::new(params.bit_count).unwrap();

        assert_eq!(bv.len(), 16_384);
        assert_eq!(bv.word_count(), 512);
        assert_eq!(bv.memory_usage(), params.memory_bytes());
    }

    #[test]
    fn test_bitvec_basic_operations() {
        let mut bv = BitVec::new(filter_bits(10, 0.1).unwrap()).unwrap();
        bv.set(42);
        bv.set(100);
        bv.set(1023);

        assert!(bv.get(42));
        assert!(bv.get(1023));
        assert!(!bv.get(43));
        assert_eq!(bv.count_ones(), 3);
    }
}
