//! Packed bit vector backed by 32-bit words.
//!
//! # Memory Layout
//!
//! Bits are packed into `u32` words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 31]
//! Word 1: [bit 32][bit 33]...[bit 63]
//! ```
//!
//! `word = index / 32`, `bit = index % 32`, `words = ⌈len / 32⌉`.
//!
//! # Bounds
//!
//! [`get`](BitVec::get), [`set`](BitVec::set) and [`clear_bit`](BitVec::clear_bit)
//! treat an index `>= len` as a caller bug and panic, like slice indexing.
//! The `try_*` variants return [`SaltBloomError::IndexOutOfBounds`] instead.
//!
//! # Examples
//!
//! ```
//! use saltbloom::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! ```

use crate::error::{Result, SaltBloomError};

/// Width of one storage word in bits.
pub const WORD_BITS: usize = u32::BITS as usize;

/// Fixed-length bit array packed into `u32` words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Box<[u32]>,
    len: usize,
}

impl BitVec {
    /// Create a bit vector of `num_bits` cells, all zero.
    ///
    /// # Errors
    ///
    /// Returns [`SaltBloomError::InvalidFilterSize`] if `num_bits == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(1000).unwrap();
    /// assert_eq!(bv.len(), 1000);
    /// assert_eq!(bv.word_count(), 32);
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(SaltBloomError::invalid_filter_size(0));
        }

        let word_count = (num_bits + WORD_BITS - 1) / WORD_BITS;

        Ok(Self {
            words: vec![0u32; word_count].into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of bit cells.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed vector; kept for API symmetry.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of `u32` storage words.
    #[must_use]
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u32) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        (index / WORD_BITS, 1u32 << (index % WORD_BITS))
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(SaltBloomError::index_out_of_bounds(index, self.len));
        }
        Ok(())
    }

    /// Read a cell.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    /// Set a cell to 1. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::bitvec::BitVec;
    ///
    /// let mut bv = BitVec::new(64).unwrap();
    /// bv.set(10);
    /// bv.set(10);
    /// assert_eq!(bv.count_ones(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize) {
        let (word, mask) = self.locate(index);
        self.words[word] |= mask;
    }

    /// Set a cell to 0. Idempotent.
    ///
    /// Filters built on this vector never call it; it exists for callers
    /// using the vector directly.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn clear_bit(&mut self, index: usize) {
        let (word, mask) = self.locate(index);
        self.words[word] &= !mask;
    }

    /// Checked [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`SaltBloomError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.get(index))
    }

    /// Checked [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`SaltBloomError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_set(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.set(index);
        Ok(())
    }

    /// Checked [`clear_bit`](Self::clear_bit).
    ///
    /// # Errors
    ///
    /// Returns [`SaltBloomError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_clear_bit(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.clear_bit(index);
        Ok(())
    }

    /// Number of cells set to 1.
    ///
    /// Only the first `len` cells are stored as ones, so the trailing padding
    /// of the last word never contributes.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the indices of set cells in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_idx, &word)| {
                (0..WORD_BITS)
                    .filter(move |&bit| word & (1u32 << bit) != 0)
                    .map(move |bit| word_idx * WORD_BITS + bit)
            })
    }

    /// Heap bytes used by the word storage.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u32>()
    }

    /// Raw storage words.
    #[must_use]
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }
}
