//  See `Word` type.
//
//  #   Why a dedicated type?
//
//  Bundling methods on an existing type is possible only by "extension" traits, which then require the user to have
//  these traits in scope to invoke them.
//
//  A dedicated type, on top of avoiding type confusion, is more ergonomic as inherent methods can just be called
//  without any hassle.
//
//
//  #   Why `u64`?
//
//  Since 32-bits & 64-bits CPUs tend to support `u64` natively, and those compose the bulk of platforms targetted by
//  Rust developers, `u64` is the largest well supported type, and the one offering the most bit-level parallelism.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A word of bits.
///
/// Bit `i` of the word at index `w` represents the element `64 * w + i` of a set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Word(pub u64);

/// The index of a word, in a sequence of words.
///
/// #   Why `usize`?
///
/// In Rust, all slices are indexed by a `usize`, and the `WordIndex` will be used nigh exclusively as an index in
/// slices.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct WordIndex(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than 64. No index created by `Word::split`
/// will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking a `BitIndex` will panic if its value is strictly greater than 63.
///
/// In Release, any high bit will be ignored (masked away).
///
/// #   Why `u32`?
///
/// In Rust, all shift operations take a `u32` as their right-hand argument.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct BitIndex(pub u32);

//
//  Constants.
//

impl Word {
    /// Number of bits in a word.
    pub const BITS: u64 = 64;

    /// An all-zeros word.
    pub const ZERO: Self = Self(0);

    /// An all-ones word.
    pub const ONES: Self = Self(!0);

    /// Index of the highest bit of a word.
    pub const HIGHEST_BIT: BitIndex = BitIndex(Self::BITS as u32 - 1);
}

//
//  Static operations.
//

impl Word {
    /// Splits a key into a word-index/bit-index pair.
    ///
    /// Returns None if the `key` is too large for the word-index part. This will never happen on 64-bits platforms --
    /// ie, platforms on which `usize` is 64-bits.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::Word;
    /// let (word, bit) = Word::split(133).expect("no overflow");
    ///
    /// assert_eq!(2, word.0);
    /// assert_eq!(5, bit.0);
    /// ```
    #[inline]
    pub const fn split(key: u64) -> Option<(WordIndex, BitIndex)> {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let word = key / Self::BITS;
        let bit = key % Self::BITS;

        if word as usize as u64 != word {
            return None;
        }

        Some((WordIndex(word as _), BitIndex(bit as _)))
    }

    /// Fuses a word-index/bit-index pair into a key.
    ///
    /// Returns None if the word-index is too large for the key.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::{BitIndex, Word, WordIndex};
    /// assert_eq!(Some(133), Word::fuse(WordIndex(2), BitIndex(5)));
    /// ```
    #[inline]
    pub const fn fuse(word: WordIndex, bit: BitIndex) -> Option<u64> {
        debug_assert!(bit.0 < Self::BITS as _);

        if word.0 as u64 as usize != word.0 {
            return None;
        }

        let Some(key) = (word.0 as u64).checked_mul(Self::BITS) else {
            return None;
        };

        //  Mask to ensure the addition doesn't overflow.
        Some(key + (bit.0 as u64 % Self::BITS))
    }

    /// Returns the key of the lowest bit of the word at `word`.
    ///
    /// The word is expected to be the index of an allocated word, for which no overflow may occur.
    #[inline]
    pub const fn first_key(word: WordIndex) -> u64 {
        word.0 as u64 * Self::BITS
    }

    /// Returns a word whose bits `low` to `high`, both inclusive, are set.
    ///
    /// #   Panics
    ///
    /// In Debug, if `low > high`, or if either is out of bounds.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::{BitIndex, Word};
    /// assert_eq!(Word(0b0111_0000), Word::range(BitIndex(4), BitIndex(6)));
    /// assert_eq!(Word::ONES, Word::range(BitIndex(0), BitIndex(63)));
    /// ```
    #[inline]
    pub const fn range(low: BitIndex, high: BitIndex) -> Self {
        debug_assert!(low.0 <= high.0);
        debug_assert!(high.0 < Self::BITS as _);

        let highest = Self::HIGHEST_BIT.0;

        let width = (high.0 - low.0) % Self::BITS as u32;
        let low = low.0 % Self::BITS as u32;

        Self(!0u64 >> (highest - width) << low)
    }
}

// mod static_tests

//
//  Bit operations.
//

impl Word {
    /// Returns whether no bit is set.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::Word;
    /// assert_eq!(0, Word::ZERO.count());
    /// assert_eq!(64, Word::ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `BitIndex`.
    #[inline]
    pub const fn is_set(&self, bit: BitIndex) -> bool {
        (self.0 & Self::bit_mask(bit)) != 0
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::{BitIndex, Word};
    /// let mut word = Word(0b1001);
    ///
    /// assert!(!word.set(BitIndex(0)));
    /// assert!(word.set(BitIndex(2)));
    ///
    /// assert_eq!(0b1101, word.0);
    /// ```
    #[inline]
    pub const fn set(&mut self, bit: BitIndex) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) == 0;

        self.0 |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::{BitIndex, Word};
    /// let mut word = Word(0b1001);
    ///
    /// assert!(word.reset(BitIndex(0)));
    /// assert!(!word.reset(BitIndex(2)));
    ///
    /// assert_eq!(0b1000, word.0);
    /// ```
    #[inline]
    pub const fn reset(&mut self, bit: BitIndex) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) != 0;

        self.0 &= !mask;

        result
    }
}

// mod bit_tests

//
//  Query operations.
//

impl Word {
    /// Returns the index of the lowest set bit, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::{BitIndex, Word};
    /// assert_eq!(None, Word::ZERO.lowest());
    /// assert_eq!(Some(BitIndex(3)), Word(0b1000_1000).lowest());
    /// ```
    #[inline]
    pub const fn lowest(&self) -> Option<BitIndex> {
        if self.0 == 0 {
            return None;
        }

        Some(BitIndex(self.0.trailing_zeros()))
    }

    /// Returns the index of the highest set bit, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use dense_bit_set::utils::{BitIndex, Word};
    /// assert_eq!(None, Word::ZERO.highest());
    /// assert_eq!(Some(BitIndex(7)), Word(0b1000_1000).highest());
    /// ```
    #[inline]
    pub const fn highest(&self) -> Option<BitIndex> {
        if self.0 == 0 {
            return None;
        }

        Some(BitIndex(Self::HIGHEST_BIT.0 - self.0.leading_zeros()))
    }

    /// Returns the bits of `self` strictly above `bit`.
    #[inline]
    pub const fn above(&self, bit: BitIndex) -> Self {
        //  Shifting by 64 is an overflow, hence the two steps.
        let mask = !0u64 << Self::bit_shift(bit) << 1;

        Self(self.0 & mask)
    }

    /// Returns the bits of `self` strictly below `bit`.
    #[inline]
    pub const fn below(&self, bit: BitIndex) -> Self {
        let mask = Self::bit_mask(bit) - 1;

        Self(self.0 & mask)
    }
}

// mod query_tests

//
//  Bitwise traits.
//

impl BitAndAssign for Word {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for Word {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for Word {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOr for Word {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitXorAssign for Word {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXor for Word {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl Not for Word {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

#[cfg(test)]
mod bitwise_tests {
    use super::*;

    const LEFT: Word = Word(0b1001);
    const RIGHT: Word = Word(0b0001_1000);

    #[test]
    fn bit_and() {
        assert_eq!(Word(0b1000), LEFT & RIGHT);
    }

    #[test]
    fn bit_or() {
        assert_eq!(Word(0b0001_1001), LEFT | RIGHT);
    }

    #[test]
    fn bit_xor() {
        assert_eq!(Word(0b0001_0001), LEFT ^ RIGHT);
    }

    #[test]
    fn bit_and_not() {
        assert_eq!(Word(0b0001), LEFT & !RIGHT);
        assert_eq!(Word::ONES, !Word::ZERO);
    }
} // mod bitwise_tests

//
//  Implementation details
//

impl Word {
    //  Shift of the bit.
    #[inline]
    const fn bit_shift(bit: BitIndex) -> u32 {
        debug_assert!(bit.0 < Self::BITS as _);

        //  Mask to ensure the shift doesn't overflow.
        bit.0 % Self::BITS as u32
    }

    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: BitIndex) -> u64 {
        1 << Self::bit_shift(bit)
    }
}
