//! Set algebra: intersection, union, symmetric difference, and difference.
//!
//! Each operation comes in three flavors:
//!
//! -   Pure: `a.and(&b)` returns a new set.
//! -   Destination: `d.set_and(&a, &b)` overwrites `d`, reusing its storage whenever sufficient.
//! -   In place: `a &= &b` overwrites the left operand, and `b.subtract_from(&a)` overwrites the right operand of a
//!     difference.
//!
//! Results are always in canonical form, and are sized exactly, so that no trimming pass is ever necessary.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::{
    collections::{DenseBitSet, bit_set_dense::store_failure},
    utils::{Word, WordStore},
};

//
//  Pure
//

impl DenseBitSet {
    /// Returns the intersection of `self` and `other`.
    ///
    /// ```
    /// use dense_bit_set::collections::DenseBitSet;
    ///
    /// let (a, b) = (DenseBitSet::from_elements(&[1, 2, 100]), DenseBitSet::from_elements(&[2, 3]));
    ///
    /// assert_eq!("{2}", a.and(&b).to_string());
    /// ```
    pub fn and(&self, other: &Self) -> Self {
        let mut result = Self::new();
        result.set_and(self, other);
        result
    }

    /// Returns the union of `self` and `other`.
    pub fn or(&self, other: &Self) -> Self {
        let mut result = Self::new();
        result.set_or(self, other);
        result
    }

    /// Returns the symmetric difference of `self` and `other`.
    pub fn xor(&self, other: &Self) -> Self {
        let mut result = Self::new();
        result.set_xor(self, other);
        result
    }

    /// Returns the elements of `self` which are not in `other`.
    pub fn and_not(&self, other: &Self) -> Self {
        let mut result = Self::new();
        result.set_and_not(self, other);
        result
    }
}

//
//  Destination
//

impl DenseBitSet {
    /// Sets `self` to the intersection of `a` and `b`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the result.
    #[track_caller]
    pub fn set_and(&mut self, a: &Self, b: &Self) -> &mut Self {
        let (a, b) = (a.words(), b.words());

        let words = reset(self.store_mut(), and_len(a, b));

        for ((d, a), b) in words.iter_mut().zip(a).zip(b) {
            *d = *a & *b;
        }

        self
    }

    /// Sets `self` to the union of `a` and `b`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the result.
    #[track_caller]
    pub fn set_or(&mut self, a: &Self, b: &Self) -> &mut Self {
        let (long, short) = by_len(a.words(), b.words());

        let words = reset(self.store_mut(), long.len());

        words.copy_from_slice(long);

        for (d, s) in words.iter_mut().zip(short) {
            *d |= *s;
        }

        self
    }

    /// Sets `self` to the symmetric difference of `a` and `b`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the result.
    #[track_caller]
    pub fn set_xor(&mut self, a: &Self, b: &Self) -> &mut Self {
        let (long, short) = by_len(a.words(), b.words());

        let len = xor_len(long, short);
        let words = reset(self.store_mut(), len);

        words.copy_from_slice(&long[..len]);

        for (d, s) in words.iter_mut().zip(short) {
            *d ^= *s;
        }

        self
    }

    /// Sets `self` to the elements of `a` which are not in `b`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the result.
    #[track_caller]
    pub fn set_and_not(&mut self, a: &Self, b: &Self) -> &mut Self {
        let (a, b) = (a.words(), b.words());

        let len = and_not_len(a, b);
        let words = reset(self.store_mut(), len);

        words.copy_from_slice(&a[..len]);

        for (d, b) in words.iter_mut().zip(b) {
            *d &= !*b;
        }

        self
    }
}

//
//  In place
//

impl DenseBitSet {
    /// Sets `self` to the elements of `minuend` which are not in `self`.
    ///
    /// This is the in place form of `minuend.and_not(self)`, complementing `self -= minuend`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the result.
    ///
    /// #   Examples
    ///
    /// ```
    /// use dense_bit_set::collections::DenseBitSet;
    ///
    /// let minuend = DenseBitSet::from_elements(&[1, 2, 100]);
    /// let mut set = DenseBitSet::from_elements(&[2, 3]);
    ///
    /// set.subtract_from(&minuend);
    ///
    /// assert_eq!("{1 100}", set.to_string());
    /// ```
    #[track_caller]
    pub fn subtract_from(&mut self, minuend: &Self) -> &mut Self {
        let minuend = minuend.words();

        let len = and_not_len(minuend, self.words());
        let store = self.store_mut();

        grow(store, len);

        for (d, m) in store.words_mut().iter_mut().zip(minuend) {
            *d = *m & !*d;
        }

        store.truncate(len);

        self
    }
}

impl BitAndAssign<&DenseBitSet> for DenseBitSet {
    fn bitand_assign(&mut self, rhs: &DenseBitSet) {
        let rhs = rhs.words();

        let len = and_len(self.words(), rhs);
        let store = self.store_mut();

        for (d, s) in store.words_mut().iter_mut().zip(rhs) {
            *d &= *s;
        }

        store.truncate(len);
    }
}

impl BitOrAssign<&DenseBitSet> for DenseBitSet {
    #[track_caller]
    fn bitor_assign(&mut self, rhs: &DenseBitSet) {
        let rhs = rhs.words();
        let store = self.store_mut();

        grow(store, rhs.len());

        for (d, s) in store.words_mut().iter_mut().zip(rhs) {
            *d |= *s;
        }
    }
}

impl BitXorAssign<&DenseBitSet> for DenseBitSet {
    #[track_caller]
    fn bitxor_assign(&mut self, rhs: &DenseBitSet) {
        let rhs = rhs.words();

        let (long, short) = by_len(self.words(), rhs);
        let len = xor_len(long, short);

        let store = self.store_mut();

        grow(store, rhs.len());

        for (d, s) in store.words_mut().iter_mut().zip(rhs) {
            *d ^= *s;
        }

        store.truncate(len);
    }
}

impl SubAssign<&DenseBitSet> for DenseBitSet {
    fn sub_assign(&mut self, rhs: &DenseBitSet) {
        let rhs = rhs.words();

        let len = and_not_len(self.words(), rhs);
        let store = self.store_mut();

        for (d, s) in store.words_mut().iter_mut().zip(rhs) {
            *d &= !*s;
        }

        store.truncate(len);
    }
}

impl BitAnd for &DenseBitSet {
    type Output = DenseBitSet;

    fn bitand(self, rhs: Self) -> DenseBitSet {
        self.and(rhs)
    }
}

impl BitOr for &DenseBitSet {
    type Output = DenseBitSet;

    fn bitor(self, rhs: Self) -> DenseBitSet {
        self.or(rhs)
    }
}

impl BitXor for &DenseBitSet {
    type Output = DenseBitSet;

    fn bitxor(self, rhs: Self) -> DenseBitSet {
        self.xor(rhs)
    }
}

impl Sub for &DenseBitSet {
    type Output = DenseBitSet;

    fn sub(self, rhs: Self) -> DenseBitSet {
        self.and_not(rhs)
    }
}

//
//  Implementation details
//
//  The `*_len` functions compute the length of the canonical result up-front, so that the destination is sized once.
//

//  Length of `a & b`.
fn and_len(a: &[Word], b: &[Word]) -> usize {
    last_nonzero(a.iter().zip(b).map(|(a, b)| *a & *b))
}

//  Length of `a & !b`.
fn and_not_len(a: &[Word], b: &[Word]) -> usize {
    //  The last word of `a` is non-zero, and unaffected.
    if a.len() > b.len() {
        return a.len();
    }

    last_nonzero(a.iter().zip(b).map(|(a, b)| *a & !*b))
}

//  Length of `long ^ short`, where `long` is at least as long as `short`.
fn xor_len(long: &[Word], short: &[Word]) -> usize {
    debug_assert!(long.len() >= short.len());

    //  The last word of `long` is non-zero, and unaffected.
    if long.len() > short.len() {
        return long.len();
    }

    last_nonzero(long.iter().zip(short).map(|(l, s)| *l ^ *s))
}

fn last_nonzero<I>(words: I) -> usize
where
    I: DoubleEndedIterator<Item = Word> + ExactSizeIterator,
{
    let len = words.len();

    words.rev().position(|w| !w.is_zero()).map_or(0, |from_back| len - from_back)
}

fn by_len<'a>(a: &'a [Word], b: &'a [Word]) -> (&'a [Word], &'a [Word]) {
    if a.len() >= b.len() { (a, b) } else { (b, a) }
}

#[track_caller]
fn reset(store: &mut WordStore, len: usize) -> &mut [Word] {
    if let Err(error) = store.reset_len(len) {
        store_failure(error);
    }

    store.words_mut()
}

#[track_caller]
fn grow(store: &mut WordStore, len: usize) {
    if let Err(error) = store.ensure_len(len) {
        store_failure(error);
    }
}

// mod tests
