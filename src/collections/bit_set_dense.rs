//! Dynamically sized, dense, implementation of a bit set.

use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    ptr,
};

use crate::{
    api::{BitKey, BitSet, StoreError},
    collections::Iter,
    utils::{BitIndex, Word, WordIndex, WordStore, visit_word},
};

/// Dynamically sized, dense, implementation of a bit set.
///
/// The set occupies roughly `n` bits, where `n` is its maximum element.
///
/// #   Canonical form
///
/// The last word of the set, if any, is never all-zeros. Every mutation restores this form before returning.
///
/// #   Examples
///
/// ```
/// use dense_bit_set::collections::DenseBitSet;
///
/// let mut set = DenseBitSet::from_elements(&[100, 200, 300]);
///
/// set.delete(200).add(-1);
///
/// assert_eq!("{100 300}", set.to_string());
/// assert_eq!(Some(300), set.next(100));
/// assert_eq!(Some(100), set.prev(300));
/// ```
#[derive(Default)]
pub struct DenseBitSet {
    store: WordStore,
}

//
//  Creation
//

impl DenseBitSet {
    /// Creates a new, empty, set.
    pub const fn new() -> Self {
        Self { store: WordStore::new() }
    }

    /// Creates a new set with the given elements.
    ///
    /// Elements without a key, ie negative integers, are ignored. The storage is sized exactly for the maximum element.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    pub fn from_elements<K>(elements: &[K]) -> Self
    where
        K: BitKey,
    {
        let mut result = Self::new();

        let Some(max) = elements.iter().filter_map(|e| e.into_key()).max() else {
            return result;
        };

        if let Err(error) = locate(max).and_then(|(_, _, len)| result.store.reset_len(len)) {
            store_failure(error);
        }

        let words = result.store.words_mut();

        for key in elements.iter().filter_map(|e| e.into_key()) {
            //  All keys are at most `max`, which was successfully located.
            if let Some((of_word, in_word)) = Word::split(key) {
                words[of_word.0].set(in_word);
            }
        }

        result
    }

    /// Creates a new set from its raw words, word `i` holding the elements `64 * i` to `64 * i + 63`.
    ///
    /// Trailing zero words are trimmed.
    pub fn from_words(words: Vec<u64>) -> Self {
        let store = WordStore::from_words(words.into_iter().map(Word).collect());

        Self { store }
    }
}

//
//  Query
//

impl DenseBitSet {
    /// Returns the underlying words, in canonical form.
    pub fn words(&self) -> &[Word] {
        self.store.words()
    }

    /// Returns the number of words the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns whether the set is empty.
    ///
    /// Unlike `len`, this is O(1).
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the number of elements in the set.
    ///
    /// This scans the entire set.
    pub fn len(&self) -> usize {
        self.store.words().iter().map(Word::count).sum()
    }

    /// Returns whether the set contains the element, or not.
    pub fn contains<K>(&self, element: K) -> bool
    where
        K: BitKey,
    {
        let Some((of_word, in_word)) = element.into_key().and_then(Word::split) else {
            return false;
        };

        self.store.get(of_word).is_set(in_word)
    }

    /// Returns whether every element of `self` is also an element of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }

        let (mine, theirs) = (self.store.words(), other.store.words());

        mine.len() <= theirs.len() && mine.iter().zip(theirs).all(|(m, t)| (*m & !*t).is_zero())
    }

    /// Returns the maximum element of the set.
    ///
    /// #   Panics
    ///
    /// If the set is empty, as the maximum of an empty set is undefined. See `last` for a non-panicking alternative.
    #[track_caller]
    pub fn max(&self) -> u64 {
        #[cold]
        #[track_caller]
        fn panic() -> ! {
            panic!("max is undefined for an empty set");
        }

        self.last().unwrap_or_else(|| panic())
    }

    /// Returns the maximum element of the set, if any.
    pub fn last(&self) -> Option<u64> {
        let of_word = self.store.last()?;
        let in_word = self.store.get(of_word).highest()?;

        Word::fuse(of_word, in_word)
    }

    /// Returns the smallest element strictly greater than `after`, if any.
    ///
    /// If `after` has no key, ie is negative, returns the smallest element of the set.
    pub fn next<K>(&self, after: K) -> Option<u64>
    where
        K: BitKey,
    {
        let words = self.store.words();

        let (mut index, mut word) = match after.into_key() {
            None => (0, *words.first()?),
            Some(key) => {
                let (of_word, in_word) = Word::split(key)?;

                (of_word.0, words.get(of_word.0)?.above(in_word))
            }
        };

        while word.is_zero() {
            index += 1;
            word = *words.get(index)?;
        }

        Word::fuse(WordIndex(index), word.lowest()?)
    }

    /// Returns the largest element strictly less than `before`, if any.
    ///
    /// If `before` has no key, ie is negative, returns None.
    ///
    /// If `before` is greater than the maximum of the set, returns the maximum, whichever how far beyond it is.
    pub fn prev<K>(&self, before: K) -> Option<u64>
    where
        K: BitKey,
    {
        let key = before.into_key()?;
        let max = self.last()?;

        if key > max {
            return Some(max);
        }

        //  `key` is at most `max`, and thus within the words.
        let (of_word, in_word) = Word::split(key)?;

        let words = self.store.words();

        let mut index = of_word.0;
        let mut word = words.get(index)?.below(in_word);

        while word.is_zero() {
            index = index.checked_sub(1)?;
            word = *words.get(index)?;
        }

        Word::fuse(WordIndex(index), word.highest()?)
    }

    /// Returns an iterator over the elements of the set, in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.store.words())
    }

    /// Calls `visitor` with each element of the set, in ascending order.
    ///
    /// If `visitor` returns `true`, the visit stops immediately, skipping any remaining elements, and returns `true`.
    /// Otherwise, returns `false` once all elements have been visited.
    pub fn visit<F>(&self, mut visitor: F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        for (index, word) in self.store.words().iter().enumerate() {
            if visit_word(Word::first_key(WordIndex(index)), *word, &mut visitor) {
                return true;
            }
        }

        false
    }

    /// Calls `visitor` with the set and each of its elements, in ascending order.
    ///
    /// `visitor` may remove the element it is called with, or any smaller element, from the set. The visit is
    /// unaffected. Any other modification leads to an unspecified, though safe, sequence of elements being visited.
    ///
    /// If `visitor` returns `true`, the visit stops immediately, skipping any remaining elements, and returns `true`.
    /// Otherwise, returns `false` once all elements have been visited.
    pub fn visit_mut<F>(&mut self, mut visitor: F) -> bool
    where
        F: FnMut(&mut Self, u64) -> bool,
    {
        let mut index = 0;

        //  The word is copied before visiting it, and words are re-read after each visit, as `visitor` may shrink the
        //  set.
        while let Some(word) = self.store.words().get(index).copied() {
            let first_key = Word::first_key(WordIndex(index));

            if visit_word(first_key, word, &mut |key| visitor(self, key)) {
                return true;
            }

            index += 1;
        }

        false
    }
}

//
//  Mutation
//

impl DenseBitSet {
    /// Inserts an element in the set.
    ///
    /// Elements without a key, ie negative integers, are ignored.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the element. See `try_add` for a non-panicking alternative.
    #[track_caller]
    pub fn add<K>(&mut self, element: K) -> &mut Self
    where
        K: BitKey,
    {
        if let Err(error) = self.try_add(element) {
            store_failure(error);
        }

        self
    }

    /// Inserts an element in the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if the element was successfully inserted.
    /// -   `Ok(false)`: if the element was already present, or has no key.
    /// -   `Err(_)`: if the storage could not grow to accommodate the element, in which case the set is unchanged.
    pub fn try_add<K>(&mut self, element: K) -> Result<bool, StoreError>
    where
        K: BitKey,
    {
        let Some(key) = element.into_key() else {
            return Ok(false);
        };

        let (of_word, in_word, len) = locate(key)?;

        self.store.ensure_len(len)?;

        Ok(self.store.words_mut()[of_word.0].set(in_word))
    }

    /// Removes an element from the set, returning whether it is newly removed or not.
    pub fn remove<K>(&mut self, element: K) -> bool
    where
        K: BitKey,
    {
        let Some((of_word, in_word)) = element.into_key().and_then(Word::split) else {
            return false;
        };

        let Some(word) = self.store.words_mut().get_mut(of_word.0) else {
            return false;
        };

        if !word.reset(in_word) {
            return false;
        }

        self.store.trim();

        true
    }

    /// Removes an element from the set.
    ///
    /// Elements without a key, or beyond the maximum of the set, are ignored.
    pub fn delete<K>(&mut self, element: K) -> &mut Self
    where
        K: BitKey,
    {
        self.remove(element);

        self
    }

    /// Inserts all elements from `start` (inclusive) to `end` (exclusive).
    ///
    /// `start` is clamped to 0. Nothing happens if `end < 1` or `start >= end`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate the range. See `try_add_range` for a non-panicking alternative.
    #[track_caller]
    pub fn add_range<K>(&mut self, start: K, end: K) -> &mut Self
    where
        K: BitKey,
    {
        if let Err(error) = self.try_add_range(start, end) {
            store_failure(error);
        }

        self
    }

    /// Inserts all elements from `start` (inclusive) to `end` (exclusive).
    ///
    /// `start` is clamped to 0. Nothing happens if `end < 1` or `start >= end`.
    ///
    /// On error, the set is unchanged.
    pub fn try_add_range<K>(&mut self, start: K, end: K) -> Result<(), StoreError>
    where
        K: BitKey,
    {
        let Some((start, last)) = clamp_range(start, end) else {
            return Ok(());
        };

        let (low, low_bit, _) = locate(start)?;
        let (high, high_bit, len) = locate(last)?;

        //  Grow once, then fill.
        self.store.ensure_len(len)?;

        let words = self.store.words_mut();

        if low == high {
            words[low.0] |= Word::range(low_bit, high_bit);
            return Ok(());
        }

        words[low.0] |= Word::range(low_bit, Word::HIGHEST_BIT);
        words[low.0 + 1..high.0].fill(Word::ONES);
        words[high.0] |= Word::range(BitIndex(0), high_bit);

        Ok(())
    }

    /// Removes all elements from `start` (inclusive) to `end` (exclusive).
    ///
    /// `start` is clamped to 0. Nothing happens if `end < 1` or `start >= end`.
    pub fn delete_range<K>(&mut self, start: K, end: K) -> &mut Self
    where
        K: BitKey,
    {
        let Some((start, last)) = clamp_range(start, end) else {
            return self;
        };

        let Some(last_word) = self.store.last() else {
            return self;
        };

        let Some((low, low_bit)) = Word::split(start).filter(|(low, _)| *low <= last_word) else {
            return self;
        };

        //  Clamp the top of the range to the words.
        let (high, high_bit) = match Word::split(last) {
            Some((high, high_bit)) if high <= last_word => (high, high_bit),
            _ => (last_word, Word::HIGHEST_BIT),
        };

        let words = self.store.words_mut();

        if low == high {
            words[low.0] &= !Word::range(low_bit, high_bit);
        } else {
            words[low.0] &= !Word::range(low_bit, Word::HIGHEST_BIT);
            words[low.0 + 1..high.0].fill(Word::ZERO);
            words[high.0] &= !Word::range(BitIndex(0), high_bit);
        }

        self.store.trim();

        self
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.store.truncate(0);
    }

    /// Sets `self` to a copy of `other`.
    ///
    /// The existing storage of `self` is reused whenever sufficient.
    ///
    /// #   Panics
    ///
    /// If the storage cannot grow to accommodate `other`.
    #[track_caller]
    pub fn set_from(&mut self, other: &Self) -> &mut Self {
        let source = other.store.words();

        if let Err(error) = self.store.reset_len(source.len()) {
            store_failure(error);
        }

        self.store.words_mut().copy_from_slice(source);

        self
    }

    //  Storage, for the set algebra.
    pub(crate) fn store_mut(&mut self) -> &mut WordStore {
        &mut self.store
    }
}

//
//  BitSet (trait)
//

impl BitSet for DenseBitSet {
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn contains<K>(&self, element: K) -> bool
    where
        K: BitKey,
    {
        self.contains(element)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn insert<K>(&mut self, element: K) -> Result<bool, StoreError>
    where
        K: BitKey,
    {
        self.try_add(element)
    }

    fn remove<K>(&mut self, element: K) -> bool
    where
        K: BitKey,
    {
        self.remove(element)
    }
}

//
//  Common traits
//

impl Clone for DenseBitSet {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.set_from(source);
    }
}

impl fmt::Debug for DenseBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DenseBitSet {
    /// Lists the elements in ascending order, within braces, separated by spaces.
    ///
    /// Runs of at least three consecutive elements from `a` to `b` are listed as `a..b`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("{")?;

        let mut iter = self.iter().peekable();
        let mut separator = "";

        while let Some(first) = iter.next() {
            let mut last = first;

            while let Some(next) = iter.next_if(|&next| Some(next) == last.checked_add(1)) {
                last = next;
            }

            match last - first {
                0 => write!(f, "{separator}{first}")?,
                1 => write!(f, "{separator}{first} {last}")?,
                _ => write!(f, "{separator}{first}..{last}")?,
            }

            separator = " ";
        }

        f.write_str("}")
    }
}

impl Eq for DenseBitSet {}

impl Hash for DenseBitSet {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.store.words().hash(state);
    }
}

impl PartialEq for DenseBitSet {
    fn eq(&self, other: &Self) -> bool {
        //  Canonical form guarantees a unique representation.
        ptr::eq(self, other) || self.store.words() == other.store.words()
    }
}

impl<K> Extend<K> for DenseBitSet
where
    K: BitKey,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for element in iter {
            self.add(element);
        }
    }
}

impl<K> FromIterator<K> for DenseBitSet
where
    K: BitKey,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut result = Self::new();

        result.extend(iter);

        result
    }
}

impl<'a> IntoIterator for &'a DenseBitSet {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
//  Serde
//

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::vec::Vec;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::DenseBitSet;

    impl Serialize for DenseBitSet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.words().iter().map(|word| word.0))
        }
    }

    impl<'de> Deserialize<'de> for DenseBitSet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<u64>::deserialize(deserializer).map(DenseBitSet::from_words)
        }
    }
} // mod serde_impl

//
//  Implementation details
//

//  Splits `key`, and computes the number of words required to hold it.
fn locate(key: u64) -> Result<(WordIndex, BitIndex, usize), StoreError> {
    let (of_word, in_word) = Word::split(key).ok_or(StoreError::CapacityOverflow)?;

    let len = of_word.0.checked_add(1).ok_or(StoreError::CapacityOverflow)?;

    Ok((of_word, in_word, len))
}

//  Returns the first and last keys of the range, with `start` clamped to 0, or None if the range is empty.
fn clamp_range<K>(start: K, end: K) -> Option<(u64, u64)>
where
    K: BitKey,
{
    let end = end.into_key().filter(|end| *end >= 1)?;
    let start = start.into_key().unwrap_or(0);

    (start < end).then(|| (start, end - 1))
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn store_failure(error: StoreError) -> ! {
    panic!("cannot grow bit set storage: {error}");
}

// mod creation_tests

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn contains() {
        let cases: &[(&[i64], i64, bool)] = &[
            (&[], -1, false),
            (&[], 1, false),
            (&[], 100, false),
            (&[-1], -1, false),
            (&[0], 0, true),
            (&[1], 0, false),
            (&[1], 1, true),
            (&[1], 100, false),
            (&[65], 1, false),
            (&[65], 65, true),
            (&[65], 100, false),
            (&[1, 2, 3], 0, false),
            (&[1, 2, 3], 2, true),
            (&[1, 2, 3], 4, false),
            (&[100, 200, 300], 200, true),
            (&[100, 200, 300], 400, false),
        ];

        for &(elements, element, expected) in cases {
            let set = DenseBitSet::from_elements(elements);

            assert_eq!(expected, set.contains(element), "{set}.contains({element})");
        }
    }

    #[test]
    fn equal_subset() {
        let cases: &[(&[i64], &[i64], bool, bool)] = &[
            (&[], &[], true, true),
            (&[1], &[1], true, true),
            (&[64], &[64], true, true),
            (&[100, 200, 300], &[100, 200, 300], true, true),
            (&[], &[1], false, true),
            (&[1], &[], false, false),
            (&[1], &[2], false, false),
            (&[], &[65], false, true),
            (&[65], &[], false, false),
            (&[1], &[65], false, false),
            (&[1, 2, 3], &[100, 200, 300], false, false),
            (&[1], &[1, 2, 3], false, true),
            (&[1, 2, 3], &[1], false, false),
            (&[100], &[100, 200, 300], false, true),
            (&[100, 200, 300], &[100], false, false),
        ];

        for &(left, right, equal, subset) in cases {
            let (left, right) = (DenseBitSet::from_elements(left), DenseBitSet::from_elements(right));

            assert_eq!(equal, left == right, "{left} == {right}");
            assert_eq!(subset, left.is_subset(&right), "{left}.is_subset({right})");
        }
    }

    #[test]
    fn equal_subset_identity() {
        let set = DenseBitSet::from_elements(&[1, 100]);

        assert_eq!(set, set);
        assert!(set.is_subset(&set));
    }

    #[test]
    fn max() {
        assert_eq!(0, DenseBitSet::from_elements(&[0]).max());
        assert_eq!(65, DenseBitSet::from_elements(&[65]).max());
        assert_eq!(3, DenseBitSet::from_elements(&[1, 2, 3]).max());
        assert_eq!(300, DenseBitSet::from_elements(&[100, 200, 300]).max());
    }

    #[test]
    #[should_panic(expected = "max is undefined for an empty set")]
    fn max_empty() {
        DenseBitSet::new().max();
    }

    #[test]
    fn last() {
        assert_eq!(None, DenseBitSet::new().last());
        assert_eq!(Some(127), DenseBitSet::from_elements(&[3, 127]).last());
    }

    #[test]
    fn len() {
        assert_eq!(0, DenseBitSet::new().len());
        assert_eq!(0, DenseBitSet::from_elements(&[-1]).len());
        assert_eq!(1, DenseBitSet::from_elements(&[64]).len());
        assert_eq!(3, DenseBitSet::from_elements(&[100, 200, 300]).len());
        assert_eq!(64, DenseBitSet::new().add_range(0, 64).len());
        assert_eq!(63, DenseBitSet::new().add_range(1, 64).len());
        assert_eq!(63, DenseBitSet::new().add_range(0, 63).len());
    }

    #[test]
    fn is_empty() {
        assert!(DenseBitSet::new().is_empty());
        assert!(DenseBitSet::from_elements(&[-1]).is_empty());
        assert!(DenseBitSet::new().add_range(-10, 0).is_empty());

        assert!(!DenseBitSet::from_elements(&[1]).is_empty());
        assert!(!DenseBitSet::from_elements(&[65]).is_empty());
    }

    #[test]
    fn next_prev() {
        const NONE: Option<u64> = None;

        let cases: &[(&[i64], i64, Option<u64>, Option<u64>)] = &[
            (&[], 1, NONE, NONE),
            (&[], 0, NONE, NONE),
            (&[], -1, NONE, NONE),
            (&[1], -1, Some(1), NONE),
            (&[1], 0, Some(1), NONE),
            (&[1], 1, NONE, NONE),
            (&[1], 2, NONE, Some(1)),
            (&[0, 2], -1, Some(0), NONE),
            (&[0, 2], 0, Some(2), NONE),
            (&[0, 2], 1, Some(2), Some(0)),
            (&[0, 2], 2, NONE, Some(0)),
            (&[0, 2], 3, NONE, Some(2)),
            (&[63, 64], 62, Some(63), NONE),
            (&[63, 64], 63, Some(64), NONE),
            (&[63, 64], 64, NONE, Some(63)),
            (&[63, 64], 65, NONE, Some(64)),
            (&[100, 300], i64::MIN, Some(100), NONE),
            (&[100, 300], -1, Some(100), NONE),
            (&[100, 300], 0, Some(100), NONE),
            (&[100, 300], 99, Some(100), NONE),
            (&[100, 300], 100, Some(300), NONE),
            (&[100, 300], 101, Some(300), Some(100)),
            (&[100, 300], 299, Some(300), Some(100)),
            (&[100, 300], 300, NONE, Some(100)),
            (&[100, 300], 301, NONE, Some(300)),
            (&[100, 300], 400, NONE, Some(300)),
            (&[100, 300], i64::MAX, NONE, Some(300)),
        ];

        for &(elements, m, next, prev) in cases {
            let set = DenseBitSet::from_elements(elements);

            assert_eq!(next, set.next(m), "{set}.next({m})");
            assert_eq!(prev, set.prev(m), "{set}.prev({m})");
        }
    }

    #[test]
    fn next_prev_unsigned() {
        let set = DenseBitSet::from_elements(&[100u64, 300]);

        assert_eq!(None, set.next(u64::MAX));
        assert_eq!(Some(300), set.prev(u64::MAX));
    }

    #[test]
    fn visit() {
        let cases: &[(&[i64], &[u64])] = &[
            (&[], &[]),
            (&[0], &[0]),
            (&[1, 2, 3, 62, 63, 64], &[1, 2, 3, 62, 63, 64]),
            (&[1, 22, 333, 4444], &[1, 22, 333, 4444]),
        ];

        for &(elements, expected) in cases {
            let set = DenseBitSet::from_elements(elements);

            let mut visited = Vec::new();

            let aborted = set.visit(|n| {
                visited.push(n);
                false
            });

            assert!(!aborted, "{set}");
            assert_eq!(expected, visited, "{set}");

            let mut deleting = set.clone();
            let mut visited = Vec::new();

            let aborted = deleting.visit_mut(|set, n| {
                set.delete_range(0, n + 1);
                visited.push(n);
                false
            });

            assert!(!aborted, "{set}");
            assert_eq!(expected, visited, "{set}");
            assert!(deleting.is_empty(), "{deleting}");
            assert_canonical(&deleting);
        }
    }

    #[test]
    fn visit_abort() {
        let set = DenseBitSet::from_elements(&[1, 2]);

        let mut count = 0;

        let aborted = set.visit(|n| {
            count += 1;
            n == 1
        });

        assert!(aborted);
        assert_eq!(1, count);

        let mut count = 0;

        let aborted = set.visit(|_| {
            count += 1;
            false
        });

        assert!(!aborted);
        assert_eq!(2, count);
    }

    #[test]
    fn visit_mut_delete_current() {
        let mut set = DenseBitSet::new();
        set.add_range(0, 200);

        let mut visited = 0;

        set.visit_mut(|set, n| {
            visited += 1;
            set.delete(n);
            false
        });

        assert_eq!(200, visited);
        assert!(set.is_empty());
    }

    #[test]
    fn display() {
        let cases: &[(&[i64], &str)] = &[
            (&[], "{}"),
            (&[-1], "{}"),
            (&[1], "{1}"),
            (&[1, -1], "{1}"),
            (&[1, 2], "{1 2}"),
            (&[1, 3], "{1 3}"),
            (&[0, 2, 3], "{0 2 3}"),
            (&[0, 1, 3], "{0 1 3}"),
            (&[0, 2, 3, 5], "{0 2 3 5}"),
            (&[0, 1, 2, 4, 5], "{0..2 4 5}"),
            (&[0, 1, 2, 3, 5, 7, 8, 9], "{0..3 5 7..9}"),
            (&[62, 63, 64, 65], "{62..65}"),
            (&[65], "{65}"),
            (&[100, 200, 300], "{100 200 300}"),
        ];

        for &(elements, expected) in cases {
            assert_eq!(expected, DenseBitSet::from_elements(elements).to_string(), "{elements:?}");
        }
    }

    #[test]
    fn debug() {
        assert_eq!("{}", format!("{:?}", DenseBitSet::new()));
        assert_eq!("{1, 70}", format!("{:?}", DenseBitSet::from_elements(&[70, 1])));
    }
} // mod query_tests

// mod mutation_tests

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trip() {
        let set = DenseBitSet::from_elements(&[1, 64, 65]);

        let json = serde_json::to_string(&set).expect("serializable");

        assert_eq!("[2,3]", json);

        let back: DenseBitSet = serde_json::from_str(&json).expect("deserializable");

        assert_eq!(set, back);
    }

    #[test]
    fn deserialize_trims() {
        let set: DenseBitSet = serde_json::from_str("[1,0,0]").expect("deserializable");

        assert_eq!(&[Word(1)], set.words());
    }
} // mod serde_tests

#[cfg(test)]
#[track_caller]
pub(crate) fn assert_canonical(set: &DenseBitSet) {
    if let Some(last) = set.words().last() {
        assert!(!last.is_zero(), "{:?}", set.words());
    }
}
