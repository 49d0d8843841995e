//  See `WordStore`.
//
//  #   Why not a plain `Vec<Word>`?
//
//  The growth policy, and the zeroing of freed words, are part of the contract of the bit set. Funneling every length
//  change through a handful of primitives makes it possible to reason about each mutator in terms of which primitive
//  it composes, rather than in terms of raw `Vec` manipulation.

use alloc::vec::Vec;

use tracing::trace;

use super::{StoreError, Word, WordIndex};

/// Heap allocated sequence of `Word`.
///
/// The store itself does not enforce canonical form: callers are expected to `trim` after clearing bits.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct WordStore {
    //  Invariants:
    //  -   Zeroed: any word freed by a shrink is zeroed before being truncated away.
    words: Vec<Word>,
}

//
//  Creation
//

impl WordStore {
    /// Returns a new, empty, instance.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Returns a new instance over `words`, trimmed.
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut result = Self { words };

        result.trim();

        result
    }
}

//
//  Access
//

impl WordStore {
    /// Returns the number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether there are no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of words which can be held without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Returns the words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the words, mutably.
    #[inline]
    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Returns the word at the given index, or `ZERO` if beyond the store.
    #[inline]
    pub fn get(&self, index: WordIndex) -> Word {
        self.words.get(index.0).copied().unwrap_or(Word::ZERO)
    }

    /// Returns the index of the last word, if any.
    #[inline]
    pub fn last(&self) -> Option<WordIndex> {
        self.words.len().checked_sub(1).map(WordIndex)
    }
}

//
//  Length changes
//

impl WordStore {
    /// Ensures the store holds at least `n` words, keeping existing words and appending `ZERO` words.
    ///
    /// On error, `self` is left unchanged.
    pub fn ensure_len(&mut self, n: usize) -> Result<(), StoreError> {
        if n <= self.words.len() {
            return Ok(());
        }

        self.reserve(n)?;

        self.words.resize(n, Word::ZERO);

        Ok(())
    }

    /// Sets the store to exactly `n` words, all `ZERO`.
    ///
    /// Existing words are discarded, the allocation is reused whenever sufficient. On error, `self` is left unchanged.
    pub fn reset_len(&mut self, n: usize) -> Result<(), StoreError> {
        self.reserve(n)?;

        self.words.clear();
        self.words.resize(n, Word::ZERO);

        Ok(())
    }

    /// Shrinks the store to at most `n` words, zeroing the freed words first.
    pub fn truncate(&mut self, n: usize) {
        let len = self.words.len();

        if n >= len {
            return;
        }

        trace!(target: "dense_bit_set::store", from = len, to = n, "shrinking word storage");

        self.words[n..].fill(Word::ZERO);
        self.words.truncate(n);
    }

    /// Removes all trailing `ZERO` words, restoring canonical form.
    pub fn trim(&mut self) {
        let n = self.words.iter().rposition(|w| !w.is_zero()).map_or(0, |last| last + 1);

        self.truncate(n);
    }

    //  Reserves room for `n` words, following the growth policy.
    fn reserve(&mut self, n: usize) -> Result<(), StoreError> {
        let capacity = self.words.capacity();

        if n <= capacity {
            return Ok(());
        }

        let target = grown_capacity(n, capacity);

        trace!(target: "dense_bit_set::store", from = capacity, to = target, "growing word storage");

        //  Capacity is at least `len`, hence `target > len`.
        let additional = target - self.words.len();

        if self.words.try_reserve_exact(additional).is_ok() {
            return Ok(());
        }

        //  The power-of-two bound is only a hint; the exact request may still be satisfiable.
        let additional = n - self.words.len();

        self.words.try_reserve_exact(additional).map_err(|_| {
            if n.checked_mul(size_of::<Word>()).is_none_or(|bytes| bytes > isize::MAX as usize) {
                StoreError::CapacityOverflow
            } else {
                StoreError::AllocationFailed
            }
        })
    }
}

/// Returns the capacity to allocate when growing from `previous` capacity to hold `n` words.
///
/// The result is the greater of `n` and the smallest power of two strictly greater than `previous`, which guarantees
/// an amortized O(1) cost per word across repeated growth, while honoring any larger request exactly.
///
/// #   Examples
///
/// ```
/// #   use dense_bit_set::utils::grown_capacity;
/// assert_eq!(1, grown_capacity(1, 0));
/// assert_eq!(4, grown_capacity(3, 2));
/// assert_eq!(8, grown_capacity(5, 4));
/// assert_eq!(100, grown_capacity(100, 4));
/// ```
pub fn grown_capacity(n: usize, previous: usize) -> usize {
    let doubled = previous
        .checked_add(1)
        .and_then(usize::checked_next_power_of_two)
        .unwrap_or(usize::MAX);

    n.max(doubled)
}

// mod tests
