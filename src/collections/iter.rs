//! Iterator over the elements of a bit set.

use core::{iter::Enumerate, iter::FusedIterator, slice};

use crate::utils::{BitInWordIter, Word, WordIndex};

/// Iterator over the elements of a bit set, in ascending order.
///
/// #   Examples
///
/// ```
/// use dense_bit_set::collections::DenseBitSet;
///
/// let set = DenseBitSet::from_elements(&[3, 64, 200]);
///
/// assert_eq!(vec![3, 64, 200], set.iter().collect::<Vec<_>>());
/// assert_eq!(vec![200, 64, 3], set.iter().rev().collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: Enumerate<slice::Iter<'a, Word>>,
    //  Partially consumed words, from either end, with the key of their bit 0.
    front: Option<(u64, BitInWordIter)>,
    back: Option<(u64, BitInWordIter)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            words: words.iter().enumerate(),
            front: None,
            back: None,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u64;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = |side: &Option<(u64, BitInWordIter)>| side.as_ref().map_or(0, |(_, bits)| bits.len());

        let lower = pending(&self.front) + pending(&self.back);
        let upper = self
            .words
            .len()
            .checked_mul(Word::BITS as usize)
            .and_then(|bits| bits.checked_add(lower));

        (lower, upper)
    }

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((first_key, bits)) = &mut self.front {
                if let Some(bit) = bits.next() {
                    return Some(*first_key + u64::from(bit.0));
                }
            }

            let Some((index, word)) = self.words.next() else {
                //  Only the back word, if any, is left.
                let (first_key, bits) = self.back.as_mut()?;

                return bits.next().map(|bit| *first_key + u64::from(bit.0));
            };

            self.front = Some((Word::first_key(WordIndex(index)), BitInWordIter::new(*word)));
        }
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((first_key, bits)) = &mut self.back {
                if let Some(bit) = bits.next_back() {
                    return Some(*first_key + u64::from(bit.0));
                }
            }

            let Some((index, word)) = self.words.next_back() else {
                let (first_key, bits) = self.front.as_mut()?;

                return bits.next_back().map(|bit| *first_key + u64::from(bit.0));
            };

            self.back = Some((Word::first_key(WordIndex(index)), BitInWordIter::new(*word)));
        }
    }
}

impl FusedIterator for Iter<'_> {}

// mod tests
