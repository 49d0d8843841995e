//  See structs.

use core::iter::FusedIterator;

use super::{BitIndex, Word};

/// Iterator over the set bits of a `Word`, in both directions.
#[derive(Clone, Debug)]
pub struct BitInWordIter {
    //  Bits not yet yielded, from either end.
    word: Word,
}

impl BitInWordIter {
    /// Creates a new iterator.
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

impl Iterator for BitInWordIter {
    type Item = BitIndex;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.word.count();

        (count, Some(count))
    }

    fn count(self) -> usize {
        self.word.count()
    }

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.word.lowest()?;

        //  Clear the lowest set bit.
        self.word.0 &= self.word.0 - 1;

        Some(result)
    }
}

impl DoubleEndedIterator for BitInWordIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        let result = self.word.highest()?;

        self.word.reset(result);

        Some(result)
    }
}

impl ExactSizeIterator for BitInWordIter {}

impl FusedIterator for BitInWordIter {}

/// Calls `visitor` with the key of every set bit of `word`, in ascending order, `first_key` being the key of bit 0.
///
/// Stops as soon as `visitor` returns `true`, and returns whether it did.
///
/// Runs of consecutive set bits are walked without searching for each bit anew.
pub fn visit_word<F>(first_key: u64, word: Word, visitor: &mut F) -> bool
where
    F: FnMut(u64) -> bool,
{
    let mut bits = word.0;
    let mut key = first_key;

    while bits != 0 {
        //  Non-zero, hence strictly less than 64.
        let zeros = bits.trailing_zeros();

        key += u64::from(zeros);
        bits >>= zeros;

        let ones = bits.trailing_ones();

        for _ in 0..ones {
            if visitor(key) {
                return true;
            }

            key += 1;
        }

        bits = bits.checked_shr(ones).unwrap_or(0);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        const EMPTY: &[u32] = &[];

        assert_eq!(EMPTY, collect_forward(0));
        assert_eq!(EMPTY, collect_backward(0));
        assert_eq!(EMPTY, collect_visit(0));
    }

    #[test]
    fn single() {
        const SINGLE: &[u32] = &[1];

        assert_eq!(SINGLE, collect_forward(0b0010));
        assert_eq!(SINGLE, collect_backward(0b0010));
        assert_eq!(SINGLE, collect_visit(0b0010));
    }

    #[test]
    fn boundaries() {
        const FORWARD: &[u32] = &[0, 63];
        const BACKWARD: &[u32] = &[63, 0];

        assert_eq!(FORWARD, collect_forward(1 << 63 | 1));
        assert_eq!(BACKWARD, collect_backward(1 << 63 | 1));
        assert_eq!(FORWARD, collect_visit(1 << 63 | 1));
    }

    #[test]
    fn runs() {
        const RUNS: &[u32] = &[1, 2, 3, 6, 7, 62, 63];
        const WORD: u64 = 0b1100_1110 | 0b11 << 62;

        assert_eq!(RUNS, collect_forward(WORD));
        assert_eq!(RUNS, collect_visit(WORD));
    }

    #[test]
    fn full() {
        let expected: Vec<u32> = (0..64).collect();

        assert_eq!(expected, collect_forward(!0));
        assert_eq!(expected, collect_visit(!0));
        assert_eq!(64, BitInWordIter::new(Word::ONES).len());
    }

    #[test]
    fn both_ends() {
        let mut iter = BitInWordIter::new(Word(0b1011));

        assert_eq!(Some(BitIndex(0)), iter.next());
        assert_eq!(Some(BitIndex(3)), iter.next_back());
        assert_eq!(1, iter.len());
        assert_eq!(Some(BitIndex(1)), iter.next_back());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next_back());
    }

    #[test]
    fn visit_offset_and_stop() {
        let mut seen = Vec::new();

        let stopped = visit_word(128, Word(0b0111), &mut |key| {
            seen.push(key);
            key == 129
        });

        assert!(stopped);
        assert_eq!(vec![128, 129], seen);
    }

    fn collect_forward(word: u64) -> Vec<u32> {
        BitInWordIter::new(Word(word)).map(|i| i.0).collect()
    }

    fn collect_backward(word: u64) -> Vec<u32> {
        BitInWordIter::new(Word(word)).rev().map(|i| i.0).collect()
    }

    fn collect_visit(word: u64) -> Vec<u32> {
        let mut result = Vec::new();

        visit_word(0, Word(word), &mut |key| {
            result.push(key as u32);
            false
        });

        result
    }
} // mod tests
