//! Mask-directed selection from a source series.

use crate::core::{Cursor, Pull, Sequence};

/// Sequence producing the source elements whose aligned mask value is
/// `true`.
///
/// Mask and source are consumed in lock-step: mask[i] gates source[i],
/// with no re-indexing or memoization. The result ends as soon as either
/// child ends.
#[derive(Clone, Debug)]
pub struct Filter<T> {
    source: Box<Sequence<T>>,
    mask: Box<Sequence<bool>>,
}

impl<T> Filter<T> {
    /// Keep the elements of `source` at positions where `mask` is `true`.
    pub fn new(source: Sequence<T>, mask: Sequence<bool>) -> Self {
        Self {
            source: Box::new(source),
            mask: Box::new(mask),
        }
    }
}

impl<T: Clone> Filter<T> {
    pub(crate) fn cursor(&self) -> FilterCursor<T> {
        FilterCursor {
            source: Box::new(self.source.iter()),
            mask: Box::new(self.mask.iter()),
        }
    }
}

/// Cursor over a [`Filter`] sequence.
#[derive(Debug)]
pub struct FilterCursor<T> {
    source: Box<Cursor<T>>,
    mask: Box<Cursor<bool>>,
}

impl<T: Clone> FilterCursor<T> {
    pub(crate) fn next(&mut self) -> Pull<T> {
        // Exhaustion of either child, at any point in the walk, is the
        // result's exhaustion.
        loop {
            if self.mask.next()? {
                return self.source.next();
            }
            self.source.next()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{alternate, count, filter, repeat, take, EndOfSequence};

    #[test]
    fn filter_keeps_the_masked_positions() {
        // Odd-position elements of 1, 2, 3, ... via an alternating mask.
        let mask = alternate(repeat(true), repeat(false));
        let seq = take(5, filter(count(1, 1), mask));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn filter_ends_when_the_mask_ends() {
        let seq = filter(count(1, 1), take(3, repeat(true)));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn filter_ends_when_the_source_ends_under_a_true_mask() {
        let seq = filter(take(2, count(1, 1)), repeat(true));
        let mut cursor = seq.iter();

        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        assert_eq!(cursor.next(), Err(EndOfSequence));
    }

    #[test]
    fn filter_with_an_all_false_mask_is_empty() {
        let seq = filter(count(1, 1), take(4, repeat(false)));
        let mut cursor = seq.iter();
        assert_eq!(cursor.next(), Err(EndOfSequence));
    }

    #[test]
    fn filter_discards_source_elements_under_false() {
        // false, true, false, true, ... keeps even-position elements.
        let mask = alternate(repeat(false), repeat(true));
        let seq = take(3, filter(count(1, 1), mask));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![2, 4, 6]);
    }
}
