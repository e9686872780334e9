//! Truncation to a fixed number of leading elements.

use crate::core::{Cursor, EndOfSequence, Pull, Sequence};

/// Sequence producing the first `limit` elements of its child.
///
/// A child with fewer than `limit` elements passes through unchanged.
#[derive(Clone, Debug)]
pub struct Take<T> {
    limit: usize,
    child: Box<Sequence<T>>,
}

impl<T> Take<T> {
    /// Truncate `child` to its first `limit` elements.
    pub fn new(limit: usize, child: Sequence<T>) -> Self {
        Self {
            limit,
            child: Box::new(child),
        }
    }
}

impl<T: Clone> Take<T> {
    pub(crate) fn cursor(&self) -> TakeCursor<T> {
        TakeCursor {
            delivered: 0,
            limit: self.limit,
            child: Box::new(self.child.iter()),
        }
    }
}

/// Cursor over a [`Take`] sequence.
#[derive(Debug)]
pub struct TakeCursor<T> {
    delivered: usize,
    limit: usize,
    child: Box<Cursor<T>>,
}

impl<T: Clone> TakeCursor<T> {
    pub(crate) fn next(&mut self) -> Pull<T> {
        // Once the limit is reached the child is never pulled again.
        if self.delivered == self.limit {
            return Err(EndOfSequence);
        }
        let value = self.child.next()?;
        self.delivered += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{count, repeat, take, EndOfSequence};
    use test_case::test_case;

    #[test_case(0 ; "empty truncation")]
    #[test_case(1 ; "single element")]
    #[test_case(10 ; "several elements")]
    fn take_of_repeat_delivers_exactly_the_limit(limit: usize) {
        let seq = take(limit, repeat(4));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![4; limit]);
    }

    #[test]
    fn take_is_exhausted_after_the_limit() {
        let seq = take(2, repeat('a'));
        let mut cursor = seq.iter();

        assert_eq!(cursor.next(), Ok('a'));
        assert_eq!(cursor.next(), Ok('a'));
        assert_eq!(cursor.next(), Err(EndOfSequence));
    }

    #[test]
    fn take_passes_a_shorter_child_through_unchanged() {
        let seq = take(10, take(3, count(0, 1)));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![0, 1, 2]);
    }
}
