//! The stateful, single-pass side of the pull protocol.

use crate::combinators::{
    AccumulateCursor, AlternateCursor, ConcatCursor, CountCursor, CycleCursor, FilterCursor,
    RepeatCursor, SkipCursor, TakeCursor,
};
use crate::core::Pull;

/// A stateful, single-pass, forward-only iterator over one series.
///
/// Produced by [`Sequence::iter`](crate::Sequence::iter). A cursor
/// exclusively owns its child cursors; pulling from a composite cursor
/// recursively pulls from the children and applies the combinator's
/// policy. Once a cursor reports exhaustion it may be discarded; behavior
/// of further pulls is defined only where a combinator documents it.
///
/// # Example
///
/// ```rust
/// use freshet::{count, take, EndOfSequence};
///
/// let seq = take(2, count(10, 5));
/// let mut cursor = seq.iter();
/// assert_eq!(cursor.next(), Ok(10));
/// assert_eq!(cursor.next(), Ok(15));
/// assert_eq!(cursor.next(), Err(EndOfSequence));
/// ```
#[derive(Debug)]
pub enum Cursor<T> {
    /// Cursor over [`Repeat`](crate::combinators::Repeat).
    Repeat(RepeatCursor<T>),
    /// Cursor over [`Count`](crate::combinators::Count).
    Count(CountCursor<T>),
    /// Cursor over [`Take`](crate::combinators::Take).
    Take(TakeCursor<T>),
    /// Cursor over [`Skip`](crate::combinators::Skip).
    Skip(SkipCursor<T>),
    /// Cursor over [`Cycle`](crate::combinators::Cycle).
    Cycle(CycleCursor<T>),
    /// Cursor over [`Concat`](crate::combinators::Concat).
    Concat(ConcatCursor<T>),
    /// Cursor over [`Alternate`](crate::combinators::Alternate).
    Alternate(AlternateCursor<T>),
    /// Cursor over [`Filter`](crate::combinators::Filter).
    Filter(FilterCursor<T>),
    /// Cursor over [`Accumulate`](crate::combinators::Accumulate).
    Accumulate(AccumulateCursor<T>),
}

impl<T: Clone> Cursor<T> {
    /// Pull the next value, or report that the series is exhausted.
    ///
    /// A successful pull advances the logical position by exactly one.
    /// There are no side effects beyond internal state advancement.
    pub fn next(&mut self) -> Pull<T> {
        match self {
            Self::Repeat(cursor) => cursor.next(),
            Self::Count(cursor) => cursor.next(),
            Self::Take(cursor) => cursor.next(),
            Self::Skip(cursor) => cursor.next(),
            Self::Cycle(cursor) => cursor.next(),
            Self::Concat(cursor) => cursor.next(),
            Self::Alternate(cursor) => cursor.next(),
            Self::Filter(cursor) => cursor.next(),
            Self::Accumulate(cursor) => cursor.next(),
        }
    }
}
