//! The factory side of the pull protocol.

use crate::combinators::{
    Accumulate, Alternate, Concat, Count, Cycle, Filter, Repeat, Skip, Take,
};
use crate::core::{Cursor, Values};

/// An immutable, restartable description of a (possibly infinite) ordered
/// series of values.
///
/// A sequence's only capability is to produce a fresh [`Cursor`]; the
/// closed set of variants below is the full combinator vocabulary. A
/// combinator sequence owns its child sequences as part of the
/// description, so dropping a sequence releases its whole tree. Cursors
/// never borrow from the sequence that produced them: construction
/// parameters are cloned into the cursor, and the two lifetimes are
/// independent.
///
/// # Example
///
/// ```rust
/// use freshet::{count, take};
///
/// let evens = take(4, count(0, 2));
/// let values: Vec<i32> = evens.values().collect();
/// assert_eq!(values, vec![0, 2, 4, 6]);
/// ```
#[derive(Clone, Debug)]
pub enum Sequence<T> {
    /// Endless repetition of one value.
    Repeat(Repeat<T>),
    /// Arithmetic progression.
    Count(Count<T>),
    /// Truncation to the leading elements.
    Take(Take<T>),
    /// Offset past the leading elements.
    Skip(Skip<T>),
    /// Endless repetition of a child's full series.
    Cycle(Cycle<T>),
    /// One series followed by another.
    Concat(Concat<T>),
    /// Strict interleave of two series.
    Alternate(Alternate<T>),
    /// Mask-directed selection from a source series.
    Filter(Filter<T>),
    /// Running totals of a child series.
    Accumulate(Accumulate<T>),
}

impl<T: Clone> Sequence<T> {
    /// Produce a fresh cursor positioned at the start of the series.
    ///
    /// Always succeeds: cursor construction is pure object construction,
    /// no I/O. Every call yields an independent cursor that replays the
    /// same logical series from its start.
    pub fn iter(&self) -> Cursor<T> {
        match self {
            Self::Repeat(seq) => Cursor::Repeat(seq.cursor()),
            Self::Count(seq) => Cursor::Count(seq.cursor()),
            Self::Take(seq) => Cursor::Take(seq.cursor()),
            Self::Skip(seq) => Cursor::Skip(seq.cursor()),
            Self::Cycle(seq) => Cursor::Cycle(seq.cursor()),
            Self::Concat(seq) => Cursor::Concat(seq.cursor()),
            Self::Alternate(seq) => Cursor::Alternate(seq.cursor()),
            Self::Filter(seq) => Cursor::Filter(seq.cursor()),
            Self::Accumulate(seq) => Cursor::Accumulate(seq.cursor()),
        }
    }

    /// Bridge into the standard iterator protocol.
    ///
    /// Produces a fresh cursor and wraps it in a fused [`Values`]
    /// iterator, so a sequence can be drained with `for`, `collect`, and
    /// the rest of the iterator toolkit.
    pub fn values(&self) -> Values<T> {
        Values::new(self.iter())
    }
}

impl<'a, T: Clone> IntoIterator for &'a Sequence<T> {
    type Item = T;
    type IntoIter = Values<T>;

    fn into_iter(self) -> Values<T> {
        self.values()
    }
}
