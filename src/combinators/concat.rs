//! End-to-end joining of two series.

use crate::core::{Cursor, EndOfSequence, Pull, Sequence};

/// Sequence producing its first child's full series, then its second's.
#[derive(Clone, Debug)]
pub struct Concat<T> {
    first: Box<Sequence<T>>,
    second: Box<Sequence<T>>,
}

impl<T> Concat<T> {
    /// Produce `first`'s series followed by `second`'s.
    pub fn new(first: Sequence<T>, second: Sequence<T>) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<T: Clone> Concat<T> {
    pub(crate) fn cursor(&self) -> ConcatCursor<T> {
        ConcatCursor {
            on_second: false,
            first: Box::new(self.first.iter()),
            second: Box::new(self.second.iter()),
        }
    }
}

/// Cursor over a [`Concat`] sequence.
#[derive(Debug)]
pub struct ConcatCursor<T> {
    /// Sticky: set when `first` exhausts, never cleared.
    on_second: bool,
    first: Box<Cursor<T>>,
    second: Box<Cursor<T>>,
}

impl<T: Clone> ConcatCursor<T> {
    pub(crate) fn next(&mut self) -> Pull<T> {
        if !self.on_second {
            match self.first.next() {
                Ok(value) => return Ok(value),
                Err(EndOfSequence) => self.on_second = true,
            }
        }
        self.second.next()
    }
}
