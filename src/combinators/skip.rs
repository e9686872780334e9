//! Offsetting past a fixed number of leading elements.

use crate::core::{Cursor, Pull, Sequence};

/// Sequence producing its child's elements from position `count` onward
/// (0-indexed).
///
/// A child with `count` or fewer elements produces an empty result.
#[derive(Clone, Debug)]
pub struct Skip<T> {
    count: usize,
    child: Box<Sequence<T>>,
}

impl<T> Skip<T> {
    /// Drop the first `count` elements of `child`.
    pub fn new(count: usize, child: Sequence<T>) -> Self {
        Self {
            count,
            child: Box::new(child),
        }
    }
}

impl<T: Clone> Skip<T> {
    pub(crate) fn cursor(&self) -> SkipCursor<T> {
        SkipCursor {
            count: self.count,
            skipped: false,
            child: Box::new(self.child.iter()),
        }
    }
}

/// Cursor over a [`Skip`] sequence.
#[derive(Debug)]
pub struct SkipCursor<T> {
    count: usize,
    /// One-shot: the discard happens on the first pull only.
    skipped: bool,
    child: Box<Cursor<T>>,
}

impl<T: Clone> SkipCursor<T> {
    pub(crate) fn next(&mut self) -> Pull<T> {
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.count {
                self.child.next()?;
            }
        }
        self.child.next()
    }
}
