//! Endless repetition of a child's full series.

use std::rc::Rc;

use crate::core::{Cursor, EndOfSequence, Pull, Sequence};

/// Sequence repeating its child's series indefinitely:
/// child[0..n], child[0..n], ….
///
/// The child is held behind an `Rc` so that cursors can request fresh
/// child cursors to restart iteration, without borrowing from this
/// sequence or being tied to its lifetime. An empty child produces an
/// empty result; a one-element child is equivalent to the child itself.
#[derive(Clone, Debug)]
pub struct Cycle<T> {
    child: Rc<Sequence<T>>,
}

impl<T> Cycle<T> {
    /// Repeat the full series of `child` indefinitely.
    pub fn new(child: Sequence<T>) -> Self {
        Self {
            child: Rc::new(child),
        }
    }
}

impl<T: Clone> Cycle<T> {
    pub(crate) fn cursor(&self) -> CycleCursor<T> {
        CycleCursor {
            origin: Rc::clone(&self.child),
            active: Box::new(self.child.iter()),
        }
    }
}

/// Cursor over a [`Cycle`] sequence.
#[derive(Debug)]
pub struct CycleCursor<T> {
    /// Read-only handle to the child description, for restarts.
    origin: Rc<Sequence<T>>,
    active: Box<Cursor<T>>,
}

impl<T: Clone> CycleCursor<T> {
    pub(crate) fn next(&mut self) -> Pull<T> {
        match self.active.next() {
            Ok(value) => Ok(value),
            Err(EndOfSequence) => {
                // Restart from a fresh child cursor. A restart that is
                // immediately exhausted means the child is empty;
                // propagate instead of retrying forever.
                let mut fresh = self.origin.iter();
                let value = fresh.next()?;
                *self.active = fresh;
                Ok(value)
            }
        }
    }
}
