//! Arithmetic progression from a start value and a stride.

use std::ops::Add;

use crate::combinators::StepFn;
use crate::core::Pull;

/// Sequence producing the infinite series start, start + delta,
/// start + 2·delta, ….
///
/// `delta` may be zero or negative, for a constant or decreasing series.
#[derive(Clone, Debug)]
pub struct Count<T> {
    start: T,
    delta: T,
    step: StepFn<T>,
}

impl<T> Count<T> {
    /// Create a counting sequence starting at `start` and advancing by
    /// `delta`.
    pub fn new(start: T, delta: T) -> Self
    where
        T: Add<Output = T>,
    {
        Self {
            start,
            delta,
            step: |current, delta| current + delta,
        }
    }
}

impl<T: Clone> Count<T> {
    pub(crate) fn cursor(&self) -> CountCursor<T> {
        CountCursor {
            upcoming: self.start.clone(),
            delta: self.delta.clone(),
            step: self.step,
        }
    }
}

/// Cursor over a [`Count`] sequence. Never exhausts.
#[derive(Debug)]
pub struct CountCursor<T> {
    upcoming: T,
    delta: T,
    step: StepFn<T>,
}

impl<T: Clone> CountCursor<T> {
    pub(crate) fn next(&mut self) -> Pull<T> {
        let value = self.upcoming.clone();
        self.upcoming = (self.step)(value.clone(), self.delta.clone());
        Ok(value)
    }
}
