//! Strict interleaving of two series.

use crate::core::{Cursor, EndOfSequence, Pull, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Sequence interleaving its children strictly alternating:
/// first[0], second[0], first[1], second[1], ….
///
/// When one side exhausts, interleaving is permanently abandoned and the
/// other side's remaining elements are produced in order; the dead side
/// is never pulled again.
#[derive(Clone, Debug)]
pub struct Alternate<T> {
    first: Box<Sequence<T>>,
    second: Box<Sequence<T>>,
}

impl<T> Alternate<T> {
    /// Interleave `first` and `second`, starting with `first`.
    pub fn new(first: Sequence<T>, second: Sequence<T>) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<T: Clone> Alternate<T> {
    pub(crate) fn cursor(&self) -> AlternateCursor<T> {
        AlternateCursor {
            turn: Side::First,
            dead: None,
            first: Box::new(self.first.iter()),
            second: Box::new(self.second.iter()),
        }
    }
}

/// Cursor over an [`Alternate`] sequence.
#[derive(Debug)]
pub struct AlternateCursor<T> {
    turn: Side,
    /// Sticky: records the side that exhausted first, if any. That side
    /// is never pulled again.
    dead: Option<Side>,
    first: Box<Cursor<T>>,
    second: Box<Cursor<T>>,
}

impl<T: Clone> AlternateCursor<T> {
    fn pull(&mut self, side: Side) -> Pull<T> {
        match side {
            Side::First => self.first.next(),
            Side::Second => self.second.next(),
        }
    }

    pub(crate) fn next(&mut self) -> Pull<T> {
        if let Some(dead) = self.dead {
            return self.pull(dead.other());
        }
        match self.pull(self.turn) {
            Ok(value) => {
                self.turn = self.turn.other();
                Ok(value)
            }
            Err(EndOfSequence) => {
                self.dead = Some(self.turn);
                self.pull(self.turn.other())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{alternate, count, repeat, take, EndOfSequence};

    #[test]
    fn alternate_ping_pongs_between_infinite_sides() {
        let seq = take(6, alternate(repeat(0), repeat(1)));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn alternate_drains_the_surviving_first_side() {
        let seq = take(6, alternate(repeat(9), take(1, repeat(0))));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![9, 0, 9, 9, 9, 9]);
    }

    #[test]
    fn alternate_drains_the_surviving_second_side() {
        let seq = take(6, alternate(take(2, count(1, 1)), repeat(9)));
        let values: Vec<i32> = seq.values().collect();
        assert_eq!(values, vec![1, 9, 2, 9, 9, 9]);
    }

    #[test]
    fn alternate_of_two_empty_sides_is_empty() {
        let seq = alternate(take(0, repeat(1)), take(0, repeat(2)));
        let mut cursor = seq.iter();
        assert_eq!(cursor.next(), Err(EndOfSequence));
    }

    #[test]
    fn exhaustion_of_the_surviving_side_is_final() {
        let seq = alternate(take(1, repeat(1)), take(2, repeat(2)));
        let mut cursor = seq.iter();

        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        assert_eq!(cursor.next(), Ok(2));
        assert_eq!(cursor.next(), Err(EndOfSequence));
    }
}
