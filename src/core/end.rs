//! Exhaustion signaling for the pull protocol.

use thiserror::Error;

/// Termination signal for finite series.
///
/// `EndOfSequence` is not a fault: it is expected, recoverable control
/// information, and the only way a cursor reports that its series is over.
/// Combinators whose policy reacts to a child's exhaustion (`Cycle`,
/// `Concat`, `Alternate`) match on it; combinators that merely truncate,
/// offset, or fold propagate it with `?`.
///
/// # Example
///
/// ```rust
/// use freshet::{repeat, take, EndOfSequence};
///
/// let seq = take(1, repeat('x'));
/// let mut cursor = seq.iter();
/// assert_eq!(cursor.next(), Ok('x'));
/// assert_eq!(cursor.next(), Err(EndOfSequence));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("No more values are available from this cursor")]
pub struct EndOfSequence;

/// Result of a single pull from a [`Cursor`](crate::Cursor).
pub type Pull<T> = Result<T, EndOfSequence>;
