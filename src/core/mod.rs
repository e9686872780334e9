//! Core pull protocol types.
//!
//! This module contains the two-role protocol the combinators are built
//! on:
//! - Restartable series descriptions via [`Sequence`]
//! - Single-pass iteration via [`Cursor`] and [`Pull`]
//! - Exhaustion signaling via [`EndOfSequence`]
//! - The standard-iterator bridge via [`Values`]
//!
//! Everything here is pure in-memory computation: producing a cursor and
//! pulling values from it are the only operations, and neither touches
//! I/O.

mod cursor;
mod end;
mod sequence;
mod values;

pub use cursor::Cursor;
pub use end::{EndOfSequence, Pull};
pub use sequence::Sequence;
pub use values::Values;
