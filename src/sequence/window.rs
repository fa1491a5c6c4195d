//! This module defines [Window], a borrowed subrange adapter that exposes
//! part of a sequence as a sequence of its own.

use std::fmt::Debug;

use super::traversal::{BidirectionalSequence, Sequence};

/// A read-only view onto the range `[from, to)` of an underlying sequence.
///
/// A [Window] is itself a [Sequence] whose positions are those of the
/// underlying sequence. Since positions are opaque, the length of a window
/// cannot be measured without traversal; [`known_len`][Sequence::known_len]
/// therefore reports `None` even when the underlying sequence is sized.
///
/// `from` must precede or equal `to`, and both must be valid positions of
/// the underlying sequence; anything else is a contract violation.
pub struct Window<'a, S: Sequence + ?Sized> {
    sequence: &'a S,
    from: S::Position,
    to: S::Position,
}

impl<'a, S: Sequence + ?Sized> Window<'a, S> {
    /// Creates a window over `[from, to)` of the given sequence.
    pub fn new(sequence: &'a S, from: S::Position, to: S::Position) -> Self {
        Self { sequence, from, to }
    }
}

impl<S: Sequence + ?Sized> Debug for Window<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl<S: Sequence + ?Sized> Sequence for Window<'_, S> {
    type Item = S::Item;
    type Position = S::Position;

    fn start(&self) -> Self::Position {
        self.from.clone()
    }

    fn end(&self) -> Self::Position {
        self.to.clone()
    }

    fn advance(&self, position: Self::Position) -> Self::Position {
        debug_assert!(position != self.to);
        self.sequence.advance(position)
    }

    fn get(&self, position: &Self::Position) -> &Self::Item {
        self.sequence.get(position)
    }
}

impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for Window<'_, S> {
    fn retreat(&self, position: Self::Position) -> Self::Position {
        debug_assert!(position != self.from);
        self.sequence.retreat(position)
    }
}
