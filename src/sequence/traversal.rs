//! This module defines the traits [Sequence], [BidirectionalSequence], and
//! [MutableSequence], which expose containers to the algorithms of this
//! crate through opaque positions, as well as the free functions [distance],
//! [advance_by], and [reverse] operating on any such sequence.

use std::collections::VecDeque;
use std::fmt::Debug;

/// A sequence of elements reachable by forward positional traversal.
///
/// A sequence hands out opaque positions: [`start`][Self::start] designates
/// its first element and [`end`][Self::end] is a sentinel one step past the
/// last one. Positions are only meaningful for the sequence that produced
/// them. Calling [`advance`][Self::advance] on the end sentinel or
/// [`get`][Self::get] on it is a contract violation; the built-in
/// implementations debug-assert against it.
pub trait Sequence {
    /// The element type of the sequence.
    type Item;

    /// Opaque traversal position. Cheap to clone and comparable for
    /// equality, which is how every loop in this crate detects the end
    /// of a range.
    type Position: Clone + Eq + Debug;

    /// Returns the position of the first element.
    fn start(&self) -> Self::Position;

    /// Returns the end sentinel, one step past the last element.
    fn end(&self) -> Self::Position;

    /// Returns the position one step forward of `position`.
    fn advance(&self, position: Self::Position) -> Self::Position;

    /// Returns a reference to the element at the given position.
    fn get(&self, position: &Self::Position) -> &Self::Item;

    /// Returns the number of elements if it is known in constant time,
    /// and `None` if only traversal can measure it.
    fn known_len(&self) -> Option<usize> {
        None
    }
}

/// A [Sequence] that additionally supports backward stepping.
pub trait BidirectionalSequence: Sequence {
    /// Returns the position one step backward of `position`.
    /// Retreating from [`start`][Sequence::start] is a contract violation.
    fn retreat(&self, position: Self::Position) -> Self::Position;
}

/// A [BidirectionalSequence] whose elements can be exchanged in place.
///
/// This is the write access the arrangement generators need; the length of
/// the sequence is never changed through this trait.
pub trait MutableSequence: BidirectionalSequence {
    /// Exchanges the elements at the two given positions.
    fn swap(&mut self, first: &Self::Position, second: &Self::Position);
}

/// Count the number of forward steps from `from` to `to`.
///
/// `to` must be reachable from `from`; otherwise the walk runs off the
/// sequence, which is a contract violation.
pub fn distance<S: Sequence + ?Sized>(
    sequence: &S,
    from: &S::Position,
    to: &S::Position,
) -> usize {
    let mut steps = 0;
    let mut position = from.clone();
    while position != *to {
        position = sequence.advance(position);
        steps += 1;
    }
    steps
}

/// Step `position` forward `steps` times, stopping early at the end
/// sentinel.
///
/// Returns the reached position, or `None` if the sequence ended before
/// all steps were taken. The returned position may itself be the end
/// sentinel when the sequence holds exactly `steps` remaining elements.
pub fn advance_by<S: Sequence + ?Sized>(
    sequence: &S,
    mut position: S::Position,
    steps: usize,
) -> Option<S::Position> {
    let end = sequence.end();
    for _ in 0..steps {
        if position == end {
            return None;
        }
        position = sequence.advance(position);
    }
    Some(position)
}

/// Reverse the range `[from, to)` in place by pairwise swaps.
pub fn reverse<S: MutableSequence + ?Sized>(
    sequence: &mut S,
    mut from: S::Position,
    mut to: S::Position,
) {
    loop {
        if from == to {
            return;
        }
        to = sequence.retreat(to);
        if from == to {
            return;
        }
        sequence.swap(&from, &to);
        from = sequence.advance(from);
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn advance(&self, position: usize) -> usize {
        debug_assert!(position < self.len());
        position + 1
    }

    fn get(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> BidirectionalSequence for [T] {
    fn retreat(&self, position: usize) -> usize {
        debug_assert!(position > 0);
        position - 1
    }
}

impl<T> MutableSequence for [T] {
    fn swap(&mut self, first: &usize, second: &usize) {
        <[T]>::swap(self, *first, *second);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn advance(&self, position: usize) -> usize {
        debug_assert!(position < self.len());
        position + 1
    }

    fn get(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> BidirectionalSequence for Vec<T> {
    fn retreat(&self, position: usize) -> usize {
        debug_assert!(position > 0);
        position - 1
    }
}

impl<T> MutableSequence for Vec<T> {
    fn swap(&mut self, first: &usize, second: &usize) {
        self.as_mut_slice().swap(*first, *second);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn advance(&self, position: usize) -> usize {
        debug_assert!(position < self.len());
        position + 1
    }

    fn get(&self, position: &usize) -> &T {
        &self[*position]
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    fn retreat(&self, position: usize) -> usize {
        debug_assert!(position > 0);
        position - 1
    }
}

impl<T> MutableSequence for VecDeque<T> {
    fn swap(&mut self, first: &usize, second: &usize) {
        VecDeque::swap(self, *first, *second);
    }
}
