//! This module implements in-place stepping through the lexicographic
//! arrangement space of a sequence: [next_arrangement] rewrites a sequence
//! into its lexicographic successor, [prev_arrangement] into its
//! predecessor, both under a caller-supplied strict weak order.
//!
//! Repeatedly applying [next_arrangement] starting from the minimal
//! arrangement enumerates every distinct arrangement exactly once and wraps
//! back to the minimum; the call that wraps returns `false`, every other
//! call returns `true`. [prev_arrangement] mirrors this downwards. A single
//! step costs O(n) in the worst case and amortized O(1) over a full
//! enumeration cycle.

use crate::sequence::{reverse, MutableSequence};

/// Rewrite the sequence into its lexicographic successor arrangement under
/// the natural order of its elements.
///
/// Returns `true` on success. If the sequence already is its lexicographic
/// maximum, it is reversed into the minimum and `false` is returned.
/// Sequences of length 0 or 1 are left untouched and yield `false`.
pub fn next_arrangement<S>(sequence: &mut S) -> bool
where
    S: MutableSequence + ?Sized,
    S::Item: Ord,
{
    successor(sequence, &|x: &S::Item, y: &S::Item| x < y)
}

/// Rewrite the sequence into its lexicographic successor arrangement under
/// the given strict weak order.
pub fn next_arrangement_by<S, L>(sequence: &mut S, less: L) -> bool
where
    S: MutableSequence + ?Sized,
    L: Fn(&S::Item, &S::Item) -> bool,
{
    successor(sequence, &less)
}

/// Rewrite the sequence into its lexicographic successor arrangement,
/// ordering elements by their projected keys.
pub fn next_arrangement_by_key<S, K, P>(sequence: &mut S, projection: P) -> bool
where
    S: MutableSequence + ?Sized,
    K: Ord,
    P: Fn(&S::Item) -> K,
{
    successor(sequence, &|x: &S::Item, y: &S::Item| {
        projection(x) < projection(y)
    })
}

/// Rewrite the sequence into its lexicographic predecessor arrangement under
/// the natural order of its elements.
///
/// Returns `true` on success. If the sequence already is its lexicographic
/// minimum, it is reversed into the maximum and `false` is returned.
/// Sequences of length 0 or 1 are left untouched and yield `false`.
pub fn prev_arrangement<S>(sequence: &mut S) -> bool
where
    S: MutableSequence + ?Sized,
    S::Item: Ord,
{
    predecessor(sequence, &|x: &S::Item, y: &S::Item| x < y)
}

/// Rewrite the sequence into its lexicographic predecessor arrangement under
/// the given strict weak order.
pub fn prev_arrangement_by<S, L>(sequence: &mut S, less: L) -> bool
where
    S: MutableSequence + ?Sized,
    L: Fn(&S::Item, &S::Item) -> bool,
{
    predecessor(sequence, &less)
}

/// Rewrite the sequence into its lexicographic predecessor arrangement,
/// ordering elements by their projected keys.
pub fn prev_arrangement_by_key<S, K, P>(sequence: &mut S, projection: P) -> bool
where
    S: MutableSequence + ?Sized,
    K: Ord,
    P: Fn(&S::Item) -> K,
{
    predecessor(sequence, &|x: &S::Item, y: &S::Item| {
        projection(x) < projection(y)
    })
}

/// The classic in-place successor step: find the rightmost ascent (i, i+1),
/// swap i with the rightmost j > i that is still greater, and reverse the
/// suffix after i back into ascending order.
fn successor<S, L>(sequence: &mut S, less: &L) -> bool
where
    S: MutableSequence + ?Sized,
    L: Fn(&S::Item, &S::Item) -> bool,
{
    let begin = sequence.start();
    let end = sequence.end();
    if begin == end {
        return false;
    }
    let mut i = sequence.retreat(end.clone());
    if begin == i {
        return false;
    }

    loop {
        let after_i = i.clone();
        i = sequence.retreat(i);
        if less(sequence.get(&i), sequence.get(&after_i)) {
            let mut j = end.clone();
            loop {
                j = sequence.retreat(j);
                if less(sequence.get(&i), sequence.get(&j)) {
                    break;
                }
            }
            sequence.swap(&i, &j);
            // the suffix after i is descending by construction
            reverse(sequence, after_i, end);
            return true;
        }
        if i == begin {
            // weakly descending end-to-end: wrap to the minimum
            reverse(sequence, begin, end);
            return false;
        }
    }
}

/// The predecessor is the successor under the argument-flipped order.
fn predecessor<S, L>(sequence: &mut S, less: &L) -> bool
where
    S: MutableSequence + ?Sized,
    L: Fn(&S::Item, &S::Item) -> bool,
{
    successor(sequence, &|x: &S::Item, y: &S::Item| less(y, x))
}
