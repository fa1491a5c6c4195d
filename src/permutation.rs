//! This module implements the permutation check: deciding whether two
//! sequences hold the same elements with the same multiplicities under a
//! caller-supplied equivalence relation.
//!
//! The relation only needs to be a genuine equivalence over the compared
//! keys; no ordering or hashability is assumed. The check therefore runs in
//! O(d·m) comparisons for a remainder of m elements with d distinct keys
//! (worst case O(m²)) and O(1) scratch space, instead of sorting or
//! building a hash table.
//!
//! Two families of entry points exist. The `is_permutation*` family takes
//! two bounded sequences. The `is_permutation_from*` family takes the second
//! sequence as a start position only, its extent implied by the first
//! sequence's length; it reports [Error::SecondSequenceExhausted] when the
//! second sequence turns out to be too short instead of walking out of
//! bounds.

use crate::error::Error;
use crate::sequence::{advance_by, distance, Sequence};

/// Check whether `b` is a permutation of `a`, comparing elements with `==`.
///
/// The two sequences may be different container types, as long as they hold
/// the same element type.
pub fn is_permutation<A, B>(a: &A, b: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    check_bounded(
        a,
        b,
        &|x: &A::Item, y: &A::Item| x == y,
        &|x: &A::Item, y: &A::Item| x == y,
    )
}

/// Check whether `b` is a permutation of `a` under the given equivalence
/// relation.
///
/// `equiv` must be reflexive, symmetric, and transitive over the compared
/// elements; it does not have to be consistent with `==` or with any order.
pub fn is_permutation_by<A, B, E>(a: &A, b: &B, equiv: E) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    E: Fn(&A::Item, &A::Item) -> bool,
{
    check_bounded(a, b, &equiv, &equiv)
}

/// Check whether `b` is a permutation of `a`, comparing the projected keys
/// of the elements with `==`.
///
/// Each sequence carries its own projection into a common key type, so the
/// two sequences may hold entirely different element types.
pub fn is_permutation_by_keys<A, B, K, P1, P2>(a: &A, b: &B, proj1: P1, proj2: P2) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    K: PartialEq,
    P1: Fn(&A::Item) -> K,
    P2: Fn(&B::Item) -> K,
{
    check_bounded(
        a,
        b,
        &|x: &A::Item, y: &A::Item| proj1(x) == proj1(y),
        &|x: &A::Item, y: &B::Item| proj1(x) == proj2(y),
    )
}

/// Check whether `b` is a permutation of `a`, comparing projected keys with
/// the given equivalence relation.
pub fn is_permutation_by_keys_with<A, B, K, P1, P2, E>(
    a: &A,
    b: &B,
    proj1: P1,
    proj2: P2,
    equiv: E,
) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P1: Fn(&A::Item) -> K,
    P2: Fn(&B::Item) -> K,
    E: Fn(&K, &K) -> bool,
{
    check_bounded(
        a,
        b,
        &|x: &A::Item, y: &A::Item| equiv(&proj1(x), &proj1(y)),
        &|x: &A::Item, y: &B::Item| equiv(&proj1(x), &proj2(y)),
    )
}

/// Check whether the elements of `b` starting at `b_start` are a permutation
/// of `a`, comparing elements with `==`.
///
/// Exactly `a`'s length of elements is taken from `b`; trailing elements of
/// `b` beyond that are ignored. Returns [Error::SecondSequenceExhausted] if
/// `b` holds fewer elements past `b_start` than `a`'s length.
pub fn is_permutation_from<A, B>(a: &A, b: &B, b_start: B::Position) -> Result<bool, Error>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    check_from(
        a,
        b,
        b_start,
        &|x: &A::Item, y: &A::Item| x == y,
        &|x: &A::Item, y: &A::Item| x == y,
    )
}

/// Check whether the elements of `b` starting at `b_start` are a permutation
/// of `a` under the given equivalence relation.
pub fn is_permutation_from_by<A, B, E>(
    a: &A,
    b: &B,
    b_start: B::Position,
    equiv: E,
) -> Result<bool, Error>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    E: Fn(&A::Item, &A::Item) -> bool,
{
    check_from(a, b, b_start, &equiv, &equiv)
}

/// Check whether the elements of `b` starting at `b_start` are a permutation
/// of `a`, comparing the projected keys of the elements with `==`.
pub fn is_permutation_from_by_keys<A, B, K, P1, P2>(
    a: &A,
    b: &B,
    b_start: B::Position,
    proj1: P1,
    proj2: P2,
) -> Result<bool, Error>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    K: PartialEq,
    P1: Fn(&A::Item) -> K,
    P2: Fn(&B::Item) -> K,
{
    check_from(
        a,
        b,
        b_start,
        &|x: &A::Item, y: &A::Item| proj1(x) == proj1(y),
        &|x: &A::Item, y: &B::Item| proj1(x) == proj2(y),
    )
}

/// Check whether the elements of `b` starting at `b_start` are a permutation
/// of `a`, comparing projected keys with the given equivalence relation.
pub fn is_permutation_from_by_keys_with<A, B, K, P1, P2, E>(
    a: &A,
    b: &B,
    b_start: B::Position,
    proj1: P1,
    proj2: P2,
    equiv: E,
) -> Result<bool, Error>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P1: Fn(&A::Item) -> K,
    P2: Fn(&B::Item) -> K,
    E: Fn(&K, &K) -> bool,
{
    check_from(
        a,
        b,
        b_start,
        &|x: &A::Item, y: &A::Item| equiv(&proj1(x), &proj1(y)),
        &|x: &A::Item, y: &B::Item| equiv(&proj1(x), &proj2(y)),
    )
}

/// Both-bounded check. `equiv_aa` compares two elements of `a`, `equiv_ab`
/// compares an element of `a` against one of `b`; the callers derive both
/// from one relation and the projections.
fn check_bounded<A, B, Eaa, Eab>(a: &A, b: &B, equiv_aa: &Eaa, equiv_ab: &Eab) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    Eaa: Fn(&A::Item, &A::Item) -> bool,
    Eab: Fn(&A::Item, &B::Item) -> bool,
{
    let sized = match (a.known_len(), b.known_len()) {
        (Some(len_a), Some(len_b)) => {
            if len_a != len_b {
                log::trace!("length fast path rejects: {len_a} != {len_b}");
                return false;
            }
            true
        }
        _ => false,
    };

    // shorten both sequences by trimming the equal prefix
    let a_end = a.end();
    let b_end = b.end();
    let mut i = a.start();
    let mut j = b.start();
    while i != a_end && j != b_end {
        if !equiv_ab(a.get(&i), b.get(&j)) {
            break;
        }
        i = a.advance(i);
        j = b.advance(j);
    }
    if i == a_end || j == b_end {
        return i == a_end && j == b_end;
    }

    // without O(1) lengths the remainders must be measured the slow way
    if !sized {
        let remainder_a = distance(a, &i, &a_end);
        let remainder_b = distance(b, &j, &b_end);
        if remainder_a != remainder_b {
            return false;
        }
    }

    count_multiplicities(a, &i, &a_end, b, &j, &b_end, equiv_aa, equiv_ab)
}

/// Start-position-only check: `b`'s extent is implied by `a`'s length.
fn check_from<A, B, Eaa, Eab>(
    a: &A,
    b: &B,
    b_start: B::Position,
    equiv_aa: &Eaa,
    equiv_ab: &Eab,
) -> Result<bool, Error>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    Eaa: Fn(&A::Item, &A::Item) -> bool,
    Eab: Fn(&A::Item, &B::Item) -> bool,
{
    let a_end = a.end();
    let b_true_end = b.end();
    let mut i = a.start();
    let mut j = b_start;
    let mut consumed = 0;

    // shorten both sequences by trimming the equal prefix
    while i != a_end {
        if j == b_true_end {
            return Err(Error::SecondSequenceExhausted {
                required: consumed + distance(a, &i, &a_end),
                available: consumed,
            });
        }
        if !equiv_ab(a.get(&i), b.get(&j)) {
            break;
        }
        i = a.advance(i);
        j = b.advance(j);
        consumed += 1;
    }
    if i == a_end {
        return Ok(true);
    }

    let remainder = distance(a, &i, &a_end);
    // a lone mismatched element cannot be balanced by any counting
    if remainder == 1 {
        return Ok(false);
    }
    let Some(b_end) = advance_by(b, j.clone(), remainder) else {
        return Err(Error::SecondSequenceExhausted {
            required: consumed + remainder,
            available: consumed + distance(b, &j, &b_true_end),
        });
    };

    Ok(count_multiplicities(
        a, &i, &a_end, b, &j, &b_end, equiv_aa, equiv_ab,
    ))
}

/// For each distinct key in `a`'s remainder, compare its multiplicity in
/// `a`'s remainder against its multiplicity in `b`'s remainder. Both
/// remainders are known to have equal length at this point.
#[allow(clippy::too_many_arguments)]
fn count_multiplicities<A, B, Eaa, Eab>(
    a: &A,
    a_from: &A::Position,
    a_end: &A::Position,
    b: &B,
    b_from: &B::Position,
    b_end: &B::Position,
    equiv_aa: &Eaa,
    equiv_ab: &Eab,
) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    Eaa: Fn(&A::Item, &A::Item) -> bool,
    Eab: Fn(&A::Item, &B::Item) -> bool,
{
    log::trace!("entering multiplicity counting");

    let mut i = a_from.clone();
    'distinct: while i != *a_end {
        // skip keys an earlier position has already counted
        let mut j = a_from.clone();
        while j != i {
            if equiv_aa(a.get(&j), a.get(&i)) {
                i = a.advance(i);
                continue 'distinct;
            }
            j = a.advance(j);
        }

        // occurrences of the key in b's remainder
        let mut count_b = 0_usize;
        let mut k = b_from.clone();
        while k != *b_end {
            if equiv_ab(a.get(&i), b.get(&k)) {
                count_b += 1;
            }
            k = b.advance(k);
        }
        if count_b == 0 {
            return false;
        }

        // occurrences in a's remainder from i on, starting at 1 for i itself
        let mut count_a = 1_usize;
        let mut j = a.advance(i.clone());
        while j != *a_end {
            if equiv_aa(a.get(&i), a.get(&j)) {
                count_a += 1;
            }
            j = a.advance(j);
        }
        if count_a != count_b {
            return false;
        }

        i = a.advance(i);
    }
    true
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use quickcheck_macros::quickcheck;
    use rand::seq::SliceRandom;
    use test_log::test;

    use super::{
        is_permutation, is_permutation_by, is_permutation_by_keys, is_permutation_by_keys_with,
        is_permutation_from, is_permutation_from_by, is_permutation_from_by_keys,
        is_permutation_from_by_keys_with,
    };
    use crate::error::Error;
    use crate::sequence::Window;

    #[quickcheck]
    fn permutation_is_reflexive(vec: Vec<u8>) -> bool {
        is_permutation(vec.as_slice(), vec.as_slice())
    }

    #[quickcheck]
    fn permutation_is_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
        is_permutation(a.as_slice(), b.as_slice()) == is_permutation(b.as_slice(), a.as_slice())
    }

    #[quickcheck]
    fn rotation_is_a_permutation(mut vec: Vec<u16>) -> bool {
        let original = vec.clone();
        if !vec.is_empty() {
            vec.rotate_left(1);
        }
        is_permutation(original.as_slice(), vec.as_slice())
    }

    #[quickcheck]
    fn extra_element_is_no_permutation(vec: Vec<u8>, extra: u8) -> bool {
        let mut longer = vec.clone();
        longer.push(extra);
        !is_permutation(vec.as_slice(), longer.as_slice())
    }

    #[test]
    fn shuffled_copy_is_a_permutation() {
        let original: Vec<u32> = (0..64).collect();
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut rand::thread_rng());

        assert!(is_permutation(original.as_slice(), shuffled.as_slice()));
    }

    #[test]
    fn multiset_equality() {
        assert!(is_permutation(&[3, 1, 2][..], &[1, 2, 3][..]));
        assert!(!is_permutation(&[1, 1, 2][..], &[1, 2, 2][..]));
        assert!(!is_permutation(&[1, 2, 2][..], &[1, 1, 2][..]));
        assert!(is_permutation(&[1, 1, 2, 2][..], &[2, 1, 2, 1][..]));
    }

    #[test]
    fn empty_sequences() {
        let empty: &[i32] = &[];
        assert!(is_permutation(empty, empty));
        assert!(!is_permutation(empty, &[1][..]));
        assert!(!is_permutation(&[1][..], empty));
    }

    #[test]
    fn length_mismatch_rejects() {
        assert!(!is_permutation(&[1, 2][..], &[1, 2, 3][..]));
        assert!(!is_permutation(&[1, 2, 3][..], &[1, 2][..]));
    }

    #[test]
    fn equal_prefix_is_trimmed() {
        // shares a long equal prefix, differs in the tail's order only
        assert!(is_permutation(
            &[1, 2, 3, 4, 5, 6, 9, 7, 8][..],
            &[1, 2, 3, 4, 5, 6, 7, 8, 9][..]
        ));
    }

    #[test]
    fn equivalence_modulo_two() {
        let equiv = |x: &i32, y: &i32| x % 2 == y % 2;
        assert!(is_permutation_by(&[1, 3][..], &[3, 5][..], equiv));
        assert!(is_permutation_by(&[1, 2][..], &[4, 7][..], equiv));
        assert!(!is_permutation_by(&[1, 2][..], &[2, 4][..], equiv));
    }

    #[test]
    fn projections_into_a_common_key() {
        let words: &[&str] = &["Foo", "BAR"];
        let other: &[String] = &["bar".to_string(), "foo".to_string()];
        assert!(is_permutation_by_keys(
            words,
            other,
            |w: &&str| w.to_lowercase(),
            |w: &String| w.to_lowercase(),
        ));

        let pairs: &[(char, i32)] = &[('a', 1), ('b', 2)];
        let plain: &[i32] = &[2, 1];
        assert!(is_permutation_by_keys(
            pairs,
            plain,
            |p: &(char, i32)| p.1,
            |v: &i32| *v,
        ));
        assert!(!is_permutation_by_keys(
            pairs,
            plain,
            |p: &(char, i32)| p.0 as i32,
            |v: &i32| *v,
        ));
    }

    #[test]
    fn projections_with_custom_equivalence() {
        let pairs: &[(char, i32)] = &[('a', 1), ('b', 4)];
        let plain: &[i32] = &[2, 3];
        // projected values agree modulo 2: {1, 4} vs {2, 3}
        assert!(is_permutation_by_keys_with(
            pairs,
            plain,
            |p: &(char, i32)| p.1,
            |v: &i32| *v,
            |x: &i32, y: &i32| x % 2 == y % 2,
        ));
    }

    #[test]
    fn mixed_container_types() {
        let slice: &[i32] = &[1, 2, 3];
        let deque: VecDeque<i32> = [3, 1, 2].into_iter().collect();
        assert!(is_permutation(slice, &deque));
        assert!(is_permutation(&deque, slice));
    }

    #[test]
    fn windows_take_the_unsized_path() {
        let a: &[i32] = &[0, 3, 1, 2, 0];
        let b: &[i32] = &[1, 2, 3];
        let window = Window::new(a, 1, 4);
        assert!(is_permutation(&window, b));
        assert!(is_permutation(b, &window));

        // unequal window lengths are caught by traversal distance
        let shorter = Window::new(a, 1, 3);
        assert!(!is_permutation(&shorter, b));

        let other: &[i32] = &[9, 3, 2, 1, 9, 9];
        assert!(is_permutation(&window, &Window::new(other, 1, 4)));
        assert!(!is_permutation(&window, &Window::new(other, 1, 5)));
    }

    #[test]
    fn start_position_shape() {
        let a: &[i32] = &[1, 2, 3];
        let b: &[i32] = &[9, 3, 2, 1, 7];
        assert_eq!(is_permutation_from(a, b, 1), Ok(true));
        assert_eq!(is_permutation_from(a, b, 2), Ok(false));

        // trailing elements beyond a's length are ignored
        let prefix: &[i32] = &[1, 2];
        assert_eq!(is_permutation_from(prefix, b, 3), Ok(false));
        assert_eq!(is_permutation_from(prefix, &[1, 2, 99][..], 0), Ok(true));

        // a lone mismatched remainder is false without counting
        assert_eq!(is_permutation_from(&[7][..], &[8, 9][..], 0), Ok(false));
    }

    #[test]
    fn start_position_shape_reports_exhaustion() {
        // second sequence ends during the prefix trim
        assert_eq!(
            is_permutation_from(&[1, 2, 3][..], &[1, 2][..], 0),
            Err(Error::SecondSequenceExhausted {
                required: 3,
                available: 2
            })
        );

        // second sequence ends while measuring out the remainder
        assert_eq!(
            is_permutation_from(&[1, 2, 3][..], &[9, 8, 1][..], 1),
            Err(Error::SecondSequenceExhausted {
                required: 3,
                available: 2
            })
        );

        assert_eq!(
            is_permutation_from(&[5, 6, 7][..], &[9, 5, 6][..], 1),
            Err(Error::SecondSequenceExhausted {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn start_position_shape_with_relations() {
        let equiv = |x: &i32, y: &i32| x % 2 == y % 2;
        assert_eq!(
            is_permutation_from_by(&[1, 3][..], &[8, 3, 5][..], 1, equiv),
            Ok(true)
        );

        assert_eq!(
            is_permutation_from_by_keys(
                &[('a', 2), ('b', 1)][..],
                &[9, 1, 2][..],
                1,
                |p: &(char, i32)| p.1,
                |v: &i32| *v,
            ),
            Ok(true)
        );

        assert_eq!(
            is_permutation_from_by_keys_with(
                &[('a', 1), ('b', 4)][..],
                &[7, 2, 3][..],
                1,
                |p: &(char, i32)| p.1,
                |v: &i32| *v,
                |x: &i32, y: &i32| x % 2 == y % 2,
            ),
            Ok(true)
        );
    }
}
