//! This crate provides two related capabilities over generic positional
//! sequences: deciding whether two sequences are permutations of one another
//! under a caller-supplied equivalence relation, and stepping a sequence in
//! place to its lexicographically next or previous arrangement under a
//! caller-supplied strict weak order.
//!
//! All algorithms are expressed against the traits in [sequence], so the same
//! code runs over slices, [`Vec`]s, [`VecDeque`](std::collections::VecDeque)s,
//! or any structure exposing forward or bidirectional positional traversal.
//! No sorting or hashing is performed; the relations only need to be genuine
//! equivalences or strict weak orders, not total orders or hashable keys.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod arrangement;
pub mod error;
pub mod permutation;
pub mod sequence;

pub use arrangement::{
    next_arrangement, next_arrangement_by, next_arrangement_by_key, prev_arrangement,
    prev_arrangement_by, prev_arrangement_by_key,
};
pub use error::Error;
pub use permutation::{
    is_permutation, is_permutation_by, is_permutation_by_keys, is_permutation_by_keys_with,
    is_permutation_from, is_permutation_from_by, is_permutation_from_by_keys,
    is_permutation_from_by_keys_with,
};
pub use sequence::{BidirectionalSequence, MutableSequence, Sequence, Window};
