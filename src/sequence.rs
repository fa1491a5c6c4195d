//! This module defines the positional traversal traits the algorithms of
//! this crate are written against, together with generic helper operations
//! and implementations for the common standard-library containers.

pub mod traversal;
pub mod window;

pub use traversal::{
    advance_by, distance, reverse, BidirectionalSequence, MutableSequence, Sequence,
};
pub use window::Window;
