//! Sequence utilities.
//!
//! This module provides small, independent helpers over ordered sequences
//! (slices) and, where it makes sense, over any iterable collection:
//!
//! - **Access**: [`first`], [`head`], [`last`], [`slice`], [`drop`],
//!   [`drop_right`], [`drop_while`], [`drop_right_while`]
//! - **Traversal**: [`each`], [`each_right`], [`map`], [`filter`], [`reject`],
//!   [`reduce`], [`reduce_right`], [`find`], [`find_last`], [`find_index`],
//!   [`find_last_index`], [`every`], [`some`], [`contains`], [`group_by`], [`size`]
//! - **Fallible traversal**: [`try_each`], [`try_map`], [`try_filter`], [`try_reduce`]
//! - **Shaping**: [`compact`], [`chunk`], [`concat`], [`concat_all`],
//!   [`flatten`], [`flatten_deep`] and the [`Nested`] tree they operate on
//! - **Fill**: [`fill`], [`fill_indexes`]
//!
//! # Functional Programming Principles
//!
//! - **Immutability**: inputs are borrowed and never modified; every helper
//!   that produces a sequence returns a newly allocated `Vec`
//! - **Ownership in, ownership out**: the fill helpers take the sequence by
//!   value and hand it back, so no caller-visible buffer is mutated behind
//!   its back
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{chunk, drop_while, group_by, slice};
//!
//! let values = [1, 2, 3, 4, 5];
//!
//! assert_eq!(slice(&values, 1, Some(3)), vec![2, 3]);
//! assert_eq!(slice(&values, 8, None), Vec::<i32>::new());
//! assert_eq!(drop_while(&values, |value| *value < 3), vec![3, 4, 5]);
//! assert_eq!(chunk(&values, 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let groups = group_by(&values, |value| value % 2 == 0);
//! assert_eq!(groups[&true], vec![2, 4]);
//! assert_eq!(groups[&false], vec![1, 3, 5]);
//! ```

mod access;
mod fill;
mod shape;
mod traverse;

pub use access::{drop, drop_right, drop_right_while, drop_while, first, head, last, slice};
pub use fill::{fill, fill_indexes};
pub use shape::{Nested, chunk, compact, concat, concat_all, flatten, flatten_deep};
pub use traverse::{
    contains, each, each_right, every, filter, find, find_index, find_last, find_last_index,
    for_each, for_each_right, group_by, includes, map, reduce, reduce_right, reject, size, some,
    try_each, try_filter, try_map, try_reduce,
};
