//! Set reconciliation over ordered sequences.
//!
//! This module computes difference, intersection, symmetric difference (xor),
//! union and unique over plain slices, under a pluggable notion of
//! "the same element" (see [`crate::equivalence`]).
//!
//! Every family comes in three flavours that only differ in the strategy
//! they build before handing off to [`SetReconciler`]:
//!
//! | natural          | keyed (projection)  | custom comparator     |
//! |------------------|---------------------|-----------------------|
//! | [`difference`]   | [`difference_by`]   | [`difference_with`]   |
//! | [`intersection`] | [`intersection_by`] | [`intersection_with`] |
//! | [`xor`]          | [`xor_by`]          | [`xor_with`]          |
//! | [`union`]        | [`union_by`]        | [`union_with`]        |
//! | [`unique`]       | [`unique_by`]       | [`unique_with`]       |
//!
//! # Guarantees
//!
//! - Inputs are never modified; outputs are always freshly allocated
//! - Surviving elements keep the relative order in which the scans meet them
//! - No sequences in gives an empty result; a single sequence comes back as a copy
//! - Every operation terminates after a bounded number of comparisons
//!
//! Comparisons are linear scans, so elements need neither `Hash` nor `Ord`
//! and every operation is quadratic in the worst case.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::reconcile::{difference, intersection_with, xor, xor_by};
//!
//! assert_eq!(difference(&[3, 2, 1], &[4, 2]), vec![3, 1]);
//! assert_eq!(xor(&[vec![2, 1], vec![4, 2]]), vec![1, 4]);
//! assert_eq!(xor_by(&[vec![2.1, 1.2], vec![4.3, 2.4]], |value: &f64| value.floor()), vec![1.2, 4.3]);
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let common = intersection_with(
//!     &[
//!         vec![Point { x: 1, y: 2 }, Point { x: 2, y: 1 }],
//!         vec![Point { x: 1, y: 1 }, Point { x: 1, y: 2 }],
//!     ],
//!     |left, right| left.x == right.x && left.y == right.y,
//! );
//! assert_eq!(common, vec![Point { x: 1, y: 2 }]);
//! ```

mod reconciler;

pub use reconciler::SetReconciler;

use crate::equivalence::{CustomEquality, KeyedEquality, NaturalEquality};

/// Returns the elements of `base`, in order, that are not equal to any element of `exclude`.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::difference;
///
/// assert_eq!(difference(&[3, 2, 1], &[4, 2]), vec![3, 1]);
/// ```
pub fn difference<T>(base: &[T], exclude: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    SetReconciler::new(NaturalEquality).difference(base, exclude)
}

/// Like [`difference`], comparing the keys `key` projects from each element.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::difference_by;
///
/// assert_eq!(difference_by(&[2.1, 1.2], &[2.3, 3.4], |value: &f64| value.floor()), vec![1.2]);
/// ```
pub fn difference_by<T, K, F>(base: &[T], exclude: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    SetReconciler::new(KeyedEquality::<F, K>::new(key)).difference(base, exclude)
}

/// Like [`difference`], comparing elements with `comparator`.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::difference_with;
///
/// let words = ["Apple", "banana", "Cherry"];
/// let seen = ["apple", "cherry"];
/// assert_eq!(difference_with(&words, &seen, |left, right| left.eq_ignore_ascii_case(right)), vec!["banana"]);
/// ```
pub fn difference_with<T, F>(base: &[T], exclude: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    SetReconciler::new(CustomEquality::new(comparator)).difference(base, exclude)
}

/// Returns the elements of the first sequence that are equal to some element
/// of every other sequence, in their original order.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::intersection;
///
/// assert_eq!(intersection(&[vec![2, 1], vec![4, 2], vec![1, 2]]), vec![2]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    SetReconciler::new(NaturalEquality).intersection(sequences)
}

/// Like [`intersection`], comparing the keys `key` projects from each element.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::intersection_by;
///
/// assert_eq!(intersection_by(&[vec![2.1, 1.2], vec![2.3, 3.4]], |value: &f64| value.floor()), vec![2.1]);
/// ```
pub fn intersection_by<T, S, K, F>(sequences: &[S], key: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    SetReconciler::new(KeyedEquality::<F, K>::new(key)).intersection(sequences)
}

/// Like [`intersection`], comparing elements with `comparator`.
pub fn intersection_with<T, S, F>(sequences: &[S], comparator: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> bool,
{
    SetReconciler::new(CustomEquality::new(comparator)).intersection(sequences)
}

/// Returns the symmetric difference of `sequences`, folded pairwise from the
/// last sequence back to the first.
///
/// See [`SetReconciler::xor`] for the exact fold and its ordering.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::xor;
///
/// assert_eq!(xor(&[vec![2, 1], vec![4, 2]]), vec![1, 4]);
/// ```
pub fn xor<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    SetReconciler::new(NaturalEquality).xor(sequences)
}

/// Like [`xor`], comparing the keys `key` projects from each element.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::xor_by;
///
/// assert_eq!(xor_by(&[vec![2.1, 1.2], vec![4.3, 2.4]], |value: &f64| value.floor()), vec![1.2, 4.3]);
/// ```
pub fn xor_by<T, S, K, F>(sequences: &[S], key: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    SetReconciler::new(KeyedEquality::<F, K>::new(key)).xor(sequences)
}

/// Like [`xor`], comparing elements with `comparator`.
pub fn xor_with<T, S, F>(sequences: &[S], comparator: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> bool,
{
    SetReconciler::new(CustomEquality::new(comparator)).xor(sequences)
}

/// Returns the distinct elements of all `sequences`, in order of first appearance.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::union;
///
/// assert_eq!(union(&[vec![2], vec![1, 2]]), vec![2, 1]);
/// ```
pub fn union<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    SetReconciler::new(NaturalEquality).union(sequences)
}

/// Like [`union`], comparing the keys `key` projects from each element.
pub fn union_by<T, S, K, F>(sequences: &[S], key: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    SetReconciler::new(KeyedEquality::<F, K>::new(key)).union(sequences)
}

/// Like [`union`], comparing elements with `comparator`.
pub fn union_with<T, S, F>(sequences: &[S], comparator: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> bool,
{
    SetReconciler::new(CustomEquality::new(comparator)).union(sequences)
}

/// Returns the distinct elements of `sequence`, in order of first appearance.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::unique;
///
/// assert_eq!(unique(&[2, 1, 2]), vec![2, 1]);
/// ```
pub fn unique<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    SetReconciler::new(NaturalEquality).unique(sequence)
}

/// Like [`unique`], comparing the keys `key` projects from each element.
///
/// # Examples
///
/// ```rust
/// use seqkit::reconcile::unique_by;
///
/// assert_eq!(unique_by(&[2.1, 1.2, 2.3], |value: &f64| value.floor()), vec![2.1, 1.2]);
/// ```
pub fn unique_by<T, K, F>(sequence: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    SetReconciler::new(KeyedEquality::<F, K>::new(key)).unique(sequence)
}

/// Like [`unique`], comparing elements with `comparator`.
pub fn unique_with<T, F>(sequence: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    SetReconciler::new(CustomEquality::new(comparator)).unique(sequence)
}
