//! # seqkit
//!
//! Collection helpers for Rust: slicing, traversal, sampling and set
//! reconciliation with pluggable equivalence.
//!
//! ## Overview
//!
//! This library collects the small collection utilities found in
//! "functional helpers" toolkits and gives them a Rust-shaped API. It includes:
//!
//! - **Sequence Utilities**: first/last access, bounds-safe slicing, drop,
//!   traversal, grouping, chunking, flattening and fill
//! - **Equivalence Strategies**: natural equality, keyed projection and
//!   custom comparators behind one [`Equivalence`](equivalence::Equivalence) trait
//! - **Set Reconciliation**: order-preserving difference, intersection,
//!   symmetric difference (xor), union and unique over N sequences
//! - **Randomness**: sample, sample size and shuffle with an injected generator
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence utilities
//! - `reconcile`: Equivalence strategies and set reconciliation
//! - `random`: Sampling and shuffling
//! - `serde`: Serde support for [`Nested`](sequence::Nested)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqkit::reconcile::{difference, intersection, xor};
//! use seqkit::sequence::slice;
//!
//! assert_eq!(difference(&[3, 2, 1], &[4, 2]), vec![3, 1]);
//! assert_eq!(intersection(&[vec![2, 1], vec![4, 2], vec![1, 2]]), vec![2]);
//! assert_eq!(xor(&[vec![2, 1], vec![4, 2]]), vec![1, 4]);
//! assert_eq!(slice(&[1, 2, 3, 4, 5], 2, Some(5)), vec![3, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits and types of this crate. The free functions stay in
/// their modules, since names like `drop`, `filter` or `union` would shadow
/// common identifiers in a glob import.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
///
/// let reconciler = SetReconciler::new(NaturalEquality);
/// assert_eq!(reconciler.unique(&[1, 1, 2]), vec![1, 2]);
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::Nested;

    #[cfg(feature = "reconcile")]
    pub use crate::equivalence::{CustomEquality, Equivalence, KeyedEquality, NaturalEquality};

    #[cfg(feature = "reconcile")]
    pub use crate::reconcile::SetReconciler;

    #[cfg(feature = "random")]
    pub use crate::random::RandomRangeError;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "reconcile")]
pub mod equivalence;

#[cfg(feature = "reconcile")]
pub mod reconcile;

#[cfg(feature = "random")]
pub mod random;
