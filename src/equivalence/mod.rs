//! Pluggable equivalence strategies.
//!
//! This module provides the [`Equivalence`] trait, which decides whether two
//! elements should be treated as "the same" during set reconciliation, and
//! its three standard implementations:
//!
//! - [`NaturalEquality`]: plain `==`
//! - [`KeyedEquality`]: `key(left) == key(right)` for a caller-supplied projection
//! - [`CustomEquality`]: an arbitrary caller-supplied comparator
//!
//! # Caller Responsibility
//!
//! A strategy is expected to describe an equivalence relation (reflexive,
//! symmetric and transitive). This is not checked: a comparator that breaks
//! these properties still runs to completion, but the results of
//! [`crate::reconcile`] operations then depend on the comparator's quirks.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::equivalence::{CustomEquality, Equivalence, KeyedEquality, NaturalEquality};
//!
//! assert!(NaturalEquality.equivalent(&1, &1));
//! assert!(!NaturalEquality.equivalent(&1, &2));
//!
//! let floor = KeyedEquality::new(|value: &f64| value.floor());
//! assert!(floor.equivalent(&2.1, &2.4));
//!
//! let case_insensitive =
//!     CustomEquality::new(|left: &String, right: &String| left.eq_ignore_ascii_case(right));
//! assert!(case_insensitive.equivalent(&"Rust".to_string(), &"rUST".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Decides whether two elements are equivalent.
///
/// Implementations are used by [`crate::reconcile::SetReconciler`] for every
/// pairwise comparison it performs, so `equivalent` should be cheap and free
/// of observable side effects.
///
/// # Examples
///
/// ```rust
/// use seqkit::equivalence::Equivalence;
///
/// struct SameParity;
///
/// impl Equivalence<i32> for SameParity {
///     fn equivalent(&self, left: &i32, right: &i32) -> bool {
///         left % 2 == right % 2
///     }
/// }
///
/// assert!(SameParity.equivalent(&2, &8));
/// assert!(!SameParity.equivalent(&2, &7));
/// ```
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equivalent under this strategy.
    fn equivalent(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for &E {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (**self).equivalent(left, right)
    }
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for Box<E> {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (**self).equivalent(left, right)
    }
}

/// Equivalence by the element type's own `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use seqkit::equivalence::{Equivalence, NaturalEquality};
///
/// assert!(NaturalEquality.equivalent("a", "a"));
/// assert!(!NaturalEquality.equivalent(&1.0, &f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;

impl<T: PartialEq + ?Sized> Equivalence<T> for NaturalEquality {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Equivalence by comparing projected keys.
///
/// Two elements are equivalent when `key(left) == key(right)`. The projection
/// may map into the element type itself (such as `f64::floor`) or into any
/// other `PartialEq` type.
///
/// # Type Parameters
///
/// * `F` - The projection function
/// * `K` - The key type produced by the projection
///
/// # Examples
///
/// ```rust
/// use seqkit::equivalence::{Equivalence, KeyedEquality};
///
/// let by_length = KeyedEquality::new(|word: &&str| word.len());
/// assert!(by_length.equivalent(&"cat", &"dog"));
/// assert!(!by_length.equivalent(&"cat", &"horse"));
/// ```
pub struct KeyedEquality<F, K> {
    key: F,
    marker: PhantomData<fn() -> K>,
}

impl<F, K> KeyedEquality<F, K> {
    /// Creates a strategy that compares elements by the keys `key` projects.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self {
            key,
            marker: PhantomData,
        }
    }

    /// Returns the projection function.
    #[inline]
    pub const fn key(&self) -> &F {
        &self.key
    }
}

impl<T, F, K> Equivalence<T> for KeyedEquality<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: PartialEq,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.key)(left) == (self.key)(right)
    }
}

impl<F: Clone, K> Clone for KeyedEquality<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<F: Copy, K> Copy for KeyedEquality<F, K> {}

impl<F, K> fmt::Debug for KeyedEquality<F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeyedEquality")
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

/// Equivalence by a caller-supplied comparator.
///
/// The comparator is trusted as-is; see the module documentation for what
/// happens when it is not an equivalence relation.
///
/// # Examples
///
/// ```rust
/// use seqkit::equivalence::{CustomEquality, Equivalence};
///
/// let within_one = CustomEquality::new(|left: &i32, right: &i32| (left - right).abs() <= 1);
/// assert!(within_one.equivalent(&3, &4));
/// assert!(!within_one.equivalent(&3, &5));
/// ```
#[derive(Clone, Copy)]
pub struct CustomEquality<F> {
    comparator: F,
}

impl<F> CustomEquality<F> {
    /// Creates a strategy backed by `comparator`.
    #[inline]
    pub const fn new(comparator: F) -> Self {
        Self { comparator }
    }

    /// Returns the comparator.
    #[inline]
    pub const fn comparator(&self) -> &F {
        &self.comparator
    }
}

impl<T, F> Equivalence<T> for CustomEquality<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.comparator)(left, right)
    }
}

impl<F> fmt::Debug for CustomEquality<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("CustomEquality").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(NaturalEquality: Send, Sync, Copy);
static_assertions::assert_impl_all!(KeyedEquality<fn(&f64) -> f64, f64>: Send, Sync, Copy);
static_assertions::assert_impl_all!(CustomEquality<fn(&i32, &i32) -> bool>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    #[case(-7, -7, true)]
    fn test_natural_equality(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(NaturalEquality.equivalent(&left, &right), expected);
    }

    #[rstest]
    fn test_natural_equality_on_unsized_str() {
        assert!(NaturalEquality.equivalent("abc", "abc"));
        assert!(!NaturalEquality.equivalent("abc", "abd"));
    }

    #[rstest]
    #[case(2.1, 2.9, true)]
    #[case(2.9, 3.0, false)]
    #[case(-0.5, -0.1, true)]
    fn test_keyed_equality_floor(#[case] left: f64, #[case] right: f64, #[case] expected: bool) {
        let strategy = KeyedEquality::new(|value: &f64| value.floor());
        assert_eq!(strategy.equivalent(&left, &right), expected);
    }

    #[rstest]
    fn test_keyed_equality_projects_into_other_type() {
        let strategy = KeyedEquality::new(|point: &Point| point.x);
        assert!(strategy.equivalent(&Point { x: 1, y: 2 }, &Point { x: 1, y: 9 }));
        assert!(!strategy.equivalent(&Point { x: 1, y: 2 }, &Point { x: 2, y: 2 }));
    }

    #[rstest]
    fn test_custom_equality_field_pair() {
        let strategy =
            CustomEquality::new(|left: &Point, right: &Point| left.x == right.x && left.y == right.y);
        assert!(strategy.equivalent(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
        assert!(!strategy.equivalent(&Point { x: 1, y: 2 }, &Point { x: 2, y: 1 }));
    }

    #[rstest]
    fn test_borrowed_and_boxed_strategies_delegate() {
        let strategy = KeyedEquality::new(|value: &i32| value % 3);
        let borrowed = &strategy;
        let boxed: Box<dyn Equivalence<i32>> = Box::new(CustomEquality::new(|l: &i32, r: &i32| l == r));

        assert!(borrowed.equivalent(&1, &4));
        assert!(boxed.equivalent(&5, &5));
        assert!(!boxed.equivalent(&5, &6));
    }

    #[rstest]
    fn test_debug_output_does_not_expose_closures() {
        let keyed: KeyedEquality<_, i64> = KeyedEquality::new(|value: &i32| i64::from(*value));
        let custom = CustomEquality::new(|l: &i32, r: &i32| l == r);
        assert!(keyed.equivalent(&3, &3));

        assert!(format!("{keyed:?}").starts_with("KeyedEquality"));
        assert_eq!(format!("{custom:?}"), "CustomEquality { .. }");
    }
}
