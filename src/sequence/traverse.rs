//! Linear traversal helpers.
//!
//! Every helper visits elements in order (left to right, or right to left for
//! the `_right` variants) exactly once and stops early only where documented.

use std::collections::HashMap;
use std::hash::Hash;

/// Invokes `iteratee` on every element, left to right.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::each;
///
/// let mut visited = Vec::new();
/// each(&[1, 2, 3], |value| visited.push(*value));
/// assert_eq!(visited, vec![1, 2, 3]);
/// ```
#[inline]
pub fn each<T, F>(sequence: &[T], iteratee: F)
where
    F: FnMut(&T),
{
    sequence.iter().for_each(iteratee);
}

/// Alias of [`each`].
#[inline]
pub fn for_each<T, F>(sequence: &[T], iteratee: F)
where
    F: FnMut(&T),
{
    each(sequence, iteratee);
}

/// Invokes `iteratee` on every element, right to left.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::each_right;
///
/// let mut visited = Vec::new();
/// each_right(&[1, 2, 3], |value| visited.push(*value));
/// assert_eq!(visited, vec![3, 2, 1]);
/// ```
#[inline]
pub fn each_right<T, F>(sequence: &[T], iteratee: F)
where
    F: FnMut(&T),
{
    sequence.iter().rev().for_each(iteratee);
}

/// Alias of [`each_right`].
#[inline]
pub fn for_each_right<T, F>(sequence: &[T], iteratee: F)
where
    F: FnMut(&T),
{
    each_right(sequence, iteratee);
}

/// Invokes a fallible `iteratee` on every element, stopping at the first error.
///
/// # Errors
///
/// Returns the first error produced by `iteratee`; later elements are not visited.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::try_each;
///
/// let mut visited = Vec::new();
/// let result = try_each(&[1, 2, 3], |value| {
///     if *value == 2 {
///         return Err("two");
///     }
///     visited.push(*value);
///     Ok(())
/// });
/// assert_eq!(result, Err("two"));
/// assert_eq!(visited, vec![1]);
/// ```
pub fn try_each<T, E, F>(sequence: &[T], iteratee: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    sequence.iter().try_for_each(iteratee)
}

/// Builds a new `Vec` by applying `transform` to every element.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 2), vec![2, 4, 6]);
/// assert_eq!(map(&["a", "b"], |value| format!("Hello {value}")), vec!["Hello a", "Hello b"]);
/// ```
#[inline]
pub fn map<T, U, F>(sequence: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(transform).collect()
}

/// Fallible [`map`].
///
/// # Errors
///
/// Returns the first error produced by `transform`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2"], |text| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed: Result<Vec<i32>, _> = try_map(&["1", "x"], |text| text.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_map<T, U, E, F>(sequence: &[T], transform: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    sequence.iter().map(transform).collect()
}

/// Copies the elements `predicate` returns `true` for.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0), vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Fallible [`filter`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_filter<T, E, P>(sequence: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for element in sequence {
        if predicate(element)? {
            result.push(element.clone());
        }
    }
    Ok(result)
}

/// The opposite of [`filter`]: copies the elements `predicate` returns `false` for.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4, 5], |value| value % 2 == 0), vec![1, 3, 5]);
/// ```
pub fn reject<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(sequence, |element| !predicate(element))
}

/// Folds the sequence left to right, starting from `initial`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], 0, |sum, value| sum + value), 15);
/// assert_eq!(reduce(&["foo", "bar", "baz"], String::new(), |text, value| text + *value), "foobarbaz");
/// ```
#[inline]
pub fn reduce<T, A, F>(sequence: &[T], initial: A, combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    sequence.iter().fold(initial, combine)
}

/// Folds the sequence right to left, starting from `initial`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::reduce_right;
///
/// assert_eq!(
///     reduce_right(&["foo", "bar", "baz"], String::new(), |text, value| text + *value),
///     "bazbarfoo"
/// );
/// ```
#[inline]
pub fn reduce_right<T, A, F>(sequence: &[T], initial: A, combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    sequence.iter().rev().fold(initial, combine)
}

/// Fallible [`reduce`].
///
/// # Errors
///
/// Returns the first error produced by `combine`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::try_reduce;
///
/// let total = try_reduce(&[100_u8, 100, 100], 0_u8, |sum, value| sum.checked_add(*value).ok_or("overflow"));
/// assert_eq!(total, Err("overflow"));
/// ```
pub fn try_reduce<T, A, E, F>(sequence: &[T], initial: A, combine: F) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    sequence.iter().try_fold(initial, combine)
}

/// Returns `true` if `value` is present in the sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::contains;
///
/// assert!(contains(&["asd", "test", "123"], &"asd"));
/// assert!(!contains(&[1, 2, 3], &40));
/// ```
#[inline]
pub fn contains<T: PartialEq>(sequence: &[T], value: &T) -> bool {
    some(sequence, |element| element == value)
}

/// Alias of [`contains`].
#[inline]
pub fn includes<T: PartialEq>(sequence: &[T], value: &T) -> bool {
    contains(sequence, value)
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first element it does not hold for. An empty sequence
/// satisfies every predicate.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::every;
///
/// assert!(every(&[0, 10, 28], |value| value % 2 == 0));
/// assert!(!every(&[0, 11, 28], |value| value % 2 == 0));
/// ```
#[inline]
pub fn every<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().all(predicate)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first element it holds for.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::some;
///
/// assert!(some(&[11, 10, 22], |value| value % 2 == 0));
/// assert!(!some(&[3, 11, 25], |value| value % 2 == 0));
/// ```
#[inline]
pub fn some<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns the first element `predicate` holds for.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find;
///
/// assert_eq!(find(&[1, 2, 3, 4], |value| value % 2 == 0), Some(&2));
/// assert_eq!(find(&[1, 2, 3, 4], |value| *value > 10), None);
/// ```
pub fn find<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().find(|element| predicate(element))
}

/// Returns the last element `predicate` holds for.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find_last;
///
/// assert_eq!(find_last(&[1, 2, 3, 4], |value| value % 2 == 0), Some(&4));
/// assert_eq!(find_last(&[1, 2, 3, 4], |value| *value > 10), None);
/// ```
pub fn find_last<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().rev().find(|element| predicate(element))
}

/// Returns the position of the first element `predicate` holds for.
///
/// This is the linear scan the set reconciliation engine is built on.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find_index;
///
/// assert_eq!(find_index(&[1, 2, 3, 4], |value| value % 2 == 0), Some(1));
/// assert_eq!(find_index(&[1, 2, 3, 4], |value| *value > 100), None);
/// ```
#[inline]
pub fn find_index<T, P>(sequence: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().position(predicate)
}

/// Returns the position of the last element `predicate` holds for.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find_last_index;
///
/// assert_eq!(find_last_index(&[1, 2, 3, 4], |value| value % 2 == 0), Some(3));
/// assert_eq!(find_last_index(&[1, 2, 3, 4], |value| *value > 100), None);
/// ```
#[inline]
pub fn find_last_index<T, P>(sequence: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().rposition(predicate)
}

/// Groups copies of the elements by the key `iteratee` computes for them.
///
/// Within each group, elements keep their input order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5], |value| if value % 2 == 0 { "even" } else { "odd" });
/// assert_eq!(groups["even"], vec![2, 4]);
/// assert_eq!(groups["odd"], vec![1, 3, 5]);
/// ```
pub fn group_by<T, K, F>(sequence: &[T], mut iteratee: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for element in sequence {
        groups
            .entry(iteratee(element))
            .or_default()
            .push(element.clone());
    }
    groups
}

/// Returns the number of elements in any collection, including maps.
///
/// Uses the iterator's size hint when it is exact and counts otherwise.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqkit::sequence::size;
///
/// assert_eq!(size(&[1, 2, 3, 4]), 4);
/// assert_eq!(size(Vec::<i32>::new()), 0);
///
/// let ages: HashMap<&str, u32> = [("khoi", 1), ("toan", 2)].into_iter().collect();
/// assert_eq!(size(&ages), 2);
/// assert_eq!(size((0..10).filter(|value| value % 3 == 0)), 4);
/// ```
pub fn size<I: IntoIterator>(collection: I) -> usize {
    let iterator = collection.into_iter();
    match iterator.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => iterator.count(),
    }
}
