//! Element access and bounds-safe sub-range extraction.

/// Returns the first element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Alias of [`first`].
#[inline]
pub fn head<T>(sequence: &[T]) -> Option<&T> {
    first(sequence)
}

/// Returns the last element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Copies the elements in `start..end` into a new `Vec`.
///
/// `end` defaults to the length of the sequence and is clamped to it. The
/// result is empty when `start` lies past the end of the sequence or after
/// `end`; this function never panics on out-of-range positions.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::slice;
///
/// let values = [1, 2, 3, 4, 5];
/// assert_eq!(slice(&values, 0, Some(2)), vec![1, 2]);
/// assert_eq!(slice(&values, 3, None), vec![4, 5]);
/// assert_eq!(slice(&values, 0, Some(9)), vec![1, 2, 3, 4, 5]);
/// assert!(slice(&values, 8, Some(2)).is_empty());
/// ```
pub fn slice<T: Clone>(sequence: &[T], start: usize, end: Option<usize>) -> Vec<T> {
    let end = end.map_or(sequence.len(), |end| end.min(sequence.len()));
    if start > sequence.len() || start > end {
        return Vec::new();
    }
    sequence[start..end].to_vec()
}

/// Copies the sequence without its first `count` elements.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::drop;
///
/// assert_eq!(drop(&[1, 2, 3], 1), vec![2, 3]);
/// assert_eq!(drop(&[1, 2, 3], 0), vec![1, 2, 3]);
/// assert!(drop(&[1, 2, 3], 9).is_empty());
/// ```
#[inline]
pub fn drop<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    slice(sequence, count, None)
}

/// Copies the sequence without its last `count` elements.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::drop_right;
///
/// assert_eq!(drop_right(&[1, 2, 3], 1), vec![1, 2]);
/// assert_eq!(drop_right(&[1, 2, 3], 0), vec![1, 2, 3]);
/// assert!(drop_right(&[1, 2, 3], 9).is_empty());
/// ```
#[inline]
pub fn drop_right<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    slice(sequence, 0, Some(sequence.len().saturating_sub(count)))
}

/// Copies the sequence, skipping leading elements while `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::drop_while;
///
/// assert_eq!(drop_while(&[1, 2, 3, 4, 5], |value| *value < 3), vec![3, 4, 5]);
/// ```
pub fn drop_while<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let start = sequence
        .iter()
        .position(|element| !predicate(element))
        .unwrap_or(sequence.len());
    slice(sequence, start, None)
}

/// Copies the sequence, skipping trailing elements while `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::drop_right_while;
///
/// assert_eq!(drop_right_while(&[1, 2, 3, 4, 5], |value| *value > 3), vec![1, 2, 3]);
/// ```
pub fn drop_right_while<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let end = sequence
        .iter()
        .rposition(|element| !predicate(element))
        .map_or(0, |index| index + 1);
    slice(sequence, 0, Some(end))
}
