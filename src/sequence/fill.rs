//! Fill helpers.
//!
//! Both helpers take the sequence by value and return it, so the caller
//! decides whether to keep the old binding around (by cloning first) or to
//! hand over the buffer.

/// Overwrites the positions `start..end` with clones of `value`.
///
/// `end` defaults to the length of the sequence and is clamped to it; a
/// `start` past the end (or after `end`) leaves the sequence untouched.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::fill;
///
/// let values = fill(vec![1, 2, 3], 99, 0, None);
/// assert_eq!(values, vec![99, 99, 99]);
///
/// let values = fill(values, 88, 1, None);
/// assert_eq!(values, vec![99, 88, 88]);
///
/// let values = fill(values, 100, 1, Some(3));
/// assert_eq!(values, vec![99, 100, 100]);
/// ```
pub fn fill<T: Clone>(mut sequence: Vec<T>, value: T, start: usize, end: Option<usize>) -> Vec<T> {
    let end = end.map_or(sequence.len(), |end| end.min(sequence.len()));
    if start < end {
        sequence[start..end].fill(value);
    }
    sequence
}

/// Overwrites each listed position with a clone of `value`.
///
/// Positions outside the sequence are ignored.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::fill_indexes;
///
/// let values = fill_indexes(vec![1, 2, 3, 4], 9, &[2, 3]);
/// assert_eq!(values, vec![1, 2, 9, 9]);
///
/// let values = fill_indexes(values, 88, &[43, 234]);
/// assert_eq!(values, vec![1, 2, 9, 9]);
/// ```
pub fn fill_indexes<T: Clone>(mut sequence: Vec<T>, value: T, indexes: &[usize]) -> Vec<T> {
    for &index in indexes {
        if let Some(slot) = sequence.get_mut(index) {
            *slot = value.clone();
        }
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None, vec![7, 7, 7])]
    #[case(1, None, vec![1, 7, 7])]
    #[case(0, Some(0), vec![1, 2, 3])]
    #[case(99, Some(99), vec![1, 2, 3])]
    #[case(2, Some(1), vec![1, 2, 3])]
    #[case(1, Some(3), vec![1, 7, 7])]
    #[case(1, Some(42), vec![1, 7, 7])]
    fn test_fill_range(#[case] start: usize, #[case] end: Option<usize>, #[case] expected: Vec<i32>) {
        assert_eq!(fill(vec![1, 2, 3], 7, start, end), expected);
    }

    #[rstest]
    fn test_fill_indexes_single_and_multiple() {
        let values = fill_indexes(vec![1, 2, 3, 4], 0, &[0]);
        assert_eq!(values, vec![0, 2, 3, 4]);

        let values = fill_indexes(values, 9, &[2, 3]);
        assert_eq!(values, vec![0, 2, 9, 9]);
    }

    #[rstest]
    fn test_fill_indexes_repeated_index_is_harmless() {
        assert_eq!(fill_indexes(vec![1, 2], 5, &[1, 1, 1]), vec![1, 5]);
    }

    #[rstest]
    fn test_fill_empty_sequence() {
        assert!(fill(Vec::<i32>::new(), 1, 0, None).is_empty());
        assert!(fill_indexes(Vec::<i32>::new(), 1, &[0]).is_empty());
    }
}
