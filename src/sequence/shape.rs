//! Helpers that change the shape of a sequence: compacting, chunking,
//! concatenating and flattening.

/// A value or an arbitrarily nested list of values.
///
/// Heterogeneous nesting such as `[1, [2, 3, [4]]]` is expressed explicitly,
/// which is what [`flatten`] and [`flatten_deep`] operate on.
///
/// With the `serde` feature enabled, `Nested<T>` uses the untagged
/// representation, so JSON like `[1, [2, [3]]]` deserializes directly.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{Nested, flatten_deep};
///
/// let nested = vec![
///     Nested::Value(1),
///     Nested::List(vec![Nested::Value(2), Nested::List(vec![Nested::Value(3)])]),
/// ];
/// assert_eq!(flatten_deep(&nested), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single value.
    Value(T),
    /// A list of further nested values.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a [`Nested::Value`].
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is a [`Nested::List`].
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the number of nesting levels below this node.
    ///
    /// A value has depth 0; a list has one more than its deepest child.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Nested;
    ///
    /// let nested = Nested::List(vec![Nested::Value(1), Nested::List(vec![Nested::Value(2)])]);
    /// assert_eq!(nested.depth(), 2);
    /// assert_eq!(Nested::Value(1).depth(), 0);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Self::Value(_) => 0,
            Self::List(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Copies the present values, dropping every `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::compact;
///
/// assert_eq!(compact(&[Some(2), Some(3), None, Some(6)]), vec![2, 3, 6]);
/// ```
pub fn compact<T: Clone>(sequence: &[Option<T>]) -> Vec<T> {
    sequence.iter().flatten().cloned().collect()
}

/// Splits the sequence into chunks of `size` elements.
///
/// The final chunk holds whatever remains when the length is not a multiple
/// of `size`. A `size` of zero yields no chunks at all.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::chunk;
///
/// assert_eq!(chunk(&[10, 20, 30, 40, 50], 2), vec![vec![10, 20], vec![30, 40], vec![50]]);
/// assert!(chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn chunk<T: Clone>(sequence: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    sequence.chunks(size).map(<[T]>::to_vec).collect()
}

/// Copies the sequence followed by `values`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::concat;
///
/// assert_eq!(concat(&[1], &[2, 3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn concat<T: Clone>(sequence: &[T], values: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(sequence.len() + values.len());
    result.extend_from_slice(sequence);
    result.extend_from_slice(values);
    result
}

/// Copies the sequence followed by every sequence in `sequences`, in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::concat_all;
///
/// assert_eq!(concat_all(&[1], &[vec![1, 2], vec![3, 4], vec![0]]), vec![1, 1, 2, 3, 4, 0]);
/// ```
pub fn concat_all<T, S>(sequence: &[T], sequences: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let capacity = sequence.len() + sequences.iter().map(|other| other.as_ref().len()).sum::<usize>();
    let mut result = Vec::with_capacity(capacity);
    result.extend_from_slice(sequence);
    for other in sequences {
        result.extend_from_slice(other.as_ref());
    }
    result
}

/// Flattens one level of nesting.
///
/// Values stay values; the children of each top-level list are spliced in
/// place, whatever they are.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{Nested, flatten};
///
/// // [1, [2, 3, [4]]] -> [1, 2, 3, [4]]
/// let nested = vec![
///     Nested::Value(1),
///     Nested::List(vec![
///         Nested::Value(2),
///         Nested::Value(3),
///         Nested::List(vec![Nested::Value(4)]),
///     ]),
/// ];
/// assert_eq!(
///     flatten(&nested),
///     vec![
///         Nested::Value(1),
///         Nested::Value(2),
///         Nested::Value(3),
///         Nested::List(vec![Nested::Value(4)]),
///     ]
/// );
/// ```
pub fn flatten<T: Clone>(sequence: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut result = Vec::with_capacity(sequence.len());
    for element in sequence {
        match element {
            Nested::Value(_) => result.push(element.clone()),
            Nested::List(children) => result.extend_from_slice(children),
        }
    }
    result
}

/// Recursively flattens every level of nesting into plain values.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{Nested, flatten_deep};
///
/// // [[1], 2, [3, [[4]], 5]]
/// let nested: Vec<Nested<i32>> = vec![
///     Nested::List(vec![Nested::from(1)]),
///     Nested::from(2),
///     Nested::List(vec![
///         Nested::from(3),
///         Nested::List(vec![Nested::List(vec![Nested::from(4)])]),
///         Nested::from(5),
///     ]),
/// ];
/// assert_eq!(flatten_deep(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_deep<T: Clone>(sequence: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_deep_into(sequence, &mut result);
    result
}

fn flatten_deep_into<T: Clone>(sequence: &[Nested<T>], result: &mut Vec<T>) {
    for element in sequence {
        match element {
            Nested::Value(value) => result.push(value.clone()),
            Nested::List(children) => flatten_deep_into(children, result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn value(value: i32) -> Nested<i32> {
        Nested::Value(value)
    }

    fn list(children: Vec<Nested<i32>>) -> Nested<i32> {
        Nested::List(children)
    }

    #[rstest]
    #[case(vec![], 2, vec![])]
    #[case(vec![1, 2, 3], 0, vec![])]
    #[case(vec![1, 2, 3], 1, vec![vec![1], vec![2], vec![3]])]
    #[case(vec![1, 2, 3], 3, vec![vec![1, 2, 3]])]
    #[case(vec![1, 2, 3], 5, vec![vec![1, 2, 3]])]
    #[case(vec![10, 20, 30, 40, 50, 60, 70], 2, vec![vec![10, 20], vec![30, 40], vec![50, 60], vec![70]])]
    #[case(vec![10, 20, 30, 40, 50, 60, 70], 3, vec![vec![10, 20, 30], vec![40, 50, 60], vec![70]])]
    fn test_chunk(#[case] values: Vec<i32>, #[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
        assert_eq!(chunk(&values, size), expected);
    }

    #[rstest]
    fn test_compact_all_none() {
        let values: [Option<i32>; 3] = [None, None, None];
        assert!(compact(&values).is_empty());
    }

    #[rstest]
    fn test_concat_with_empty_parts() {
        let empty: [i32; 0] = [];
        assert_eq!(concat(&empty, &[1, 2]), vec![1, 2]);
        assert_eq!(concat(&[1, 2], &empty), vec![1, 2]);
        assert_eq!(concat_all::<i32, Vec<i32>>(&[1, 2], &[]), vec![1, 2]);
    }

    #[rstest]
    fn test_flatten_only_one_level() {
        let nested = vec![value(1), list(vec![value(2), list(vec![value(3)])])];
        assert_eq!(
            flatten(&nested),
            vec![value(1), value(2), list(vec![value(3)])]
        );
    }

    #[rstest]
    fn test_flatten_deep_mixed_nesting() {
        // [[1], 2, [3, [[4]], 5], [[6, 7], 8], [[9]]]
        let nested = vec![
            list(vec![value(1)]),
            value(2),
            list(vec![value(3), list(vec![list(vec![value(4)])]), value(5)]),
            list(vec![list(vec![value(6), value(7)]), value(8)]),
            list(vec![list(vec![value(9)])]),
        ];
        assert_eq!(flatten_deep(&nested), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[rstest]
    fn test_flatten_deep_empty_lists_vanish() {
        let nested = vec![list(vec![]), list(vec![list(vec![])]), value(1)];
        assert_eq!(flatten_deep(&nested), vec![1]);
    }

    #[rstest]
    fn test_nested_predicates_and_depth() {
        assert!(value(1).is_value());
        assert!(!value(1).is_list());
        assert!(list(vec![]).is_list());
        assert_eq!(list(vec![]).depth(), 1);
        assert_eq!(list(vec![list(vec![list(vec![value(1)])])]).depth(), 3);
    }
}
