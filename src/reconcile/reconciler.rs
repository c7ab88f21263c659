//! The multi-way reconciliation engine.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::equivalence::Equivalence;
use crate::sequence::some;

/// Accumulators up to this length keep their xor survivor flags inline.
const INLINE_SURVIVOR_FLAGS: usize = 32;

/// Computes difference, intersection, xor, union and unique over ordered
/// sequences under one [`Equivalence`] strategy.
///
/// Whenever two elements are compared, the element being tested for
/// membership is passed as the left argument and the element it is tested
/// against as the right argument. This only matters for comparators that are
/// not symmetric.
///
/// Inputs are borrowed and never modified; every operation returns a newly
/// allocated `Vec`.
///
/// # Examples
///
/// ```rust
/// use seqkit::equivalence::{KeyedEquality, NaturalEquality};
/// use seqkit::reconcile::SetReconciler;
///
/// let natural = SetReconciler::new(NaturalEquality);
/// assert_eq!(natural.difference(&[3, 2, 1], &[4, 2]), vec![3, 1]);
/// assert_eq!(natural.intersection(&[vec![2, 1], vec![4, 2], vec![1, 2]]), vec![2]);
/// assert_eq!(natural.xor(&[vec![2, 1], vec![4, 2]]), vec![1, 4]);
///
/// let floor = SetReconciler::new(KeyedEquality::new(|value: &f64| value.floor()));
/// assert_eq!(floor.xor(&[vec![2.1, 1.2], vec![4.3, 2.4]]), vec![1.2, 4.3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetReconciler<E> {
    strategy: E,
}

impl<E> SetReconciler<E> {
    /// Creates a reconciler that compares elements with `strategy`.
    #[inline]
    pub const fn new(strategy: E) -> Self {
        Self { strategy }
    }

    /// Returns the strategy this reconciler compares with.
    #[inline]
    pub const fn strategy(&self) -> &E {
        &self.strategy
    }

    /// Consumes the reconciler, returning its strategy.
    #[inline]
    pub fn into_strategy(self) -> E {
        self.strategy
    }

    fn has_equivalent<T>(&self, sequence: &[T], element: &T) -> bool
    where
        E: Equivalence<T>,
    {
        some(sequence, |candidate| self.strategy.equivalent(element, candidate))
    }

    /// Returns the elements of `base`, in order, that have no equivalent in `exclude`.
    ///
    /// Duplicates in `base` are kept or dropped individually.
    ///
    /// # Complexity
    ///
    /// O(|base| * |exclude|)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::equivalence::NaturalEquality;
    /// use seqkit::reconcile::SetReconciler;
    ///
    /// let reconciler = SetReconciler::new(NaturalEquality);
    /// assert_eq!(reconciler.difference(&[3, 2, 1], &[4, 2]), vec![3, 1]);
    /// assert_eq!(reconciler.difference(&[3, 2, 1], &[]), vec![3, 2, 1]);
    /// ```
    pub fn difference<T>(&self, base: &[T], exclude: &[T]) -> Vec<T>
    where
        T: Clone,
        E: Equivalence<T>,
    {
        if exclude.is_empty() {
            return base.to_vec();
        }
        let result: Vec<T> = base
            .iter()
            .filter(|element| !self.has_equivalent(exclude, element))
            .cloned()
            .collect();
        trace!(
            base = base.len(),
            exclude = exclude.len(),
            kept = result.len(),
            "difference"
        );
        result
    }

    /// Returns the elements of `sequences[0]` that have an equivalent in every
    /// other sequence, in their original order.
    ///
    /// The first sequence is the running accumulator: each further sequence
    /// filters it once, keeping an element when at least one equivalent is
    /// found. Duplicates in the first sequence survive or fall together with
    /// their equivalents. Reconciliation stops as soon as the accumulator is
    /// empty.
    ///
    /// With no sequences the result is empty; with one it is a copy of that
    /// sequence.
    ///
    /// # Complexity
    ///
    /// O(sum of |accumulator_i| * |sequences\[i\]|) over the passes performed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::equivalence::NaturalEquality;
    /// use seqkit::reconcile::SetReconciler;
    ///
    /// let reconciler = SetReconciler::new(NaturalEquality);
    /// assert_eq!(reconciler.intersection(&[vec![2, 1], vec![4, 2], vec![1, 2]]), vec![2]);
    /// assert_eq!(reconciler.intersection(&[vec![2, 1]]), vec![2, 1]);
    /// assert_eq!(reconciler.intersection::<i32, Vec<i32>>(&[]), Vec::<i32>::new());
    /// ```
    pub fn intersection<T, S>(&self, sequences: &[S]) -> Vec<T>
    where
        T: Clone,
        S: AsRef<[T]>,
        E: Equivalence<T>,
    {
        let Some((first, rest)) = sequences.split_first() else {
            return Vec::new();
        };
        let mut accumulator = first.as_ref().to_vec();
        for (pass, other) in rest.iter().enumerate() {
            let other = other.as_ref();
            accumulator.retain(|element| self.has_equivalent(other, element));
            trace!(
                pass = pass + 1,
                against = other.len(),
                surviving = accumulator.len(),
                "intersection pass"
            );
            if accumulator.is_empty() {
                debug!(
                    pass = pass + 1,
                    remaining_passes = rest.len() - pass - 1,
                    "intersection emptied early"
                );
                break;
            }
        }
        accumulator
    }

    /// Returns the symmetric difference of `sequences`, folded pairwise from
    /// the last sequence back to the first.
    ///
    /// Each fold step combines the next sequence to the left (`next`) with
    /// the current result:
    ///
    /// 1. every element of the result starts out surviving;
    /// 2. each element of `next`, in order, consumes the first still-surviving
    ///    equivalent element of the result, or is kept if there is none;
    /// 3. the new result is the kept elements of `next` followed by the
    ///    surviving elements of the old result, both in their original order.
    ///
    /// For more than two sequences this is a fold of pairwise symmetric
    /// differences, not "elements occurring in an odd number of sequences".
    ///
    /// With no sequences the result is empty; with one it is a copy of that
    /// sequence.
    ///
    /// # Complexity
    ///
    /// O(sum of |next_i| * |result_i|) over the fold steps
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::equivalence::NaturalEquality;
    /// use seqkit::reconcile::SetReconciler;
    ///
    /// let reconciler = SetReconciler::new(NaturalEquality);
    /// assert_eq!(reconciler.xor(&[vec![2, 1], vec![4, 2]]), vec![1, 4]);
    /// assert!(reconciler.xor(&[vec![1, 1, 2], vec![1, 1, 2]]).is_empty());
    /// ```
    pub fn xor<T, S>(&self, sequences: &[S]) -> Vec<T>
    where
        T: Clone,
        S: AsRef<[T]>,
        E: Equivalence<T>,
    {
        let Some((last, rest)) = sequences.split_last() else {
            return Vec::new();
        };
        rest.iter()
            .rev()
            .enumerate()
            .fold(last.as_ref().to_vec(), |result, (step, next)| {
                let folded = self.xor_step(next.as_ref(), result);
                trace!(step = step + 1, length = folded.len(), "xor fold step");
                folded
            })
    }

    fn xor_step<T>(&self, next: &[T], result: Vec<T>) -> Vec<T>
    where
        T: Clone,
        E: Equivalence<T>,
    {
        let mut surviving: SmallVec<[bool; INLINE_SURVIVOR_FLAGS]> =
            SmallVec::from_elem(true, result.len());
        let mut accumulator = Vec::with_capacity(next.len() + result.len());

        for element in next {
            let matched = result
                .iter()
                .zip(surviving.iter())
                .position(|(candidate, &alive)| {
                    alive && self.strategy.equivalent(element, candidate)
                });
            match matched {
                Some(index) => surviving[index] = false,
                None => accumulator.push(element.clone()),
            }
        }

        let introduced = accumulator.len();
        accumulator.extend(
            result
                .into_iter()
                .zip(surviving)
                .filter_map(|(element, alive)| alive.then_some(element)),
        );
        trace!(
            introduced,
            carried = accumulator.len() - introduced,
            "xor survivors"
        );
        accumulator
    }

    /// Returns every element of every sequence, left to right, keeping only
    /// the first element of each equivalence class.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::equivalence::NaturalEquality;
    /// use seqkit::reconcile::SetReconciler;
    ///
    /// let reconciler = SetReconciler::new(NaturalEquality);
    /// assert_eq!(reconciler.union(&[vec![2, 1], vec![4, 2], vec![1, 5]]), vec![2, 1, 4, 5]);
    /// ```
    pub fn union<T, S>(&self, sequences: &[S]) -> Vec<T>
    where
        T: Clone,
        S: AsRef<[T]>,
        E: Equivalence<T>,
    {
        let mut result: Vec<T> = Vec::new();
        for sequence in sequences {
            for element in sequence.as_ref() {
                if !self.has_equivalent(&result, element) {
                    result.push(element.clone());
                }
            }
        }
        trace!(sequences = sequences.len(), length = result.len(), "union");
        result
    }

    /// Returns the first element of each equivalence class in `sequence`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::equivalence::NaturalEquality;
    /// use seqkit::reconcile::SetReconciler;
    ///
    /// let reconciler = SetReconciler::new(NaturalEquality);
    /// assert_eq!(reconciler.unique(&[2, 1, 2, 3, 1]), vec![2, 1, 3]);
    /// ```
    pub fn unique<T>(&self, sequence: &[T]) -> Vec<T>
    where
        T: Clone,
        E: Equivalence<T>,
    {
        self.union(std::slice::from_ref(&sequence))
    }
}

impl<E> From<E> for SetReconciler<E> {
    fn from(strategy: E) -> Self {
        Self::new(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{CustomEquality, KeyedEquality, NaturalEquality};
    use rstest::rstest;

    const NATURAL: SetReconciler<NaturalEquality> = SetReconciler::new(NaturalEquality);

    #[rstest]
    #[case(vec![3, 2, 1], vec![4, 2], vec![3, 1])]
    #[case(vec![3, 2, 1], vec![], vec![3, 2, 1])]
    #[case(vec![], vec![1, 2], vec![])]
    #[case(vec![1, 1, 2, 1], vec![1], vec![2])]
    #[case(vec![1, 2, 3], vec![1, 2, 3], vec![])]
    fn test_difference(#[case] base: Vec<i32>, #[case] exclude: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(NATURAL.difference(&base, &exclude), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![vec![2, 1]], vec![2, 1])]
    #[case(vec![vec![2, 1], vec![4, 2], vec![1, 2]], vec![2])]
    #[case(vec![vec![1, 2, 2, 3], vec![2, 3]], vec![2, 2, 3])]
    #[case(vec![vec![1, 2], vec![3], vec![1, 2]], vec![])]
    #[case(vec![vec![1, 2], vec![], vec![1, 2]], vec![])]
    fn test_intersection(#[case] sequences: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
        assert_eq!(NATURAL.intersection(&sequences), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![vec![2, 1]], vec![2, 1])]
    #[case(vec![vec![2, 1], vec![4, 2]], vec![1, 4])]
    #[case(vec![vec![1, 2], vec![1, 2]], vec![])]
    #[case(vec![vec![1, 1], vec![1]], vec![1])]
    #[case(vec![vec![1], vec![1, 1]], vec![1])]
    #[case(vec![vec![5, 5], vec![]], vec![5, 5])]
    fn test_xor(#[case] sequences: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
        assert_eq!(NATURAL.xor(&sequences), expected);
    }

    #[rstest]
    fn test_xor_folds_from_the_right() {
        // step 1: [2, 3] vs [3, 4] -> [2] ++ [4]
        // step 2: [1, 2] vs [2, 4] -> [1] ++ [4]
        let sequences = vec![vec![1, 2], vec![2, 3], vec![3, 4]];
        assert_eq!(NATURAL.xor(&sequences), vec![1, 4]);
    }

    #[rstest]
    fn test_xor_of_three_identical_is_not_odd_occurrence() {
        // A true odd-occurrence xor would return [1]; the pairwise fold cancels
        // [1] against [1] first and then re-introduces it from the left.
        let sequences = vec![vec![1], vec![1], vec![1]];
        assert_eq!(NATURAL.xor(&sequences), vec![1]);

        let sequences = vec![vec![1], vec![1], vec![1], vec![1]];
        assert!(NATURAL.xor(&sequences).is_empty());
    }

    #[rstest]
    fn test_xor_beyond_inline_survivor_capacity() {
        let left: Vec<i32> = (0..100).collect();
        let right: Vec<i32> = (50..150).collect();
        let expected: Vec<i32> = (0..50).chain(100..150).collect();
        assert_eq!(NATURAL.xor(&[left, right]), expected);
    }

    #[rstest]
    fn test_keyed_strategy_keeps_first_representative() {
        let floor = SetReconciler::new(KeyedEquality::new(|value: &f64| value.floor()));
        assert_eq!(floor.difference(&[2.1, 1.2], &[2.3, 3.4]), vec![1.2]);
        assert_eq!(floor.intersection(&[vec![2.1, 1.2], vec![2.3, 3.4]]), vec![2.1]);
        assert_eq!(floor.union(&[vec![2.1], vec![1.2, 2.3]]), vec![2.1, 1.2]);
    }

    #[rstest]
    fn test_custom_comparator_receives_tested_element_first() {
        // "left is strictly smaller than right" is deliberately asymmetric.
        let smaller = SetReconciler::new(CustomEquality::new(|left: &i32, right: &i32| left < right));
        assert_eq!(smaller.difference(&[1, 5, 9], &[6]), vec![9]);
    }

    #[rstest]
    fn test_unique_collapses_duplicates() {
        assert_eq!(NATURAL.unique(&[1, 2, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert!(NATURAL.unique::<i32>(&[]).is_empty());
    }

    #[rstest]
    fn test_union_of_nothing_is_empty() {
        assert!(NATURAL.union::<i32, Vec<i32>>(&[]).is_empty());
    }

    #[rstest]
    fn test_strategy_accessors() {
        let reconciler: SetReconciler<NaturalEquality> = NaturalEquality.into();
        assert_eq!(reconciler.strategy(), &NaturalEquality);
        assert_eq!(reconciler.into_strategy(), NaturalEquality);
    }

    #[rstest]
    fn test_works_through_trait_object() {
        let strategy: &dyn Equivalence<i32> = &CustomEquality::new(|l: &i32, r: &i32| l % 10 == r % 10);
        let reconciler = SetReconciler::new(strategy);
        assert_eq!(reconciler.difference(&[1, 12, 23], &[31, 43]), vec![12]);
    }
}
