//! Sampling and shuffling with an injected random number generator.
//!
//! Every helper takes the generator as an explicit `&mut R` where
//! `R: rand::Rng`. Nothing here reaches for a process-wide source, so a
//! seeded generator makes every result reproducible.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use seqkit::random::{sample_size, shuffle};
//!
//! let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! let mut first = StdRng::seed_from_u64(7);
//! let mut second = StdRng::seed_from_u64(7);
//! assert_eq!(shuffle(&values, &mut first), shuffle(&values, &mut second));
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let picked = sample_size(&values, 4, &mut rng);
//! assert_eq!(picked.len(), 4);
//! assert!(picked.iter().all(|value| values.contains(value)));
//! ```

mod error;

pub use error::RandomRangeError;

use rand::Rng;

use crate::sequence::slice;

/// Returns a uniformly distributed integer in `lower..=upper`.
///
/// # Errors
///
/// Returns [`RandomRangeError`] if `upper < lower`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqkit::random::random;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(random(&mut rng, 2, 2), Ok(2));
///
/// let value = random(&mut rng, 0, 1).unwrap();
/// assert!(value == 0 || value == 1);
///
/// assert!(random(&mut rng, 3, 1).is_err());
/// ```
pub fn random<R>(rng: &mut R, lower: i64, upper: i64) -> Result<i64, RandomRangeError>
where
    R: Rng + ?Sized,
{
    if upper < lower {
        return Err(RandomRangeError { lower, upper });
    }
    Ok(rng.random_range(lower..=upper))
}

/// Returns a uniformly chosen element, or `None` if the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqkit::random::sample;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// assert_eq!(sample(&[1], &mut rng), Some(&1));
/// assert_eq!(sample::<i32, _>(&[], &mut rng), None);
/// ```
pub fn sample<'a, T, R>(sequence: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if sequence.is_empty() {
        return None;
    }
    sequence.get(rng.random_range(0..sequence.len()))
}

/// Returns a shuffled copy of the sequence.
///
/// Uses the [Fisher–Yates shuffle](https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle):
/// position `i` is swapped with a uniformly chosen position in `i..len`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqkit::random::shuffle;
///
/// let mut rng = StdRng::seed_from_u64(11);
/// let mut shuffled = shuffle(&[1, 2, 3, 4, 5], &mut rng);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut result = sequence.to_vec();
    let length = result.len();
    for index in 0..length {
        let other = rng.random_range(index..length);
        result.swap(index, other);
    }
    result
}

/// Returns `min(count, len)` elements taken from distinct positions.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqkit::random::sample_size;
///
/// let mut rng = StdRng::seed_from_u64(5);
/// assert_eq!(sample_size(&[1], 1, &mut rng), vec![1]);
/// assert!(sample_size(&[1], 0, &mut rng).is_empty());
/// assert_eq!(sample_size(&[1, 2, 3], 10, &mut rng).len(), 3);
/// ```
pub fn sample_size<T, R>(sequence: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let count = count.min(sequence.len());
    slice(&shuffle(sequence, rng), 0, Some(count))
}
