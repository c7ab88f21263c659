//! Error types for the random helpers.

/// Represents an inverted range passed to [`crate::random::random`].
///
/// # Examples
///
/// ```rust
/// use seqkit::random::RandomRangeError;
///
/// let error = RandomRangeError { lower: 5, upper: 1 };
/// assert_eq!(
///     format!("{}", error),
///     "random: lower bound 5 exceeds upper bound 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomRangeError {
    /// The requested lower bound.
    pub lower: i64,
    /// The requested upper bound.
    pub upper: i64,
}

impl std::fmt::Display for RandomRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "random: lower bound {} exceeds upper bound {}",
            self.lower, self.upper
        )
    }
}

impl std::error::Error for RandomRangeError {}
