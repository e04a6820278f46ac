//! Error types for the chain runner.

/// Represents an evaluation window that does not fit the sequence.
///
/// Returned by [`run_range`](crate::runner::run_range) when `start > end` or
/// `end` is past the last member. Declining to match is never reported as an
/// error; only a malformed window is.
///
/// # Examples
///
/// ```rust
/// use fallthrough::runner::RangeError;
///
/// let error = RangeError {
///     start: 2,
///     end: 5,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "range 2..5 is out of bounds for a chain of 3 partial functions"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeError {
    /// The first position of the requested window.
    pub start: usize,
    /// The position one past the end of the requested window.
    pub end: usize,
    /// The number of members in the sequence.
    pub length: usize,
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start > self.end {
            write!(
                formatter,
                "range {}..{} starts after it ends",
                self.start, self.end
            )
        } else {
            write!(
                formatter,
                "range {}..{} is out of bounds for a chain of {} partial functions",
                self.start, self.end, self.length
            )
        }
    }
}

impl std::error::Error for RangeError {}
