//! Short-circuit evaluation over runtime sequences of partial functions.
//!
//! Where `first_match!` fixes the members of a chain at
//! compile time, the runner evaluates whatever ordered sequence it is handed:
//!
//! - [`run`]: Any `IntoIterator` of partial functions (containers by
//!   reference, fixed-size arrays, slices, iterator adaptors)
//! - [`run_range`]: The members of a slice between two positions
//! - [`RunFirstMatch`]: `run` as an extension method
//!
//! Every entry point scans in iteration order, stops at the first member that
//! produces a result, and makes a single forward pass without reordering or
//! copying the sequence.
//!
//! # Examples
//!
//! ```
//! use std::collections::LinkedList;
//! use fallthrough::partial::single_point;
//! use fallthrough::runner::{run, run_range};
//!
//! let table: LinkedList<_> = [(0, "zero"), (1, "one"), (2, "two")]
//!     .into_iter()
//!     .map(|(key, name)| single_point(key, name))
//!     .collect();
//! assert_eq!(run(&table, &1), Some("one"));
//!
//! let members = [single_point(0, "zero"), single_point(1, "one"), single_point(2, "two")];
//! assert_eq!(run(&members, &2), Some("two"));
//! assert_eq!(run_range(&members, 0..2, &2), Ok(None));
//! ```

mod error;

pub use error::RangeError;

use std::ops::Range;

use crate::partial::PartialFunction;

/// Evaluates `functions` in order and returns the first result produced.
///
/// Members after the first success are never invoked. When every member
/// declines, or the sequence is empty, the result is `None`.
///
/// # Arguments
///
/// * `functions` - The ordered members; anything that iterates over
///   partial functions sharing one argument and result type
/// * `arguments` - The argument passed to each member
///
/// # Examples
///
/// ```
/// use fallthrough::runner::run;
///
/// fn decimal(text: &str) -> Option<u32> {
///     text.parse().ok()
/// }
///
/// fn binary(text: &str) -> Option<u32> {
///     u32::from_str_radix(text.strip_prefix("0b")?, 2).ok()
/// }
///
/// let parsers: Vec<fn(&str) -> Option<u32>> = vec![decimal, binary];
/// assert_eq!(run(&parsers, "0b101"), Some(5));
/// assert_eq!(run(&parsers, "five"), None);
///
/// let nothing: [fn(&str) -> Option<u32>; 0] = [];
/// assert_eq!(run(nothing, "5"), None);
/// ```
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn run<I, A, R>(functions: I, arguments: &A) -> Option<R>
where
    I: IntoIterator,
    I::Item: PartialFunction<A, R>,
    A: ?Sized,
{
    for (position, function) in functions.into_iter().enumerate() {
        if let Some(result) = function.try_call(arguments) {
            #[cfg(feature = "tracing")]
            tracing::trace!(position, "partial function matched");
            return Some(result);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("no partial function matched");
    None
}

/// Evaluates the members of `functions` at positions `range`, in order.
///
/// Behaves like [`run`] on `&functions[range]`.
///
/// # Errors
///
/// Returns [`RangeError`] if `range.start > range.end` or `range.end` is
/// greater than `functions.len()`. No member is invoked in that case.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::constant;
/// use fallthrough::runner::{RangeError, run_range};
///
/// let members = [constant('a'), constant('b'), constant('c')];
/// assert_eq!(run_range(&members, 1..3, &()), Ok(Some('b')));
/// assert_eq!(run_range(&members, 3..3, &()), Ok(None));
/// assert_eq!(
///     run_range(&members, 2..4, &()),
///     Err(RangeError { start: 2, end: 4, length: 3 })
/// );
/// ```
pub fn run_range<'f, F, A, R>(
    functions: &'f [F],
    range: Range<usize>,
    arguments: &A,
) -> Result<Option<R>, RangeError>
where
    &'f F: PartialFunction<A, R>,
    A: ?Sized,
{
    let Range { start, end } = range;
    let window = functions.get(start..end).ok_or(RangeError {
        start,
        end,
        length: functions.len(),
    })?;

    Ok(run(window, arguments))
}

/// Extension method form of [`run`].
///
/// # Examples
///
/// ```
/// use fallthrough::partial::single_point;
/// use fallthrough::runner::RunFirstMatch;
///
/// let colors = vec![single_point("red", 0xff0000), single_point("lime", 0x00ff00)];
/// assert_eq!(colors.iter().first_match(&"lime"), Some(0x00ff00));
/// assert_eq!(colors.iter().rev().first_match(&"red"), Some(0xff0000));
/// ```
pub trait RunFirstMatch: IntoIterator + Sized {
    /// Evaluates the members in iteration order and returns the first result
    /// produced.
    fn first_match<A, R>(self, arguments: &A) -> Option<R>
    where
        A: ?Sized,
        Self::Item: PartialFunction<A, R>,
    {
        run(self, arguments)
    }
}

impl<I: IntoIterator> RunFirstMatch for I {}
