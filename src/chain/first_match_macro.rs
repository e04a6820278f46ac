//! The `first_match!` macro for static chain composition.
//!
//! This module provides the [`first_match!`] macro which composes a fixed list
//! of partial functions into a single [`FirstMatch`](crate::chain::FirstMatch)
//! chain.

/// Composes partial functions into a first-match-wins chain.
///
/// `first_match![f, g, h].try_call(x)` is `f(x)` if that is `Some`, otherwise
/// `g(x)` if that is `Some`, otherwise `h(x)`.
///
/// Evaluation stops at the first member that produces a result; later members
/// are never invoked for that call. Every call restarts the scan at the first
/// member.
///
/// # Laws
///
/// - **Empty chain**: `first_match![]` declines every argument
/// - **Left Identity**: `first_match![never(), f] == f`
/// - **Right Identity**: `first_match![f, never()] == f`
/// - **Associativity**: `first_match![f, first_match![g, h]] == first_match![first_match![f, g], h]`
///
/// # Syntax
///
/// - `first_match![]` - Returns [`Never`](crate::partial::Never)
/// - `first_match![f]` - Returns `FirstMatch(f, Never)`
/// - `first_match![f, g, ...]` - Returns `FirstMatch(f, first_match![g, ...])`
///
/// # Type Requirements
///
/// Every member must implement
/// [`PartialFunction<A, R>`](crate::partial::PartialFunction) for the same `A`
/// and `R`. Mixing result types is rejected by the compiler:
///
/// ```compile_fail
/// use fallthrough::first_match;
/// use fallthrough::partial::PartialFunction;
///
/// let mixed = first_match![
///     |text: &str| text.parse::<i32>().ok(),
///     |text: &str| Some(text.to_owned()),
/// ];
/// mixed.try_call("1");
/// ```
///
/// # Examples
///
/// ## String to number
///
/// ```
/// use fallthrough::first_match;
/// use fallthrough::partial::PartialFunction;
///
/// fn decimal(text: &str) -> Option<i32> {
///     text.parse().ok()
/// }
///
/// fn english(text: &str) -> Option<i32> {
///     ["zero", "one", "two", "three"]
///         .iter()
///         .position(|numeral| *numeral == text)
///         .and_then(|index| i32::try_from(index).ok())
/// }
///
/// let string_to_number = first_match![decimal, english];
/// assert_eq!(string_to_number.try_call("2019"), Some(2019));
/// assert_eq!(string_to_number.try_call("two"), Some(2));
/// assert_eq!(string_to_number.try_call("zwei"), None);
/// ```
///
/// ## Short-circuit evaluation
///
/// ```
/// use std::cell::Cell;
/// use fallthrough::first_match;
/// use fallthrough::partial::PartialFunction;
///
/// let calls = Cell::new(0);
/// let chain = first_match![
///     |_: &()| { calls.set(calls.get() + 1); None },
///     |_: &()| { calls.set(calls.get() + 1); Some(7) },
///     |_: &()| { calls.set(calls.get() + 1); Some(3) },
/// ];
///
/// assert_eq!(chain.try_call(&()), Some(7));
/// assert_eq!(calls.get(), 2);
/// ```
#[macro_export]
macro_rules! first_match {
    // No members: the empty chain
    () => {
        $crate::partial::Never
    };

    // One or more members: right-nested composition ending in Never
    // first_match![f, g, ...] = FirstMatch(f, first_match![g, ...])
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::chain::FirstMatch::new($first, $crate::first_match!($($rest),*))
    };
}
