//! The partial-function contract and its elementary combinators.
//!
//! A partial function maps an argument to `Some(result)` or declines with
//! `None`. Everything else in this crate is built on the single
//! [`PartialFunction`] trait defined here.
//!
//! # Overview
//!
//! - [`PartialFunction`]: the contract shared by every chain member
//! - [`constant`]: always succeeds with a captured value
//! - [`default_value`]: always succeeds with `R::default()`
//! - [`single_point`]: succeeds only for one exact argument
//! - [`never`]: always declines (the empty chain)
//!
//! # Arguments
//!
//! Members receive their argument by reference, so evaluating a chain never
//! clones or moves the input. Signatures with several arguments use a tuple,
//! and signatures without arguments use `()`:
//!
//! ```
//! use fallthrough::partial::PartialFunction;
//!
//! let in_range = |(value, limit): &(i32, i32)| (value < limit).then_some(*value);
//! assert_eq!(in_range.try_call(&(3, 10)), Some(3));
//! assert_eq!(in_range.try_call(&(30, 10)), None);
//!
//! let thunk = |_: &()| Some("ready");
//! assert_eq!(thunk.try_call(&()), Some("ready"));
//! ```
//!
//! Unsized arguments such as `str` and `[T]` are supported:
//!
//! ```
//! use fallthrough::partial::PartialFunction;
//!
//! fn decimal(text: &str) -> Option<i32> {
//!     text.parse().ok()
//! }
//!
//! assert_eq!(decimal.try_call("42"), Some(42));
//! assert_eq!(decimal.try_call("forty-two"), None);
//! ```

mod combinators;

pub use combinators::{
    Constant, DefaultValue, Never, SinglePoint, constant, default_value, never, single_point,
};

/// A function that may decline to produce a result.
///
/// `try_call` returns `Some(result)` when the function applies to `arguments`
/// and `None` otherwise. Declining is an ordinary outcome, not an error.
///
/// Every `Fn(&A) -> Option<R>` implements this trait, which covers `fn` items,
/// closures, references to them and boxed trait objects. The combinators in
/// this module implement it directly.
///
/// # Type Parameters
///
/// * `A` - The argument type (a tuple for several arguments, `()` for none)
/// * `R` - The result type
///
/// # Examples
///
/// ```
/// use fallthrough::partial::PartialFunction;
///
/// let even_half = |value: &i32| (value % 2 == 0).then(|| value / 2);
///
/// assert_eq!(even_half.try_call(&10), Some(5));
/// assert_eq!(even_half.try_call(&7), None);
/// ```
pub trait PartialFunction<A: ?Sized, R> {
    /// Applies the function, returning `None` if it declines `arguments`.
    fn try_call(&self, arguments: &A) -> Option<R>;
}

impl<A, R, F> PartialFunction<A, R> for F
where
    A: ?Sized,
    F: Fn(&A) -> Option<R>,
{
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        self(arguments)
    }
}
