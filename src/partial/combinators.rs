//! Elementary partial functions.
//!
//! These are the smallest useful chain members:
//!
//! - [`constant`]: Always succeeds with the same value (K combinator)
//! - [`default_value`]: Always succeeds with `R::default()`
//! - [`single_point`]: Succeeds for exactly one argument
//! - [`never`]: Never succeeds
//!
//! Each combinator implements [`PartialFunction`] both by value and by
//! reference, so a `Vec` or array of them can be evaluated in place.

use std::fmt;
use std::marker::PhantomData;

use super::PartialFunction;

/// A partial function that declines every argument.
///
/// `Never` is the empty chain: it is the tail of every chain produced by
/// `first_match!` and the identity element of chaining.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::{PartialFunction, never};
///
/// let nothing = never();
/// let result: Option<i32> = nothing.try_call("anything");
/// assert_eq!(result, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Never;

impl<A: ?Sized, R> PartialFunction<A, R> for Never {
    #[inline]
    fn try_call(&self, _arguments: &A) -> Option<R> {
        None
    }
}

impl<A: ?Sized, R> PartialFunction<A, R> for &Never {
    #[inline]
    fn try_call(&self, _arguments: &A) -> Option<R> {
        None
    }
}

/// Creates a partial function that declines every argument.
#[inline]
#[must_use]
pub const fn never() -> Never {
    Never
}

/// A partial function that always succeeds with a captured value.
///
/// Placed at the tail of a chain, it turns the chain into a total function.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::{PartialFunction, constant};
///
/// let unknown = constant("unknown");
/// assert_eq!(unknown.try_call(&42), Some("unknown"));
/// assert_eq!(unknown.try_call("ignored"), Some("unknown"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constant<R> {
    value: R,
}

impl<R> Constant<R> {
    /// Creates a constant partial function returning `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: R) -> Self {
        Self { value }
    }

    /// Returns a reference to the captured value.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// Consumes the function and returns the captured value.
    #[inline]
    pub fn into_value(self) -> R {
        self.value
    }
}

impl<A: ?Sized, R: Clone> PartialFunction<A, R> for Constant<R> {
    #[inline]
    fn try_call(&self, _arguments: &A) -> Option<R> {
        Some(self.value.clone())
    }
}

impl<A: ?Sized, R: Clone> PartialFunction<A, R> for &Constant<R> {
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        (**self).try_call(arguments)
    }
}

/// Creates a partial function that ignores its argument and always returns
/// `value`.
///
/// The value is cloned on every call.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::{PartialFunction, constant};
///
/// let zero = constant(0);
/// let parse_or_zero = |text: &str| text.parse::<i32>().ok().or_else(|| zero.try_call(text));
/// assert_eq!(parse_or_zero("12"), Some(12));
/// assert_eq!(parse_or_zero("twelve"), Some(0));
/// ```
#[inline]
#[must_use]
pub const fn constant<R>(value: R) -> Constant<R> {
    Constant::new(value)
}

/// A partial function that always succeeds with `R::default()`.
pub struct DefaultValue<R> {
    result: PhantomData<fn() -> R>,
}

impl<R> DefaultValue<R> {
    /// Creates the partial function.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            result: PhantomData,
        }
    }
}

impl<R> Default for DefaultValue<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for DefaultValue<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for DefaultValue<R> {}

impl<R> fmt::Debug for DefaultValue<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "DefaultValue<{}>", std::any::type_name::<R>())
    }
}

impl<A: ?Sized, R: Default> PartialFunction<A, R> for DefaultValue<R> {
    #[inline]
    fn try_call(&self, _arguments: &A) -> Option<R> {
        Some(R::default())
    }
}

impl<A: ?Sized, R: Default> PartialFunction<A, R> for &DefaultValue<R> {
    #[inline]
    fn try_call(&self, _arguments: &A) -> Option<R> {
        Some(R::default())
    }
}

/// Creates a partial function that always returns `R::default()`.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::{PartialFunction, default_value};
///
/// let empty = default_value::<String>();
/// assert_eq!(empty.try_call(&7), Some(String::new()));
/// ```
#[inline]
#[must_use]
pub const fn default_value<R>() -> DefaultValue<R> {
    DefaultValue::new()
}

/// A partial function defined at exactly one argument.
///
/// It succeeds with its value only when the call's argument equals the
/// captured argument, compared with `==`. For a tuple argument this compares
/// every element. It is one entry of an exact-match lookup table.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::{PartialFunction, single_point};
///
/// let origin = single_point((0, 0), "origin");
/// assert_eq!(origin.try_call(&(0, 0)), Some("origin"));
/// assert_eq!(origin.try_call(&(0, 1)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SinglePoint<A, R> {
    arguments: A,
    value: R,
}

impl<A, R> SinglePoint<A, R> {
    /// Creates a partial function returning `value` at `arguments`.
    #[inline]
    #[must_use]
    pub const fn new(arguments: A, value: R) -> Self {
        Self { arguments, value }
    }

    /// Returns the argument at which this function is defined.
    #[inline]
    pub const fn arguments(&self) -> &A {
        &self.arguments
    }

    /// Returns the value produced at that argument.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.value
    }
}

impl<A: PartialEq, R: Clone> PartialFunction<A, R> for SinglePoint<A, R> {
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        (self.arguments == *arguments).then(|| self.value.clone())
    }
}

impl<A: PartialEq, R: Clone> PartialFunction<A, R> for &SinglePoint<A, R> {
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        (**self).try_call(arguments)
    }
}

/// Creates a partial function that returns `value` when called with exactly
/// `arguments` and declines everything else.
///
/// # Examples
///
/// ```
/// use fallthrough::partial::{PartialFunction, single_point};
///
/// let table = [
///     single_point(0, "zero"),
///     single_point(1, "one"),
///     single_point(2, "two"),
/// ];
/// let int_to_name = |key: &i32| table.iter().find_map(|entry| entry.try_call(key));
/// assert_eq!(int_to_name(&1), Some("one"));
/// assert_eq!(int_to_name(&3), None);
/// ```
#[inline]
#[must_use]
pub const fn single_point<A, R>(arguments: A, value: R) -> SinglePoint<A, R> {
    SinglePoint::new(arguments, value)
}
