//! Sentinel-valued absence on top of the `Option` core.
//!
//! Some partial functions signal "no result" with a reserved value of the
//! result type (`-1`, `0`, an empty string, ...) instead of `None`. This module
//! adapts such functions to the [`PartialFunction`] contract and back, so they
//! run on the same builder and runner as everything else.
//!
//! - [`Bottom`]: The reserved value, compared with `==`
//! - [`Bottom::lift`]: A bare-valued function as a [`PartialFunction`]
//! - [`Bottom::attach`]: A chain that returns bare values ([`WithBottom`])
//! - [`Bottom::run`]: Run a sequence of bare-valued functions
//! - [`first_match_sentinel!`]: `first_match!` for bare-valued functions
//!
//! # Caveat
//!
//! A legitimate result equal to the bottom value cannot be told apart from
//! absence: the member that produced it is treated as declining and the scan
//! continues. Choose a bottom value outside the range of legitimate results.
//! Nothing here detects a collision.
//!
//! ```
//! use fallthrough::sentinel::Bottom;
//!
//! let zero_means_nothing = Bottom::new(0);
//! let members: [fn(&i32) -> i32; 2] = [|value| value - 1, |_| 100];
//!
//! // 1 - 1 == 0 collides with the bottom value, so the second member runs
//! assert_eq!(zero_means_nothing.run(&members, &1), 100);
//! ```
//!
//! # Examples
//!
//! ```
//! use fallthrough::first_match_sentinel;
//!
//! fn find_index(text: &str) -> i32 {
//!     text.find('@').and_then(|index| i32::try_from(index).ok()).unwrap_or(-1)
//! }
//!
//! fn find_hash(text: &str) -> i32 {
//!     text.find('#').and_then(|index| i32::try_from(index).ok()).unwrap_or(-1)
//! }
//!
//! let marker = first_match_sentinel!(-1; find_index, find_hash);
//! assert_eq!(marker.call("user@host"), 4);
//! assert_eq!(marker.call("issue #12"), 6);
//! assert_eq!(marker.call("plain"), -1);
//! ```

mod valued_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::first_match_sentinel;

use crate::partial::PartialFunction;
use crate::runner;

/// The value reserved to mean "no result".
///
/// # Examples
///
/// ```
/// use fallthrough::partial::PartialFunction;
/// use fallthrough::sentinel::Bottom;
///
/// let bottom = Bottom::new(String::new());
/// let first_word = bottom.lift(|text: &str| {
///     text.split_whitespace().next().unwrap_or_default().to_owned()
/// });
///
/// assert_eq!(first_word.try_call("hello world"), Some(String::from("hello")));
/// assert_eq!(first_word.try_call("   "), None);
/// assert_eq!(bottom.lower(first_word.try_call("   ")), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bottom<R> {
    value: R,
}

impl<R> Bottom<R> {
    /// Reserves `value` to mean "no result".
    #[inline]
    #[must_use]
    pub const fn new(value: R) -> Self {
        Self { value }
    }

    /// Returns the reserved value.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// Consumes the sentinel and returns the reserved value.
    #[inline]
    pub fn into_value(self) -> R {
        self.value
    }

    /// Attaches this sentinel to a presence-marked chain, giving a callable
    /// that returns bare values.
    #[inline]
    #[must_use]
    pub const fn attach<P>(self, chain: P) -> WithBottom<P, R> {
        WithBottom {
            chain,
            bottom: self,
        }
    }
}

impl<R: PartialEq> Bottom<R> {
    /// Returns `true` if `candidate` equals the reserved value.
    #[inline]
    pub fn is_bottom(&self, candidate: &R) -> bool {
        *candidate == self.value
    }

    /// Converts a bare value into a presence-marked one.
    #[inline]
    pub fn present(&self, candidate: R) -> Option<R> {
        (!self.is_bottom(&candidate)).then_some(candidate)
    }
}

impl<R: Clone> Bottom<R> {
    /// Converts a presence-marked value into a bare one, using the reserved
    /// value for `None`.
    #[inline]
    pub fn lower(&self, signal: Option<R>) -> R {
        signal.unwrap_or_else(|| self.value.clone())
    }

    /// Wraps a bare-valued function as a [`PartialFunction`] that declines
    /// whenever the function returns the reserved value.
    #[inline]
    #[must_use]
    pub fn lift<F>(&self, function: F) -> Lifted<F, R> {
        Lifted {
            function,
            bottom: self.clone(),
        }
    }

    /// Evaluates a presence-marked chain and returns its result as a bare
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallthrough::first_match;
    /// use fallthrough::partial::single_point;
    /// use fallthrough::sentinel::Bottom;
    ///
    /// let names = first_match![single_point(1, "one"), single_point(2, "two")];
    /// let bottom = Bottom::new("?");
    /// assert_eq!(bottom.call(&names, &2), "two");
    /// assert_eq!(bottom.call(&names, &3), "?");
    /// ```
    pub fn call<A, P>(&self, chain: &P, arguments: &A) -> R
    where
        A: ?Sized,
        P: PartialFunction<A, R>,
    {
        self.lower(chain.try_call(arguments))
    }
}

impl<R: PartialEq + Clone> Bottom<R> {
    /// Evaluates bare-valued functions in order and returns the first value
    /// that is not the reserved one.
    ///
    /// The sentinel is supplied once for the whole call. Members after the
    /// first non-bottom value are never invoked, and an empty sequence yields
    /// the reserved value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallthrough::sentinel::Bottom;
    ///
    /// fn first(code: &u8) -> char {
    ///     if *code == 1 { 'a' } else { '\0' }
    /// }
    ///
    /// fn second(code: &u8) -> char {
    ///     if *code == 2 { 'b' } else { '\0' }
    /// }
    ///
    /// let lookups: [fn(&u8) -> char; 2] = [first, second];
    ///
    /// let bottom = Bottom::new('\0');
    /// assert_eq!(bottom.run(&lookups, &2), 'b');
    /// assert_eq!(bottom.run(&lookups, &3), '\0');
    /// ```
    pub fn run<I, A>(&self, functions: I, arguments: &A) -> R
    where
        I: IntoIterator,
        I::Item: Fn(&A) -> R,
        A: ?Sized,
    {
        let members = functions
            .into_iter()
            .map(|function| move |input: &A| self.present(function(input)));

        self.lower(runner::run(members, arguments))
    }
}

/// A bare-valued function adapted to the [`PartialFunction`] contract.
///
/// Created by [`Bottom::lift`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lifted<F, R> {
    function: F,
    bottom: Bottom<R>,
}

impl<F, R> Lifted<F, R> {
    /// Returns the wrapped function.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the sentinel the function's results are compared against.
    #[inline]
    pub const fn bottom(&self) -> &Bottom<R> {
        &self.bottom
    }
}

impl<A, R, F> PartialFunction<A, R> for Lifted<F, R>
where
    A: ?Sized,
    R: PartialEq,
    F: Fn(&A) -> R,
{
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        self.bottom.present((self.function)(arguments))
    }
}

impl<A, R, F> PartialFunction<A, R> for &Lifted<F, R>
where
    A: ?Sized,
    R: PartialEq,
    F: Fn(&A) -> R,
{
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        (**self).try_call(arguments)
    }
}

/// A presence-marked chain whose result is reported as a bare value.
///
/// Created by [`Bottom::attach`] or
/// [`first_match_sentinel!`](crate::first_match_sentinel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WithBottom<P, R> {
    chain: P,
    bottom: Bottom<R>,
}

impl<P, R> WithBottom<P, R> {
    /// Returns the underlying presence-marked chain.
    #[inline]
    pub const fn chain(&self) -> &P {
        &self.chain
    }

    /// Returns the sentinel used for "no result".
    #[inline]
    pub const fn bottom(&self) -> &Bottom<R> {
        &self.bottom
    }

    /// Splits into the chain and its sentinel.
    #[inline]
    pub fn into_parts(self) -> (P, Bottom<R>) {
        (self.chain, self.bottom)
    }
}

impl<P, R: Clone> WithBottom<P, R> {
    /// Evaluates the chain, returning the reserved value if no member
    /// produces a result.
    pub fn call<A>(&self, arguments: &A) -> R
    where
        A: ?Sized,
        P: PartialFunction<A, R>,
    {
        self.bottom.call(&self.chain, arguments)
    }

    /// Converts into a plain closure returning bare values.
    pub fn into_fn<A>(self) -> impl Fn(&A) -> R
    where
        A: ?Sized,
        P: PartialFunction<A, R>,
    {
        move |arguments: &A| self.call(arguments)
    }
}
