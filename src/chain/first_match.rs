//! Typed static composition of partial functions.

use crate::partial::{Constant, Never, PartialFunction};

/// Two partial functions tried in order: `first`, then `rest`.
///
/// Longer chains nest to the right, so `first_match![f, g, h]` is
/// `FirstMatch(f, FirstMatch(g, FirstMatch(h, Never)))`. The whole chain is a
/// single concrete type, so a call compiles down to a sequence of direct calls
/// with an early return.
///
/// `rest` is only invoked when `first` declines.
///
/// # Examples
///
/// ```
/// use fallthrough::chain::FirstMatch;
/// use fallthrough::partial::{PartialFunction, constant, single_point};
///
/// let chain = FirstMatch::new(single_point(1, "one"), constant("many"));
/// assert_eq!(chain.try_call(&1), Some("one"));
/// assert_eq!(chain.try_call(&5), Some("many"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FirstMatch<F, G> {
    first: F,
    rest: G,
}

impl<F, G> FirstMatch<F, G> {
    /// Chains `first` before `rest`.
    #[inline]
    #[must_use]
    pub const fn new(first: F, rest: G) -> Self {
        Self { first, rest }
    }

    /// Returns the member tried first.
    #[inline]
    pub const fn first(&self) -> &F {
        &self.first
    }

    /// Returns the remainder of the chain.
    #[inline]
    pub const fn rest(&self) -> &G {
        &self.rest
    }

    /// Splits the chain into its head and remainder.
    #[inline]
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.rest)
    }

    /// Converts the chain into a plain closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallthrough::first_match;
    /// use fallthrough::partial::constant;
    ///
    /// let lookup = first_match![|key: &u8| (*key == 0).then_some("zero"), constant("other")];
    /// let lookup = lookup.into_fn();
    /// assert_eq!(lookup(&0), Some("zero"));
    /// assert_eq!(lookup(&1), Some("other"));
    /// ```
    pub fn into_fn<A, R>(self) -> impl Fn(&A) -> Option<R>
    where
        A: ?Sized,
        Self: PartialFunction<A, R>,
    {
        move |arguments: &A| self.try_call(arguments)
    }
}

impl<A, R, F, G> PartialFunction<A, R> for FirstMatch<F, G>
where
    A: ?Sized,
    F: PartialFunction<A, R>,
    G: PartialFunction<A, R>,
{
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        match self.first.try_call(arguments) {
            Some(result) => Some(result),
            None => self.rest.try_call(arguments),
        }
    }
}

impl<A, R, F, G> PartialFunction<A, R> for &FirstMatch<F, G>
where
    A: ?Sized,
    F: PartialFunction<A, R>,
    G: PartialFunction<A, R>,
{
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        (**self).try_call(arguments)
    }
}

static_assertions::assert_impl_all!(FirstMatch<Constant<i32>, Never>: Send, Sync, Copy);

/// Method-chaining construction of [`FirstMatch`] chains.
///
/// Implemented for every type, so any partial function can be extended with
/// fallbacks without the [`first_match!`](crate::first_match) macro.
///
/// `f.or_try(g).or_try(h)` nests to the left while `first_match![f, g, h]`
/// nests to the right. Both try `f`, `g` and `h` in that order and stop at the
/// same member.
///
/// # Examples
///
/// ```
/// use fallthrough::chain::PartialFunctionExt;
/// use fallthrough::partial::{PartialFunction, constant};
///
/// let parse = |text: &str| text.parse::<u32>().ok();
/// let length = |text: &str| u32::try_from(text.len()).ok().filter(|length| *length > 3);
///
/// let chain = parse.or_try(length).or_try(constant(0));
/// assert_eq!(chain.try_call("17"), Some(17));
/// assert_eq!(chain.try_call("seventeen"), Some(9));
/// assert_eq!(chain.try_call("abc"), Some(0));
/// ```
pub trait PartialFunctionExt: Sized {
    /// Returns a chain that tries `self`, then `next`.
    #[inline]
    #[must_use]
    fn or_try<H>(self, next: H) -> FirstMatch<Self, H> {
        FirstMatch::new(self, next)
    }
}

impl<T> PartialFunctionExt for T {}
