//! A growable chain of boxed partial functions.

use std::fmt;

use crate::partial::PartialFunction;
use crate::runner;

/// A boxed partial function, as stored by [`Chain`].
pub type BoxedPartialFunction<'a, A, R> = Box<dyn Fn(&A) -> Option<R> + 'a>;

/// An ordered chain of partial functions assembled at run time.
///
/// Use `Chain` when the members are not known at compile time, or when they
/// have different concrete types. Members are boxed and evaluated through
/// dynamic dispatch in insertion order; [`first_match!`](crate::first_match)
/// is the static counterpart.
///
/// Calling the chain never reorders or mutates its members.
///
/// # Examples
///
/// ```
/// use fallthrough::chain::Chain;
/// use fallthrough::partial::{constant, single_point};
///
/// let mut int_to_name = Chain::new();
/// for (key, name) in [(0, "zero"), (1, "one"), (2, "two")] {
///     int_to_name.push(single_point(key, name));
/// }
///
/// assert_eq!(int_to_name.call(&2), Some("two"));
/// assert_eq!(int_to_name.call(&7), None);
///
/// let int_to_name = int_to_name.with(constant("many"));
/// assert_eq!(int_to_name.call(&7), Some("many"));
/// ```
pub struct Chain<'a, A: ?Sized, R> {
    members: Vec<BoxedPartialFunction<'a, A, R>>,
}

impl<'a, A: ?Sized, R> Chain<'a, A, R> {
    /// Creates an empty chain, which declines every argument.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Creates an empty chain with room for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Appends `member` after every existing member.
    pub fn push<P>(&mut self, member: P)
    where
        P: PartialFunction<A, R> + 'a,
    {
        self.members
            .push(Box::new(move |arguments: &A| member.try_call(arguments)));

        #[cfg(feature = "tracing")]
        tracing::debug!(length = self.members.len(), "partial function appended to chain");
    }

    /// Appends `member` and returns the chain, for builder-style construction.
    #[must_use]
    pub fn with<P>(mut self, member: P) -> Self
    where
        P: PartialFunction<A, R> + 'a,
    {
        self.push(member);
        self
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the chain has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns an iterator over the members in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxedPartialFunction<'a, A, R>> {
        self.members.iter()
    }

    /// Returns the members in evaluation order.
    pub fn as_slice(&self) -> &[BoxedPartialFunction<'a, A, R>] {
        &self.members
    }

    /// Evaluates the members in order and returns the first result produced.
    ///
    /// Members after the first success are not invoked. An empty chain
    /// returns `None` without invoking anything.
    pub fn call(&self, arguments: &A) -> Option<R> {
        runner::run(self, arguments)
    }
}

impl<A: ?Sized, R> Default for Chain<'_, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, R> fmt::Debug for Chain<'_, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Chain")
            .field("length", &self.members.len())
            .finish_non_exhaustive()
    }
}

impl<A: ?Sized, R> PartialFunction<A, R> for Chain<'_, A, R> {
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        self.call(arguments)
    }
}

impl<A: ?Sized, R> PartialFunction<A, R> for &Chain<'_, A, R> {
    #[inline]
    fn try_call(&self, arguments: &A) -> Option<R> {
        self.call(arguments)
    }
}

impl<'c, 'a, A: ?Sized, R> IntoIterator for &'c Chain<'a, A, R> {
    type Item = &'c BoxedPartialFunction<'a, A, R>;
    type IntoIter = std::slice::Iter<'c, BoxedPartialFunction<'a, A, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<'a, A, R, P> FromIterator<P> for Chain<'a, A, R>
where
    A: ?Sized,
    P: PartialFunction<A, R> + 'a,
{
    fn from_iter<I: IntoIterator<Item = P>>(members: I) -> Self {
        let mut chain = Self::new();
        chain.extend(members);
        chain
    }
}

impl<'a, A, R, P> Extend<P> for Chain<'a, A, R>
where
    A: ?Sized,
    P: PartialFunction<A, R> + 'a,
{
    fn extend<I: IntoIterator<Item = P>>(&mut self, members: I) {
        for member in members {
            self.push(member);
        }
    }
}

static_assertions::assert_not_impl_any!(Chain<'static, i32, i32>: Send, Sync);
