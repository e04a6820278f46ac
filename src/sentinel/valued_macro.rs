//! The `first_match_sentinel!` macro for chains of bare-valued functions.

/// Composes bare-valued functions into a first-match-wins chain that signals
/// "no result" with a reserved value.
///
/// `first_match_sentinel!(bottom; f, g)` lifts every member with
/// [`Bottom::lift`](crate::sentinel::Bottom::lift), chains them with
/// [`first_match!`](crate::first_match), and attaches the sentinel. Calling the
/// result returns the first member value not equal to `bottom`, or `bottom`
/// itself when every member returns it.
///
/// # Syntax
///
/// - `first_match_sentinel!(bottom;)` - Always returns `bottom`
/// - `first_match_sentinel!(bottom; f, g, ...)` - Tries `f`, `g`, ... in order
///
/// # Examples
///
/// ```
/// use fallthrough::first_match_sentinel;
///
/// fn small(value: &u32) -> &'static str {
///     if *value < 10 { "small" } else { "" }
/// }
///
/// fn even(value: &u32) -> &'static str {
///     if value % 2 == 0 { "even" } else { "" }
/// }
///
/// let describe = first_match_sentinel!(""; small, even);
/// assert_eq!(describe.call(&3), "small");
/// assert_eq!(describe.call(&12), "even");
/// assert_eq!(describe.call(&13), "");
/// ```
#[macro_export]
macro_rules! first_match_sentinel {
    ($bottom:expr ; $($function:expr),* $(,)?) => {{
        let bottom = $crate::sentinel::Bottom::new($bottom);
        let chain = $crate::first_match!($(bottom.lift($function)),*);
        bottom.attach(chain)
    }};
}
