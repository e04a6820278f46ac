//! Chain builders.
//!
//! A chain tries its members in order and returns the first result produced.
//! This module builds chains in two ways:
//!
//! - [`first_match!`]: Compose a fixed list of partial functions into one
//!   [`FirstMatch`] value, statically typed and statically dispatched
//! - [`PartialFunctionExt::or_try`]: The same composition by method chaining
//! - [`Chain`]: A growable, boxed chain for members only known at run time
//!
//! # Examples
//!
//! ## Static composition
//!
//! ```
//! use fallthrough::first_match;
//! use fallthrough::partial::{PartialFunction, constant};
//!
//! fn decimal(text: &str) -> Option<i64> {
//!     text.parse().ok()
//! }
//!
//! fn hexadecimal(text: &str) -> Option<i64> {
//!     i64::from_str_radix(text.strip_prefix("0x")?, 16).ok()
//! }
//!
//! let number = first_match![decimal, hexadecimal, constant(-1)];
//! assert_eq!(number.try_call("255"), Some(255));
//! assert_eq!(number.try_call("0xff"), Some(255));
//! assert_eq!(number.try_call("ff"), Some(-1));
//! ```
//!
//! ## Dynamic composition
//!
//! ```
//! use fallthrough::chain::Chain;
//! use fallthrough::partial::single_point;
//!
//! let keywords = ["fn", "let", "match"];
//! let lookup: Chain<'_, &str, usize> = keywords
//!     .iter()
//!     .enumerate()
//!     .map(|(index, keyword)| single_point(*keyword, index))
//!     .collect();
//!
//! assert_eq!(lookup.call(&"let"), Some(1));
//! assert_eq!(lookup.call(&"loop"), None);
//! ```
//!
//! # Laws
//!
//! For partial functions `f`, `g`, `h` and any argument:
//!
//! - **Left Identity**: `first_match![never(), f] == f`
//! - **Right Identity**: `first_match![f, never()] == f`
//! - **Associativity**: `first_match![first_match![f, g], h] == first_match![f, first_match![g, h]]`
//! - **Left Bias**: if `f` succeeds, `first_match![f, g] == f` and `g` is not invoked

mod dynamic;
mod first_match;
mod first_match_macro;

pub use dynamic::{BoxedPartialFunction, Chain};
pub use first_match::{FirstMatch, PartialFunctionExt};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::first_match;
