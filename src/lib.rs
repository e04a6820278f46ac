//! # fallthrough
//!
//! First-match-wins chains of partial functions.
//!
//! ## Overview
//!
//! A *partial function* may decline to produce a result for some inputs. This
//! library chains several of them into a single callable that tries each member
//! in order and returns the first result produced. Typical uses are pluggable
//! lookup, parse and dispatch pipelines.
//!
//! - **Partial functions**: the [`PartialFunction`](partial::PartialFunction)
//!   contract and the `constant`, `single_point`, `default_value` and `never`
//!   combinators
//! - **Chain Builder**: `first_match!`, `FirstMatch` and the runtime `Chain`
//!   container
//! - **Chain Runner**: `run` and `run_range` over containers, arrays and
//!   iterators
//! - **Sentinel adapter**: `Bottom` for chains whose members signal absence with
//!   a reserved value instead of `Option`
//!
//! ## Feature Flags
//!
//! - `chain`: Static and dynamic chain builders (implies `runner`)
//! - `runner`: Short-circuit evaluation over runtime sequences
//! - `sentinel`: Sentinel-valued adapter (implies `runner` and `chain`)
//! - `tracing`: Emit `tracing` events while chains are evaluated
//! - `full`: Enable all features
//!
//! Every feature builds on its own, and so do the unit tests and doctests of
//! the modules it enables:
//!
//! ```text
//! cargo test --no-default-features
//! cargo test --no-default-features --features runner
//! cargo test --no-default-features --features chain
//! cargo test --no-default-features --features sentinel
//! cargo test --all-features
//! ```
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "chain")] {
//! use fallthrough::prelude::*;
//!
//! fn decimal(text: &str) -> Option<i32> {
//!     text.parse().ok()
//! }
//!
//! fn roman(text: &str) -> Option<i32> {
//!     ["I", "II", "III", "IV", "V"]
//!         .iter()
//!         .position(|numeral| *numeral == text)
//!         .and_then(|index| i32::try_from(index + 1).ok())
//! }
//!
//! let string_to_number = first_match![decimal, roman];
//! assert_eq!(string_to_number.try_call("2019"), Some(2019));
//! assert_eq!(string_to_number.try_call("IV"), Some(4));
//! assert_eq!(string_to_number.try_call("sieben"), None);
//!
//! // The same members evaluated as a runtime sequence
//! let members: [fn(&str) -> Option<i32>; 2] = [decimal, roman];
//! assert_eq!(run(&members, "IV"), Some(4));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the partial-function contract, the combinators, and every
/// enabled chain utility.
///
/// # Usage
///
/// ```rust
/// use fallthrough::prelude::*;
/// ```
pub mod prelude {

    pub use crate::partial::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;

    #[cfg(feature = "runner")]
    pub use crate::runner::*;

    #[cfg(feature = "sentinel")]
    pub use crate::sentinel::*;
}

pub mod partial;

#[cfg(feature = "chain")]
pub mod chain;

#[cfg(feature = "runner")]
pub mod runner;

#[cfg(feature = "sentinel")]
pub mod sentinel;
