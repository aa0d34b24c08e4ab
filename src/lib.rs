//! # casebox
//!
//! Immutable containers, structural pattern matching, fallible pipes and an
//! immutable sequence for Rust.
//!
//! ## Overview
//!
//! - **Containers**: `Container`, `Optional` (`Empty` | `Filled`), `Either`
//!   (`Left` | `Right`), `Try` (`Success` | `Failure`), `Throwable`, and the
//!   `safecall` wrapper that turns returned errors and panics into `Try`
//! - **Matching**: ordered case lists with literal, regex, type-tag and
//!   wildcard patterns; first match wins
//! - **Sequence**: `Seq`, whose every "changing" operation returns a new
//!   sequence, with all-or-nothing bulk transforms
//! - **Composition**: `pipe(value).then(f).run()` and the `pipe!` macro
//! - **Type Classes**: `Functor` over the containers
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Tagged)]` and `#[derive(Record)]`
//! - `async`: `safecall_async`
//! - `arc`: `Seq` storage uses `Arc`, making it `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for the containers and `Seq`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use casebox::prelude::*;
//!
//! let numbers = seq![3, 1, 2];
//! let parity = |value: &i32| if value % 2 == 0 { "even" } else { "odd" };
//!
//! let described = numbers
//!     .auto_sorted()
//!     .mapped(|value| Ok::<_, Throwable>(parity(value)))
//!     .unwrap_or_default();
//!
//! assert_eq!(described.to_string(), "Seq(odd, even, odd)");
//!
//! let cases = vec![
//!     literal_case(2, |_: &i32| "two"),
//!     wildcard_case(|_: &i32| "other"),
//! ];
//! assert_eq!(evaluate(&2, &cases), Some("two"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use casebox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{Pipe, PipeError, pipe};
    pub use crate::container::{
        Action, Container, Either, FailStrategy, Optional, Outcome, Throwable, Try, safecall,
    };
    #[cfg(feature = "async")]
    pub use crate::container::safecall_async;
    pub use crate::matching::{
        Case, Cases, Matchable, Pattern, StaticTagged, Tagged, TypeTag, Value, evaluate, is,
        literal_case, match_on, regex_case, tags, type_tag_case, wildcard_case,
    };
    pub use crate::sequence::{Seq, SeqError};
    pub use crate::seq;
    pub use crate::typeclass::{Functor, TypeConstructor};

    #[cfg(feature = "derive")]
    pub use casebox_derive::{Record, Tagged};
}

pub mod compose;
pub mod container;
pub mod matching;
pub mod sequence;
pub mod typeclass;

#[cfg(feature = "derive")]
pub use casebox_derive::{Record, Tagged};
