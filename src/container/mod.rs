//! Immutable value containers.
//!
//! - [`Container`]: exactly one value
//! - [`Optional`]: `Empty` or `Filled(T)`
//! - [`Either`]: `Left(L)` or `Right(R)`
//! - [`Try`]: `Success(T)` or `Failure(E)`
//! - [`Throwable`]: tagged error value
//! - [`safecall`]: runs a callback and captures its failure as a [`Try`]
//! - [`Action`]: fallible function with a failure strategy
//!
//! Each two-case container fixes its variant at construction. Converting to
//! a sibling (`Optional::into_left`, `Either::swap`, `Try::into_either`, ...)
//! builds a new value.
//!
//! Every container carries a runtime [`TypeTag`](crate::matching::TypeTag),
//! so it can be selected by type-tag cases, and exposes `matcher()`:
//!
//! ```rust
//! use casebox::container::Try;
//! use casebox::matching::{tags, type_tag_case};
//!
//! let cases = vec![
//!     type_tag_case(tags::SUCCESS, |_: &Try<i32, String>| "ok"),
//!     type_tag_case(tags::FAILURE, |_: &Try<i32, String>| "failed"),
//! ];
//!
//! let attempt: Try<i32, String> = Try::Failure("boom".to_string());
//! assert_eq!(attempt.matcher().against(&cases), Some("failed"));
//! ```

mod action;
mod attempt;
mod boxed;
mod either;
mod optional;
mod safecall;
mod throwable;

pub use action::{Action, FailStrategy, Outcome};
pub use attempt::Try;
pub use boxed::Container;
pub use either::Either;
pub use optional::Optional;
pub use safecall::safecall;
#[cfg(feature = "async")]
pub use safecall::safecall_async;
pub use throwable::Throwable;
