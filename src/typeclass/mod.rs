//! Type class traits over the containers.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: structure-preserving mapping
//!
//! `Either` is right-biased and `Try` is success-biased: `fmap` touches the
//! `Right` / `Success` value and carries the other side through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::{Container, Try};
//! use casebox::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(functor: F) -> F::WithType<String> {
//!     functor.fmap(|value| format!("#{value}"))
//! }
//!
//! assert_eq!(describe(Container::new(7)), Container::new("#7".to_string()));
//!
//! let failed: Try<i32, String> = Try::Failure("bad".to_string());
//! assert_eq!(describe(failed), Try::Failure("bad".to_string()));
//! ```

mod functor;
mod higher;

pub use functor::Functor;
pub use higher::TypeConstructor;
