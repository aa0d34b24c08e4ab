//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` directly.
//! [`TypeConstructor`] works around this with a GAT that re-applies the same
//! constructor to another type.
//!
//! # Example
//!
//! ```rust
//! use casebox::container::Optional;
//! use casebox::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let filled: Optional<i32> = Optional::Filled(42);
//! let empty: Optional<String> = transform_type(filled);
//! assert_eq!(empty, Optional::Empty);
//! ```

use crate::container::{Container, Either, Optional, Try};

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Container<T> {
    type Inner = T;
    type WithType<B> = Container<B>;
}

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

/// Right-biased: the left type is fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

/// Success-biased: the failure type is fixed.
impl<T, E> TypeConstructor for Try<T, E> {
    type Inner = T;
    type WithType<B> = Try<B, E>;
}
