//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::{Either, Optional};
//! use casebox::typeclass::Functor;
//!
//! let filled: Optional<i32> = Optional::Filled(5);
//! assert_eq!(filled.fmap(|n| n.to_string()), Optional::Filled("5".to_string()));
//!
//! let left: Either<String, i32> = Either::Left("kept".to_string());
//! assert_eq!(left.fmap(|n| n + 1), Either::Left("kept".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::container::{Container, Either, Optional, Try};

/// A type whose contents can be mapped while keeping its shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies `function` to a reference of the value, leaving `self` usable.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::container::Optional;
    /// use casebox::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Filled(5).replace("replaced"), Optional::Filled("replaced"));
    /// assert_eq!(Optional::<i32>::Empty.replace("replaced"), Optional::Empty);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Container<T> Implementation
// =============================================================================

impl<T> Functor for Container<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Container<B>
    where
        F: FnOnce(T) -> B,
    {
        Container::new(function(self.into_value()))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Container<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Optional<T> Implementation
// =============================================================================

impl<T> Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.value().map(function).into()
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Try<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn container_fmap_ref_keeps_receiver() {
        let boxed = Container::new("hello".to_string());
        let length = boxed.fmap_ref(String::len);
        assert_eq!(length, Container::new(5));
        assert_eq!(boxed.value(), "hello");
    }

    #[rstest]
    #[case(Optional::Filled(5), Optional::Filled(()))]
    #[case(Optional::Empty, Optional::Empty)]
    fn optional_void(#[case] input: Optional<i32>, #[case] expected: Optional<()>) {
        assert_eq!(input.void(), expected);
    }

    #[rstest]
    fn either_fmap_ref_clones_left() {
        let left: Either<String, i32> = Either::Left("error".to_string());
        assert_eq!(left.fmap_ref(|n| n * 2), Either::Left("error".to_string()));
        let right: Either<String, i32> = Either::Right(3);
        assert_eq!(right.fmap_ref(|n| n * 2), Either::Right(6));
    }

    #[rstest]
    fn try_fmap() {
        let success: Try<i32, String> = Try::Success(2);
        assert_eq!(success.fmap(|n| n + 1), Try::Success(3));
        let failure: Try<i32, String> = Try::Failure("x".to_string());
        assert_eq!(failure.fmap_ref(|n| n + 1), Try::Failure("x".to_string()));
    }
}
