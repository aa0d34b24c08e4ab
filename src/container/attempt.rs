//! Result of a fallible computation: `Success(T)` or `Failure(E)`.
//!
//! `Try` is what [`safecall`](super::safecall) and the sequence operations
//! return. It converts freely to and from `Result`, so `?` is available via
//! [`Try::into_result`].
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::Try;
//!
//! let parsed: Try<i32, String> = "42".parse::<i32>().map_err(|error| error.to_string()).into();
//! assert_eq!(parsed.map(|value| value + 1), Try::Success(43));
//!
//! let failed: Try<i32, String> = Try::Failure("nope".to_string());
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

use std::fmt;

use super::either::Either;
use super::optional::Optional;
use crate::matching::{Match, Matchable, Tagged, TypeTag, match_on, tags};

/// Outcome of a computation that may fail.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a `Try` may be a `Failure` that should be handled"]
pub enum Try<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<T, E> Try<T, E> {
    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, consuming the try.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure value, consuming the try.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the success value.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Maps the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Maps the failure value.
    #[inline]
    pub fn map_failure<G, F>(self, function: F) -> Try<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(function(error)),
        }
    }

    /// Chains a computation that may itself fail.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or recovers from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// `Success` becomes `Right`; `Failure` becomes `Left`.
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(error),
        }
    }

    /// `Success` becomes `Filled`; the failure is dropped.
    #[inline]
    pub fn into_optional(self) -> Optional<T> {
        self.success().into()
    }

    /// Binds the value for pattern matching.
    pub const fn matcher(&self) -> Match<'_, Self> {
        match_on(self)
    }

    const fn tag(&self) -> TypeTag {
        match self {
            Self::Success(_) => tags::SUCCESS,
            Self::Failure(_) => tags::FAILURE,
        }
    }
}

impl<T: Default, E> Try<T, E> {
    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(|_| T::default())
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(attempt: Try<T, E>) -> Self {
        attempt.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> Tagged for Try<T, E> {
    fn type_tag(&self) -> TypeTag {
        self.tag()
    }
}

impl<T, E> Matchable for Try<T, E> {
    fn type_tag(&self) -> Option<TypeTag> {
        Some(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_and_then_short_circuits() {
        let calls = std::cell::Cell::new(0);
        let failed: Try<i32, &str> = Try::Failure("first");
        let chained = failed.and_then(|value| {
            calls.set(calls.get() + 1);
            Try::Success(value + 1)
        });
        assert_eq!(chained, Try::Failure("first"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_conversions() {
        let success: Try<i32, &str> = Try::Success(1);
        assert_eq!(success.into_either(), Either::Right(1));
        assert_eq!(success.into_optional(), Optional::Filled(1));
        assert_eq!(success.into_result(), Ok(1));

        let failure: Try<i32, &str> = Try::Failure("bad");
        assert_eq!(failure.into_either(), Either::Left("bad"));
        assert_eq!(failure.into_optional(), Optional::Empty);
        assert_eq!(Result::from(failure), Err("bad"));
    }

    #[rstest]
    fn test_map_failure() {
        let failure: Try<i32, &str> = Try::Failure("bad");
        assert_eq!(failure.map_failure(str::len), Try::Failure(3));
    }

    #[rstest]
    #[case(Try::Success(5), "Success(5)")]
    #[case(Try::Failure(7), "Failure(7)")]
    fn test_display(#[case] value: Try<i32, i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_tags() {
        let success: Try<i32, i32> = Try::Success(0);
        let failure: Try<i32, i32> = Try::Failure(0);
        assert_eq!(Tagged::type_tag(&success), tags::SUCCESS);
        assert_eq!(Tagged::type_tag(&failure), tags::FAILURE);
    }
}
