//! Disjoint union: `Left(L)` or `Right(R)`.
//!
//! By convention `Left` carries the failure or first alternative and `Right`
//! the success or second alternative. Moving a value to the other side
//! ([`Either::swap`]) builds a new value; the variant of an existing value
//! never changes.
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::{Either, Optional};
//!
//! let right: Either<String, i32> = Either::Right(42);
//! let left: Either<String, i32> = Either::Left("missing".to_string());
//!
//! let described = left.clone().fold(
//!     |message| format!("error: {message}"),
//!     |number| format!("number: {number}"),
//! );
//! assert_eq!(described, "error: missing");
//!
//! assert_eq!(right.into_optional(), Optional::Filled(42));
//! assert_eq!(left.into_optional(), Optional::Empty);
//! ```

use std::fmt;

use super::attempt::Try;
use super::optional::Optional;
use crate::matching::{Match, Matchable, Tagged, TypeTag, match_on, tags};

/// A value that is one of two types.
///
/// # Examples
///
/// ```rust
/// use casebox::container::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|value| value * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// Failure or first alternative.
    Left(L),
    /// Success or second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps the left value, leaving a right value untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Collapses both sides into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Moves the value to the other side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::container::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(1);
    /// assert_eq!(left.swap(), Either::Right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Splits into a pair of options.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    /// `Right` becomes `Filled`; `Left` becomes `Empty`.
    #[inline]
    pub fn into_optional(self) -> Optional<R> {
        self.right().into()
    }

    /// `Right` becomes `Success`; `Left` becomes `Failure`.
    #[inline]
    pub fn into_try(self) -> Try<R, L> {
        match self {
            Self::Left(error) => Try::Failure(error),
            Self::Right(value) => Try::Success(value),
        }
    }

    /// Binds the value for pattern matching.
    pub const fn matcher(&self) -> Match<'_, Self> {
        match_on(self)
    }

    const fn tag(&self) -> TypeTag {
        match self {
            Self::Left(_) => tags::LEFT,
            Self::Right(_) => tags::RIGHT,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()` for a right value.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` for a left value.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Tags
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> Tagged for Either<L, R> {
    fn type_tag(&self) -> TypeTag {
        self.tag()
    }
}

impl<L, R> Matchable for Either<L, R> {
    fn type_tag(&self) -> Option<TypeTag> {
        Some(self.tag())
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
