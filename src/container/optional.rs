//! Optional value: `Empty` or `Filled(T)`.
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::{Either, Optional};
//!
//! let filled = Optional::Filled(100);
//! assert_eq!(filled.to_string(), "Filled(100)");
//! assert_eq!(filled.into_left::<String>(), Some(Either::Left(100)));
//!
//! let empty: Optional<i32> = Optional::Empty;
//! assert_eq!(empty.to_string(), "Empty()");
//! assert_eq!(empty.into_left::<String>(), None);
//! ```

use std::fmt;

use super::boxed::Container;
use super::either::Either;
use crate::matching::{Match, Matchable, Tagged, TypeTag, match_on, tags};

/// A value that may be absent.
///
/// The variant is fixed at construction. Conversions to sibling containers
/// build a new value and only exist for `Filled`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    Empty,
    /// Exactly one value.
    Filled(T),
}

impl<T> Optional<T> {
    /// Returns `true` for `Filled`.
    #[inline]
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    /// Returns `true` for `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns a reference to the value, if filled.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Maps the value of a `Filled`; `Empty` stays empty.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Filled(value) => Optional::Filled(function(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Chains a computation that may itself be empty.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Filled(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Filled(value) => value,
            Self::Empty => default,
        }
    }

    /// Moves a filled value into `Either::Left`.
    #[inline]
    pub fn into_left<R>(self) -> Option<Either<T, R>> {
        self.into_option().map(Either::Left)
    }

    /// Moves a filled value into `Either::Right`.
    #[inline]
    pub fn into_right<L>(self) -> Option<Either<L, T>> {
        self.into_option().map(Either::Right)
    }

    /// Moves a filled value into a [`Container`].
    #[inline]
    pub fn into_container(self) -> Option<Container<T>> {
        self.into_option().map(Container::new)
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Binds the value for pattern matching.
    pub const fn matcher(&self) -> Match<'_, Self> {
        match_on(self)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Empty, Self::Filled)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filled(value) => write!(formatter, "Filled({value})"),
            Self::Empty => formatter.write_str("Empty()"),
        }
    }
}

impl<T> Optional<T> {
    const fn tag(&self) -> TypeTag {
        match self {
            Self::Filled(_) => tags::FILLED,
            Self::Empty => tags::EMPTY,
        }
    }
}

impl<T: fmt::Debug> Tagged for Optional<T> {
    fn type_tag(&self) -> TypeTag {
        self.tag()
    }
}

impl<T> Matchable for Optional<T> {
    fn type_tag(&self) -> Option<TypeTag> {
        Some(self.tag())
    }
}
