//! Single-value container.
//!
//! [`Container<T>`] holds exactly one value, set at construction and never
//! reassigned. Transforming it always produces a new container.
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::Container;
//!
//! let boxed = Container::new(20);
//! let doubled = boxed.map(|value| value * 2);
//!
//! assert_eq!(*boxed.value(), 20);   // Original unchanged
//! assert_eq!(*doubled.value(), 40);
//! assert_eq!(doubled.to_string(), "Container(40)");
//! ```

use std::fmt;

use crate::compose::{Pipe, pipe};
use crate::matching::{Match, Matchable, StaticTagged, Tagged, TypeTag, match_on, tags};

/// An immutable holder of exactly one value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Container<T> {
    value: T,
}

impl<T> Container<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the stored value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns a new container wrapping `function(value)`.
    ///
    /// Panics raised by `function` are not caught.
    #[inline]
    pub fn map<U, F>(&self, function: F) -> Container<U>
    where
        F: FnOnce(&T) -> U,
    {
        Container::new(function(&self.value))
    }

    /// Binds the container for pattern matching.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::container::Container;
    /// use casebox::matching::{tags, type_tag_case, wildcard_case};
    ///
    /// let cases = vec![
    ///     type_tag_case(tags::CONTAINER, |boxed: &Container<i32>| *boxed.value()),
    ///     wildcard_case(|_: &Container<i32>| -1),
    /// ];
    /// assert_eq!(Container::new(7).matcher().against(&cases), Some(7));
    /// ```
    pub const fn matcher(&self) -> Match<'_, Self> {
        match_on(self)
    }
}

impl<T: Clone> Container<T> {
    /// Returns an equal container.
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Starts a pipe over a copy of the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::container::Container;
    ///
    /// let result = Container::new(1)
    ///     .pipe::<String>()
    ///     .then(|value| Ok(value + 100))
    ///     .then(|value| Ok(value * 2))
    ///     .run();
    /// assert_eq!(result, Ok(202));
    /// ```
    pub fn pipe<'a, E>(&self) -> Pipe<'a, T, E> {
        pipe(self.value.clone())
    }
}

impl<T> Container<Container<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Container<T> {
        self.value
    }
}

impl<T> From<T> for Container<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Container({})", self.value)
    }
}

impl<T: fmt::Debug> Tagged for Container<T> {
    fn type_tag(&self) -> TypeTag {
        tags::CONTAINER
    }
}

impl<T> StaticTagged for Container<T> {
    const TYPE_TAG: TypeTag = tags::CONTAINER;
}

impl<T> Matchable for Container<T> {
    fn type_tag(&self) -> Option<TypeTag> {
        Some(tags::CONTAINER)
    }
}
