//! Tagged error value.
//!
//! A [`Throwable`] pairs a [`TypeTag`] (its "name", which may descend from
//! [`tags::ERROR`]) with a message. Case lists written against
//! [`tags::ERROR`] select every throwable, whatever its concrete tag.
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::Throwable;
//! use casebox::matching::{TypeTag, evaluate, tags, type_tag_case, wildcard_case};
//!
//! const VALIDATION_ERROR: TypeTag = TypeTag::child("ValidationError", &tags::ERROR);
//!
//! let cases = vec![
//!     type_tag_case(tags::ERROR, |error: &Throwable| error.message().to_string()),
//!     wildcard_case(|_: &Throwable| String::from("else")),
//! ];
//!
//! let error = Throwable::new(VALIDATION_ERROR, "name is required");
//! assert_eq!(evaluate(&error, &cases), Some("name is required".to_string()));
//! assert_eq!(error.to_string(), "ValidationError: name is required");
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::compose::PipeError;
use crate::matching::{Matchable, StaticTagged, Tagged, TypeTag, tags};
use crate::sequence::SeqError;

/// An error identified by a type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{tag}: {message}")]
pub struct Throwable {
    tag: TypeTag,
    message: String,
}

impl Throwable {
    /// Creates a throwable with an explicit message.
    pub fn new(tag: TypeTag, message: impl Into<String>) -> Self {
        Self {
            tag,
            message: message.into(),
        }
    }

    /// Creates a throwable whose message is the tag name.
    #[must_use]
    pub fn of(tag: TypeTag) -> Self {
        Self::new(tag, tag.name())
    }

    /// Creates a generic error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(tags::ERROR, message)
    }

    /// Builds the throwable for a captured panic payload.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("panic with a non-string payload"));
        Self::new(tags::PANIC_ERROR, message)
    }

    /// Returns the tag.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.tag.name()
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the tag is `tag` or one of its descendants.
    #[must_use]
    pub fn is_a(&self, tag: &TypeTag) -> bool {
        self.tag.is_a(tag)
    }
}

impl Tagged for Throwable {
    fn type_tag(&self) -> TypeTag {
        self.tag
    }
}

impl StaticTagged for Throwable {
    const TYPE_TAG: TypeTag = tags::ERROR;
}

impl Matchable for Throwable {
    fn type_tag(&self) -> Option<TypeTag> {
        Some(self.tag)
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.message))
    }
}

impl<E: fmt::Display> From<SeqError<E>> for Throwable {
    fn from(error: SeqError<E>) -> Self {
        let tag = match &error {
            SeqError::OutOfRange { .. } | SeqError::PatchOutOfRange { .. } => tags::RANGE_ERROR,
            SeqError::NotFound => tags::NOT_FOUND_ERROR,
            SeqError::Callback(_) => tags::ERROR,
        };
        Self::new(tag, error.to_string())
    }
}

impl<E: fmt::Display> From<PipeError<E>> for Throwable {
    fn from(error: PipeError<E>) -> Self {
        let tag = match &error {
            PipeError::Empty => tags::PIPE_EMPTY_ERROR,
            PipeError::Step(_) => tags::ERROR,
        };
        Self::new(tag, error.to_string())
    }
}
