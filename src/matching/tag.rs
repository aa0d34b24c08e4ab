//! Runtime type tags.
//!
//! A [`TypeTag`] is a `const`-constructible descriptor that names a matchable
//! type and optionally points at a parent tag. The parent chain forms an
//! "is-subtype-of" relation, so a case written against a supertype (such as
//! [`tags::ERROR`]) also selects values tagged with any of its descendants.
//!
//! Tag identity is the tag name: two tags with the same name are the same tag.
//!
//! # Examples
//!
//! ```rust
//! use casebox::matching::{TypeTag, tags};
//!
//! const VALIDATION_ERROR: TypeTag = TypeTag::child("ValidationError", &tags::ERROR);
//!
//! assert!(VALIDATION_ERROR.is_a(&tags::ERROR));
//! assert!(!tags::ERROR.is_a(&VALIDATION_ERROR));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Descriptor of a matchable type.
#[derive(Clone, Copy)]
pub struct TypeTag {
    name: &'static str,
    parent: Option<&'static TypeTag>,
}

impl TypeTag {
    /// Creates a tag without a parent.
    #[inline]
    #[must_use]
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Creates a tag registered as a subtype of `parent`.
    #[inline]
    #[must_use]
    pub const fn child(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// Returns the tag name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parent tag, if any.
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<&'static Self> {
        self.parent
    }

    /// Returns `true` if this tag is `other` or one of its descendants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::matching::tags;
    ///
    /// assert!(tags::FILLED.is_a(&tags::FILLED));
    /// assert!(tags::FILLED.is_a(&tags::CONTAINER));
    /// assert!(!tags::FILLED.is_a(&tags::EMPTY));
    /// ```
    #[must_use]
    pub fn is_a(&self, other: &Self) -> bool {
        self.lineage().any(|tag| tag == other)
    }

    /// Iterates over this tag followed by each of its ancestors.
    pub fn lineage(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |tag| tag.parent)
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}

/// A value that carries a runtime type tag.
///
/// The tag may depend on the value (for example `Optional` reports either
/// [`tags::EMPTY`] or [`tags::FILLED`]).
pub trait Tagged: fmt::Debug {
    /// Returns the tag of this value.
    fn type_tag(&self) -> TypeTag;
}

/// A type whose every value carries the same tag.
///
/// Usually implemented through `#[derive(Tagged)]` or `#[derive(Record)]`.
pub trait StaticTagged {
    /// Tag shared by all values of the type.
    const TYPE_TAG: TypeTag;
}

/// Tags of the types provided by this crate.
pub mod tags {
    use super::TypeTag;

    /// Every single-value container.
    pub const CONTAINER: TypeTag = TypeTag::root("Container");
    /// `Optional::Empty`.
    pub const EMPTY: TypeTag = TypeTag::child("Empty", &CONTAINER);
    /// `Optional::Filled`.
    pub const FILLED: TypeTag = TypeTag::child("Filled", &CONTAINER);
    /// `Either::Left`.
    pub const LEFT: TypeTag = TypeTag::child("Left", &CONTAINER);
    /// `Either::Right`.
    pub const RIGHT: TypeTag = TypeTag::child("Right", &CONTAINER);
    /// `Try::Success`.
    pub const SUCCESS: TypeTag = TypeTag::child("Success", &CONTAINER);
    /// `Try::Failure`.
    pub const FAILURE: TypeTag = TypeTag::child("Failure", &CONTAINER);
    /// `Seq`.
    pub const SEQ: TypeTag = TypeTag::root("Seq");

    /// Generic error, the parent of every error tag.
    pub const ERROR: TypeTag = TypeTag::root("Error");
    /// Index out of bounds.
    pub const RANGE_ERROR: TypeTag = TypeTag::child("RangeError", &ERROR);
    /// Search found nothing.
    pub const NOT_FOUND_ERROR: TypeTag = TypeTag::child("NotFoundError", &ERROR);
    /// Pipe called without any step.
    pub const PIPE_EMPTY_ERROR: TypeTag = TypeTag::child("PipeEmptyError", &ERROR);
    /// Panic captured by `safecall`.
    pub const PANIC_ERROR: TypeTag = TypeTag::child("PanicError", &ERROR);
}

#[cfg(test)]
mod tests {
    use super::tags::*;
    use super::*;
    use rstest::rstest;

    const DOMAIN_ERROR: TypeTag = TypeTag::child("DomainError", &ERROR);
    const NESTED_ERROR: TypeTag = TypeTag::child("NestedError", &DOMAIN_ERROR);

    #[rstest]
    #[case(FILLED, CONTAINER, true)]
    #[case(EMPTY, CONTAINER, true)]
    #[case(CONTAINER, FILLED, false)]
    #[case(LEFT, RIGHT, false)]
    #[case(NESTED_ERROR, ERROR, true)]
    #[case(NESTED_ERROR, DOMAIN_ERROR, true)]
    #[case(DOMAIN_ERROR, NESTED_ERROR, false)]
    #[case(SEQ, CONTAINER, false)]
    fn test_is_a(#[case] tag: TypeTag, #[case] other: TypeTag, #[case] expected: bool) {
        assert_eq!(tag.is_a(&other), expected);
    }

    #[rstest]
    fn test_lineage_walks_to_root() {
        let names: Vec<&str> = NESTED_ERROR.lineage().map(TypeTag::name).collect();
        assert_eq!(names, vec!["NestedError", "DomainError", "Error"]);
    }

    #[rstest]
    fn test_identity_is_name() {
        const SAME_NAME: TypeTag = TypeTag::root("Filled");
        assert_eq!(SAME_NAME, FILLED);
    }

    #[rstest]
    fn test_display_and_debug() {
        assert_eq!(RANGE_ERROR.to_string(), "RangeError");
        assert_eq!(format!("{RANGE_ERROR:?}"), "TypeTag(\"RangeError\")");
    }
}
