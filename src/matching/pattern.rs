//! Patterns and cases.
//!
//! Every pattern states its kind explicitly: it is built as a literal, a
//! regular expression, a type tag, or the wildcard. Nothing is inferred from
//! the shape of the value at match time.

use std::fmt;

use regex::Regex;
use thiserror::Error;

use super::tag::{StaticTagged, TypeTag};
use super::value::Matchable;

/// Errors raised while building patterns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The regular expression could not be compiled.
    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// The pattern half of a case.
#[derive(Debug, Clone)]
pub enum Pattern<S> {
    /// Selects subjects equal to the literal.
    Literal(S),
    /// Selects subjects whose text form matches the expression.
    Regex(Regex),
    /// Selects subjects tagged with the tag or any of its descendants.
    Type(TypeTag),
    /// Fallback, used only when no other case matched.
    Wildcard,
}

impl<S> Pattern<S> {
    /// Literal pattern.
    #[inline]
    pub const fn literal(value: S) -> Self {
        Self::Literal(value)
    }

    /// Compiles a regular expression pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidRegex`] if the expression does not compile.
    pub fn regex(expression: &str) -> Result<Self, MatchError> {
        Ok(Self::Regex(Regex::new(expression)?))
    }

    /// Type-tag pattern.
    #[inline]
    pub const fn type_tag(tag: TypeTag) -> Self {
        Self::Type(tag)
    }

    /// Type-tag pattern for a statically tagged type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::container::Throwable;
    /// use casebox::matching::{Pattern, tags};
    ///
    /// let pattern = Pattern::<Throwable>::type_of::<Throwable>();
    /// assert!(pattern.matches(&Throwable::of(tags::RANGE_ERROR)));
    /// ```
    #[inline]
    pub const fn type_of<T: StaticTagged>() -> Self {
        Self::Type(T::TYPE_TAG)
    }

    /// Wildcard pattern.
    #[inline]
    pub const fn wildcard() -> Self {
        Self::Wildcard
    }

    /// Returns `true` for the wildcard.
    #[inline]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Short name of the pattern kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Regex(_) => "regex",
            Self::Type(_) => "type",
            Self::Wildcard => "wildcard",
        }
    }
}

impl<S: Matchable + PartialEq> Pattern<S> {
    /// Tests the pattern against a subject.
    ///
    /// The wildcard never matches here; the matcher treats it as the fallback.
    pub fn matches(&self, subject: &S) -> bool {
        match self {
            Self::Regex(expression) => subject
                .as_text()
                .is_some_and(|text| expression.is_match(&text)),
            Self::Type(tag) => subject.type_tag().is_some_and(|own| own.is_a(tag)),
            Self::Literal(literal) => literal == subject,
            Self::Wildcard => false,
        }
    }
}

impl<S> From<Regex> for Pattern<S> {
    fn from(expression: Regex) -> Self {
        Self::Regex(expression)
    }
}

impl<S> From<TypeTag> for Pattern<S> {
    fn from(tag: TypeTag) -> Self {
        Self::Type(tag)
    }
}

// =============================================================================
// Case
// =============================================================================

/// A pattern paired with the handler invoked when it is selected.
pub struct Case<'a, S, O> {
    pattern: Pattern<S>,
    handler: Box<dyn Fn(&S) -> O + 'a>,
}

impl<'a, S, O> Case<'a, S, O> {
    /// Creates a case.
    pub fn new<F>(pattern: Pattern<S>, handler: F) -> Self
    where
        F: Fn(&S) -> O + 'a,
    {
        Self {
            pattern,
            handler: Box::new(handler),
        }
    }

    /// Returns the pattern.
    pub const fn pattern(&self) -> &Pattern<S> {
        &self.pattern
    }

    /// Invokes the handler.
    pub fn call(&self, subject: &S) -> O {
        (self.handler)(subject)
    }
}

impl<S: fmt::Debug, O> fmt::Debug for Case<'_, S, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Case")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Creates a case from any pattern.
///
/// # Examples
///
/// ```rust
/// use casebox::matching::{Pattern, evaluate, is};
///
/// let cases = vec![
///     is(Pattern::literal(100), |_: &i32| "hundred"),
///     is(Pattern::wildcard(), |_: &i32| "other"),
/// ];
/// assert_eq!(evaluate(&100, &cases), Some("hundred"));
/// assert_eq!(evaluate(&7, &cases), Some("other"));
/// ```
pub fn is<'a, S, O, F>(pattern: Pattern<S>, handler: F) -> Case<'a, S, O>
where
    F: Fn(&S) -> O + 'a,
{
    Case::new(pattern, handler)
}

/// Creates a literal case.
pub fn literal_case<'a, S, O, F>(value: S, handler: F) -> Case<'a, S, O>
where
    F: Fn(&S) -> O + 'a,
{
    Case::new(Pattern::Literal(value), handler)
}

/// Creates a regular expression case.
///
/// # Errors
///
/// Returns [`MatchError::InvalidRegex`] if the expression does not compile.
pub fn regex_case<'a, S, O, F>(expression: &str, handler: F) -> Result<Case<'a, S, O>, MatchError>
where
    F: Fn(&S) -> O + 'a,
{
    Ok(Case::new(Pattern::regex(expression)?, handler))
}

/// Creates a type-tag case.
pub fn type_tag_case<'a, S, O, F>(tag: TypeTag, handler: F) -> Case<'a, S, O>
where
    F: Fn(&S) -> O + 'a,
{
    Case::new(Pattern::Type(tag), handler)
}

/// Creates the wildcard (fallback) case.
pub fn wildcard_case<'a, S, O, F>(handler: F) -> Case<'a, S, O>
where
    F: Fn(&S) -> O + 'a,
{
    Case::new(Pattern::Wildcard, handler)
}
