//! Matchable subjects.
//!
//! [`Matchable`] describes what the matcher can observe about a subject: an
//! optional runtime [`TypeTag`] and an optional text form used by regular
//! expression cases. Literal cases use the subject's `PartialEq`.
//!
//! [`Value`] is a heterogeneous subject for case lists that must accept
//! primitives and tagged values side by side.

use std::borrow::Cow;
use std::fmt;

use super::tag::{Tagged, TypeTag};
use crate::sequence::ReferenceCounter;

/// What the matcher can observe about a subject.
///
/// Both methods default to "nothing": a subject with neither a tag nor a text
/// form can only be selected by literal and wildcard cases.
pub trait Matchable {
    /// Runtime tag of the subject, used by type-tag cases.
    fn type_tag(&self) -> Option<TypeTag> {
        None
    }

    /// Text form of the subject, used by regular expression cases.
    fn as_text(&self) -> Option<Cow<'_, str>> {
        None
    }
}

macro_rules! impl_matchable_primitive {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Matchable for $primitive {
                fn as_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_matchable_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl Matchable for str {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Matchable for String {
    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: Matchable + ?Sized> Matchable for &T {
    fn type_tag(&self) -> Option<TypeTag> {
        (**self).type_tag()
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed subject.
///
/// Literal equality between two [`Value::Tagged`] values is reference
/// identity; numbers compare across `Int` and `Float`.
///
/// # Examples
///
/// ```rust
/// use casebox::container::Optional;
/// use casebox::matching::{Value, evaluate, type_tag_case, wildcard_case, tags};
///
/// let cases = vec![
///     type_tag_case(tags::FILLED, |_: &Value| "some"),
///     type_tag_case(tags::EMPTY, |_: &Value| "none"),
///     wildcard_case(|_: &Value| "else"),
/// ];
///
/// assert_eq!(evaluate(&Value::tagged(Optional::Filled(100)), &cases), Some("some"));
/// assert_eq!(evaluate(&Value::tagged(Optional::<i32>::Empty), &cases), Some("none"));
/// assert_eq!(evaluate(&Value::from("x"), &cases), Some("else"));
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absence of any value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Named symbol; two symbols are equal when their names are.
    Symbol(&'static str),
    /// Shared tagged value.
    Tagged(ReferenceCounter<dyn Tagged>),
}

impl Value {
    /// Wraps a tagged value.
    #[must_use]
    pub fn tagged<T: Tagged + 'static>(value: T) -> Self {
        Self::Tagged(ReferenceCounter::new(value))
    }

    /// Returns `true` for `Undefined` and `Null`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }
}

impl PartialEq for Value {
    #[allow(clippy::cast_precision_loss)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                (*left as f64) == *right
            }
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Symbol(left), Self::Symbol(right)) => left == right,
            (Self::Tagged(left), Self::Tagged(right)) => std::ptr::addr_eq(
                ReferenceCounter::as_ptr(left),
                ReferenceCounter::as_ptr(right),
            ),
            _ => false,
        }
    }
}

impl Matchable for Value {
    fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Self::Tagged(value) => Some(value.type_tag()),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Undefined => Some(Cow::Borrowed("undefined")),
            Self::Null => Some(Cow::Borrowed("null")),
            Self::Bool(value) => Some(Cow::Owned(value.to_string())),
            Self::Int(value) => Some(Cow::Owned(value.to_string())),
            Self::Float(value) => Some(Cow::Owned(value.to_string())),
            Self::Text(value) => Some(Cow::Borrowed(value.as_str())),
            Self::Symbol(name) => Some(Cow::Owned(format!("Symbol({name})"))),
            Self::Tagged(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagged(value) => write!(formatter, "{value:?}"),
            other => match other.as_text() {
                Some(text) => formatter.write_str(&text),
                None => Ok(()),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::tags;
    use rstest::rstest;

    #[derive(Debug)]
    struct Marker;

    impl Tagged for Marker {
        fn type_tag(&self) -> TypeTag {
            tags::SEQ
        }
    }

    #[rstest]
    #[case(Value::from(1), Value::from(1.0), true)]
    #[case(Value::from(1), Value::from(2), false)]
    #[case(Value::from("a"), Value::from("a"), true)]
    #[case(Value::Null, Value::Undefined, false)]
    #[case(Value::Symbol("_"), Value::Symbol("_"), true)]
    #[case(Value::from(f64::NAN), Value::from(f64::NAN), false)]
    fn test_value_equality(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    fn test_tagged_equality_is_identity() {
        let first = Value::tagged(Marker);
        let shared = first.clone();
        let second = Value::tagged(Marker);

        assert_eq!(first, shared);
        assert_ne!(first, second);
    }

    #[rstest]
    #[case(Value::from(100), Some("100"))]
    #[case(Value::from(1.5), Some("1.5"))]
    #[case(Value::from(true), Some("true"))]
    #[case(Value::Null, Some("null"))]
    #[case(Value::Undefined, Some("undefined"))]
    #[case(Value::tagged(Marker), None)]
    fn test_value_text(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(value.as_text().as_deref(), expected);
    }

    #[rstest]
    fn test_value_tag() {
        assert_eq!(Value::tagged(Marker).type_tag(), Some(tags::SEQ));
        assert_eq!(Value::from(1).type_tag(), None);
    }

    #[rstest]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[rstest]
    fn test_primitive_text() {
        assert_eq!(42_u8.as_text().as_deref(), Some("42"));
        assert_eq!("hello".as_text().as_deref(), Some("hello"));
        assert_eq!(String::from("owned").as_text().as_deref(), Some("owned"));
    }
}
