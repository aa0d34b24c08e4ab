//! Structural pattern matching.
//!
//! A case list is an ordered list of `(pattern, handler)` pairs. Evaluating it
//! against a subject invokes the handler of the first case whose pattern
//! matches, or the wildcard case when nothing else does.
//!
//! Patterns come in four explicit kinds:
//!
//! - **Literal**: the subject equals the literal
//! - **Regex**: the subject's text form matches the expression
//! - **Type**: the subject carries the [`TypeTag`] or one of its descendants
//! - **Wildcard**: the fallback
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::Optional;
//! use casebox::matching::{evaluate, tags, type_tag_case, wildcard_case};
//!
//! let cases = vec![
//!     type_tag_case(tags::FILLED, |_: &Optional<i32>| "some"),
//!     type_tag_case(tags::EMPTY, |_: &Optional<i32>| "none"),
//!     wildcard_case(|_: &Optional<i32>| "else"),
//! ];
//!
//! assert_eq!(evaluate(&Optional::Filled(100), &cases), Some("some"));
//! assert_eq!(evaluate(&Optional::Empty, &cases), Some("none"));
//! ```

mod matcher;
mod pattern;
mod tag;
mod value;

pub use matcher::{Cases, Match, evaluate, match_on};
pub use pattern::{
    Case, MatchError, Pattern, is, literal_case, regex_case, type_tag_case, wildcard_case,
};
pub use tag::{StaticTagged, Tagged, TypeTag, tags};
pub use value::{Matchable, Value};
