//! Derive macros for casebox type tags and records.
//!
//! # Available Derive Macros
//!
//! - [`Tagged`]: Gives a type a constant runtime type tag
//! - [`Record`]: Builds an immutable record with a constructor, getters and
//!   a type tag
//!
//! # Example: Tagged
//!
//! ```rust,ignore
//! use casebox::Tagged;
//! use casebox::matching::{evaluate, tags, type_tag_case, wildcard_case};
//!
//! #[derive(Debug, PartialEq, Tagged)]
//! #[tagged(name = "ValidationError", parent = tags::ERROR)]
//! struct ValidationError;
//!
//! let cases = vec![
//!     type_tag_case(tags::ERROR, |_: &ValidationError| "error"),
//!     wildcard_case(|_: &ValidationError| "else"),
//! ];
//! assert_eq!(evaluate(&ValidationError, &cases), Some("error"));
//! ```
//!
//! # Example: Record
//!
//! ```rust,ignore
//! use casebox::Record;
//!
//! #[derive(Clone, Debug, PartialEq, Record)]
//! struct SpeakMessage {
//!     message: String,
//! }
//!
//! let speak = SpeakMessage::new("hello".to_string());
//! assert_eq!(speak.message(), "hello");
//! assert_eq!(speak.to_string(), r#"SpeakMessage { message: "hello" }"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod record;
mod tagged;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro giving a type a constant runtime type tag.
///
/// Generates `StaticTagged`, `Tagged` and `Matchable` implementations, so
/// values of the type can be selected by type-tag cases.
///
/// # Attributes
///
/// - `#[tagged(name = "...")]`: tag name; defaults to the type name
/// - `#[tagged(parent = PATH)]`: parent tag (a `TypeTag` constant); a case
///   written against the parent also selects this type
///
/// # Requirements
///
/// - The type must implement `Debug`
///
/// # Example
///
/// ```rust,ignore
/// use casebox::Tagged;
/// use casebox::matching::{StaticTagged, tags};
///
/// #[derive(Debug, Tagged)]
/// #[tagged(parent = tags::ERROR)]
/// struct TimeoutError;
///
/// assert!(TimeoutError::TYPE_TAG.is_a(&tags::ERROR));
/// assert_eq!(TimeoutError::TYPE_TAG.name(), "TimeoutError");
/// ```
#[proc_macro_derive(Tagged, attributes(tagged))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(tagged::derive_tagged_impl(&input))
}

/// Derive macro building an immutable record from a named-field struct.
///
/// # Generated Code
///
/// For a struct with fields `a: A` and `b: B`, generates:
///
/// ```rust,ignore
/// impl Name {
///     pub const fn new(a: A, b: B) -> Self { ... }
///     pub const fn a(&self) -> &A { ... }
///     pub const fn b(&self) -> &B { ... }
///     pub fn as_container(&self) -> Container<Self> { ... }
///     pub fn copy_with<F: FnOnce(&mut Self)>(&self, change: F) -> Self { ... }
/// }
/// impl Display for Name { ... } // Name { a: .., b: .. }
/// ```
///
/// plus everything [`Tagged`](derive@Tagged) generates; the `#[tagged(...)]`
/// attribute is accepted as well.
///
/// # Requirements
///
/// - The struct must have named fields
/// - The struct must implement `Clone` and `Debug`, and every field `Debug`
#[proc_macro_derive(Record, attributes(tagged))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(record::derive_record_impl(&input))
}
