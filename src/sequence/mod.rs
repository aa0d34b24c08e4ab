//! Immutable sequences.
//!
//! - [`Seq`]: ordered, immutable sequence with shared storage
//! - [`SeqError`]: failure of a single-element operation
//!
//! # Thread Safety
//!
//! By default `Seq` shares its storage through `Rc` and is neither `Send` nor
//! `Sync`. Enabling the `arc` feature switches the storage to `Arc`:
//!
//! ```toml
//! [dependencies]
//! casebox = { version = "0.1", features = ["arc"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use casebox::seq;
//!
//! let names = seq!["carol", "alice", "bob"];
//! let sorted = names.auto_sorted();
//!
//! assert_eq!(names.to_string(), "Seq(carol, alice, bob)"); // Original unchanged
//! assert_eq!(sorted.to_string(), "Seq(alice, bob, carol)");
//! ```

#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod seq;

pub use error::SeqError;
pub use seq::Seq;

/// Sequence of dynamically typed values.
#[deprecated(note = "use `Seq<Value>` or a concrete element type")]
pub type UntypedSeq = Seq<crate::matching::Value>;

/// Creates a [`Seq`] from a list of elements.
///
/// # Examples
///
/// ```rust
/// use casebox::seq;
/// use casebox::sequence::Seq;
///
/// let empty: Seq<i32> = seq![];
/// assert!(empty.is_empty());
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::sequence::Seq::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Seq::from(vec![$($element),+])
    };
}
