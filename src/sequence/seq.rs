//! Immutable sequence.
//!
//! This module provides [`Seq`], an ordered container whose "changing"
//! operations all build a fresh sequence and leave the receiver untouched.
//!
//! # Overview
//!
//! Elements live in a reference-counted slice, so cloning a `Seq` (or calling
//! [`Seq::copy`]) shares the storage instead of copying it.
//!
//! Operations fall into three groups:
//!
//! - **Infallible**: `appended`, `prepended`, `excluded`, `reversed`,
//!   `auto_sorted`, `pad_start`, `pad_end` return a new `Seq` directly.
//! - **Single-element**: `at`, `patched`, `updated`, `found_updated` return a
//!   [`Try`] whose failure is a [`SeqError`].
//! - **Bulk**: `mapped`, `filtered`, `sorted`, `accumulated` return a [`Try`]
//!   whose failure is the callback error itself. They are all-or-nothing: the
//!   first callback failure aborts the whole operation and no partial result
//!   is produced.
//!
//! # Examples
//!
//! ```rust
//! use casebox::sequence::Seq;
//!
//! let numbers = Seq::from(vec![1, 2, 3, 4, 5]);
//!
//! let extended = numbers.appended([6]);
//! assert_eq!(numbers.as_slice(), &[1, 2, 3, 4, 5]); // Original unchanged
//! assert_eq!(extended.as_slice(), &[1, 2, 3, 4, 5, 6]);
//!
//! let even = numbers
//!     .filtered(|value| Ok::<_, String>(value % 2 == 0))
//!     .unwrap_or_default();
//! assert_eq!(even.as_slice(), &[2, 4]);
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use tracing::{debug, trace};

use super::ReferenceCounter;
use super::error::SeqError;
use crate::container::Try;
use crate::matching::{Match, Matchable, Tagged, TypeTag, match_on, tags};

/// An immutable, ordered sequence.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `copy` / `clone`       | O(1)       |
/// | `len` / `at`           | O(1)       |
/// | every other operation  | O(N)       |
///
/// # Examples
///
/// ```rust
/// use casebox::sequence::Seq;
///
/// let sequence: Seq<i32> = (1..=3).collect();
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.to_string(), "Seq(1, 2, 3)");
/// ```
pub struct Seq<T> {
    elements: ReferenceCounter<[T]>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: ReferenceCounter::from(Vec::new()),
        }
    }

    fn from_vec(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if `index` addresses an element.
    #[inline]
    #[must_use]
    pub fn is_defined_at(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a sequence sharing this one's storage.
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }

    /// Returns the element at `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::OutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::{Seq, SeqError};
    ///
    /// let sequence = Seq::from(vec!['a', 'b']);
    /// assert_eq!(sequence.at(1).success(), Some(&'b'));
    /// assert_eq!(
    ///     sequence.at(2).failure(),
    ///     Some(SeqError::OutOfRange { length: 2, index: 2 })
    /// );
    /// ```
    pub fn at(&self, index: usize) -> Try<&T, SeqError> {
        match self.elements.get(index) {
            Some(element) => Try::Success(element),
            None => Try::Failure(self.out_of_range(index)),
        }
    }

    fn out_of_range(&self, index: usize) -> SeqError {
        debug!(length = self.len(), index, "sequence index out of range");
        SeqError::OutOfRange {
            length: self.len(),
            index,
        }
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().rposition(|element| element == value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(value)
    }

    /// Binds this sequence for pattern matching.
    pub const fn matcher(&self) -> Match<'_, Self> {
        match_on(self)
    }

    // =========================================================================
    // Bulk operations
    // =========================================================================

    /// Applies `function` to every element.
    ///
    /// # Errors
    ///
    /// The first error returned by `function` becomes the failure; remaining
    /// elements are not visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::Seq;
    ///
    /// let sequence = Seq::from(vec![1, 2, 3]);
    ///
    /// let doubled = sequence.mapped(|value| Ok::<_, String>(value * 2));
    /// assert_eq!(doubled.success().map(|s| s.to_vec()), Some(vec![2, 4, 6]));
    ///
    /// let failed = sequence.mapped(|value| {
    ///     if *value == 2 { Err("two".to_string()) } else { Ok(*value) }
    /// });
    /// assert_eq!(failed.failure(), Some("two".to_string()));
    /// ```
    pub fn mapped<U, E, F>(&self, mut function: F) -> Try<Seq<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let mut mapped = Vec::with_capacity(self.len());
        for (index, element) in self.elements.iter().enumerate() {
            match function(element) {
                Ok(value) => mapped.push(value),
                Err(error) => {
                    trace!(index, "mapped aborted by callback failure");
                    return Try::Failure(error);
                }
            }
        }
        Try::Success(Seq::from_vec(mapped))
    }

    /// Folds the elements from left to right, starting from `initial`.
    ///
    /// # Errors
    ///
    /// The first error returned by `function` becomes the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::Seq;
    ///
    /// let sequence = Seq::from(vec![1, 2, 3, 4]);
    /// let sum = sequence.accumulated(|total, value| Ok::<_, String>(total + value), 0);
    /// assert_eq!(sum.success(), Some(10));
    /// ```
    pub fn accumulated<A, E, F>(&self, mut function: F, initial: A) -> Try<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>,
    {
        let mut accumulator = initial;
        for (index, element) in self.elements.iter().enumerate() {
            match function(accumulator, element) {
                Ok(next) => accumulator = next,
                Err(error) => {
                    trace!(index, "accumulated aborted by callback failure");
                    return Try::Failure(error);
                }
            }
        }
        Try::Success(accumulator)
    }
}

impl<T: Clone> Seq<T> {
    /// Returns the elements as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Returns the distinct elements.
    #[must_use]
    pub fn as_set(&self) -> HashSet<T>
    where
        T: Hash + Eq,
    {
        self.elements.iter().cloned().collect()
    }

    /// Returns the elements keyed by index.
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<usize, T> {
        self.elements.iter().cloned().enumerate().collect()
    }

    // =========================================================================
    // Infallible operations
    // =========================================================================

    /// Returns a sequence with `items` added at the end.
    #[must_use]
    pub fn appended<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = self.to_vec();
        elements.extend(items);
        Self::from_vec(elements)
    }

    /// Returns a sequence with `items` added at the start, in their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::Seq;
    ///
    /// let sequence = Seq::from(vec![3, 4]);
    /// assert_eq!(sequence.prepended([1, 2]).as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn prepended<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = items.into_iter().collect();
        elements.extend_from_slice(&self.elements);
        Self::from_vec(elements)
    }

    /// Returns a sequence without any occurrence of `items`.
    ///
    /// Items that do not occur are ignored.
    #[must_use]
    pub fn excluded<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        let excluded: Vec<T> = items.into_iter().collect();
        self.elements
            .iter()
            .filter(|element| !excluded.contains(element))
            .cloned()
            .collect()
    }

    /// Returns a sequence in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.elements.iter().rev().cloned().collect()
    }

    /// Returns a sequence sorted by the natural ordering of `T`.
    #[must_use]
    pub fn auto_sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut elements = self.to_vec();
        elements.sort();
        Self::from_vec(elements)
    }

    /// Returns a sequence left-padded with `fill` up to `length` elements.
    ///
    /// A `length` not greater than `len()` adds nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::Seq;
    ///
    /// let sequence = Seq::from(vec![1, 2]);
    /// assert_eq!(sequence.pad_start(4, 0).as_slice(), &[0, 0, 1, 2]);
    /// assert_eq!(sequence.pad_start(1, 0).as_slice(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn pad_start(&self, length: usize, fill: T) -> Self {
        let padding = length.saturating_sub(self.len());
        let mut elements = Vec::with_capacity(self.len() + padding);
        elements.resize(padding, fill);
        elements.extend_from_slice(&self.elements);
        Self::from_vec(elements)
    }

    /// Returns a sequence right-padded with `fill` up to `length` elements.
    ///
    /// A `length` not greater than `len()` adds nothing.
    #[must_use]
    pub fn pad_end(&self, length: usize, fill: T) -> Self {
        let mut elements = self.to_vec();
        elements.resize(length.max(self.len()), fill);
        Self::from_vec(elements)
    }

    // =========================================================================
    // Single-element operations
    // =========================================================================

    /// Returns a sequence with `amount` slots starting at `index` set to `value`.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::PatchOutOfRange`] if `index + amount >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::Seq;
    ///
    /// let sequence = Seq::from(vec![1, 2, 3, 4, 5]);
    /// let patched = sequence.patched(1, 2, -1).success();
    /// assert_eq!(patched.map(|s| s.to_vec()), Some(vec![1, -1, -1, 4, 5]));
    /// assert!(sequence.patched(3, 2, -1).is_failure());
    /// ```
    pub fn patched(&self, index: usize, amount: usize, value: T) -> Try<Self, SeqError> {
        let length = self.len();
        let in_bounds = index
            .checked_add(amount)
            .is_some_and(|end| end < length);
        if !in_bounds {
            debug!(length, index, amount, "sequence patch out of range");
            return Try::Failure(SeqError::PatchOutOfRange {
                length,
                index,
                amount,
            });
        }

        let mut elements = self.to_vec();
        elements[index..index + amount].fill(value);
        Try::Success(Self::from_vec(elements))
    }

    /// Returns a sequence with the element at `index` replaced by
    /// `provide(old)`.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::OutOfRange`] if `index >= len()`, or with
    /// [`SeqError::Callback`] if `provide` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::{Seq, SeqError};
    ///
    /// let sequence = Seq::from(vec![1, 2, 3]);
    /// let updated = sequence.updated(0, |value| Ok::<_, String>(value + 10));
    /// assert_eq!(updated.success().map(|s| s.to_vec()), Some(vec![11, 2, 3]));
    ///
    /// let failed = sequence.updated(1, |_| Err("no".to_string()));
    /// assert_eq!(failed.failure(), Some(SeqError::Callback("no".to_string())));
    /// ```
    pub fn updated<E, F>(&self, index: usize, provide: F) -> Try<Self, SeqError<E>>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        let Some(current) = self.elements.get(index) else {
            return Try::Failure(self.out_of_range(index).widen());
        };
        match provide(current) {
            Ok(replacement) => Try::Success(self.replaced_at(index, replacement)),
            Err(error) => Try::Failure(SeqError::Callback(error)),
        }
    }

    /// Returns a sequence with the first element satisfying `predicate`
    /// replaced by `provide(old)`.
    ///
    /// # Errors
    ///
    /// Fails with [`SeqError::NotFound`] if no element satisfies `predicate`,
    /// or with [`SeqError::Callback`] if `provide` fails.
    pub fn found_updated<E, P, F>(&self, mut predicate: P, provide: F) -> Try<Self, SeqError<E>>
    where
        P: FnMut(&T) -> bool,
        F: FnOnce(&T) -> Result<T, E>,
    {
        let Some(index) = self.elements.iter().position(|element| predicate(element)) else {
            debug!(length = self.len(), "no sequence element matched the predicate");
            return Try::Failure(SeqError::NotFound);
        };
        match provide(&self.elements[index]) {
            Ok(replacement) => Try::Success(self.replaced_at(index, replacement)),
            Err(error) => Try::Failure(SeqError::Callback(error)),
        }
    }

    fn replaced_at(&self, index: usize, replacement: T) -> Self {
        let mut elements = self.to_vec();
        elements[index] = replacement;
        Self::from_vec(elements)
    }

    // =========================================================================
    // Bulk operations
    // =========================================================================

    /// Keeps the elements for which `predicate` holds, in order.
    ///
    /// # Errors
    ///
    /// The first error returned by `predicate` becomes the failure.
    pub fn filtered<E, P>(&self, mut predicate: P) -> Try<Self, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let mut kept = Vec::new();
        for (index, element) in self.elements.iter().enumerate() {
            match predicate(element) {
                Ok(true) => kept.push(element.clone()),
                Ok(false) => {}
                Err(error) => {
                    trace!(index, "filtered aborted by callback failure");
                    return Try::Failure(error);
                }
            }
        }
        Try::Success(Self::from_vec(kept))
    }

    /// Sorts by a three-way comparator.
    ///
    /// The sort is stable.
    ///
    /// # Errors
    ///
    /// The first error returned by `comparator` becomes the failure; the
    /// comparator is not called again after it fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::sequence::Seq;
    ///
    /// let sequence = Seq::from(vec![3, 1, 2]);
    /// let descending = sequence.sorted(|left, right| Ok::<_, String>(right.cmp(left)));
    /// assert_eq!(descending.success().map(|s| s.to_vec()), Some(vec![3, 2, 1]));
    /// ```
    pub fn sorted<E, C>(&self, mut comparator: C) -> Try<Self, E>
    where
        C: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        match merge_sorted(self.to_vec(), &mut comparator) {
            Ok(elements) => Try::Success(Self::from_vec(elements)),
            Err(error) => {
                trace!("sorted aborted by comparator failure");
                Try::Failure(error)
            }
        }
    }
}

/// Stable top-down merge sort that stops at the first comparator error.
fn merge_sorted<T, E, C>(mut elements: Vec<T>, comparator: &mut C) -> Result<Vec<T>, E>
where
    C: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if elements.len() <= 1 {
        return Ok(elements);
    }

    let right = elements.split_off(elements.len() / 2);
    let left = merge_sorted(elements, comparator)?;
    let right = merge_sorted(right, comparator)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(left_head), Some(right_head)) = (left.peek(), right.peek()) {
        // Ties take the left element.
        let next = if comparator(right_head, left_head)? == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements)
            || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: PartialOrd> PartialOrd for Seq<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Seq<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Seq").field(&self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Seq(")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> Tagged for Seq<T> {
    fn type_tag(&self) -> TypeTag {
        tags::SEQ
    }
}

impl<T> Matchable for Seq<T> {
    fn type_tag(&self) -> Option<TypeTag> {
        Some(tags::SEQ)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SeqVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SeqVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SeqVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Seq<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Seq::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Seq<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor::new())
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Seq<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Seq<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers() -> Seq<i32> {
        Seq::from(vec![1, 2, 3, 4, 5])
    }

    #[rstest]
    fn test_copy_shares_storage() {
        let original = numbers();
        let copy = original.copy();
        assert!(ReferenceCounter::ptr_eq(&original.elements, &copy.elements));
        assert_eq!(original, copy);
    }

    #[rstest]
    fn test_appended_leaves_receiver_unchanged() {
        let original = numbers();
        let changed = original.appended([6]);
        assert_eq!(original.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(changed.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    #[case(0, Some(1))]
    #[case(4, Some(5))]
    #[case(5, None)]
    #[case(usize::MAX, None)]
    fn test_at(#[case] index: usize, #[case] expected: Option<i32>) {
        assert_eq!(numbers().at(index).success().copied(), expected);
    }

    #[rstest]
    #[case(0, 4, true)]
    #[case(1, 2, true)]
    #[case(3, 2, false)]
    #[case(5, 0, false)]
    #[case(usize::MAX, 1, false)]
    fn test_patched_bounds(#[case] index: usize, #[case] amount: usize, #[case] succeeds: bool) {
        assert_eq!(numbers().patched(index, amount, 0).is_success(), succeeds);
    }

    #[rstest]
    fn test_patched_zero_amount_is_identity() {
        let patched = numbers().patched(2, 0, 99).success();
        assert_eq!(patched, Some(numbers()));
    }

    #[rstest]
    fn test_updated_out_of_range() {
        let result = numbers().updated(5, |value| Ok::<_, String>(*value));
        assert_eq!(
            result.failure(),
            Some(SeqError::OutOfRange {
                length: 5,
                index: 5
            })
        );
    }

    #[rstest]
    fn test_found_updated() {
        let result = numbers().found_updated(|value| *value > 2, |value| Ok::<_, String>(value * 10));
        assert_eq!(result.success().map(|s| s.to_vec()), Some(vec![1, 2, 30, 4, 5]));

        let missing = numbers().found_updated(|value| *value > 10, |value| Ok::<_, String>(*value));
        assert_eq!(missing.failure(), Some(SeqError::NotFound));

        let failing = numbers().found_updated(|value| *value == 1, |_| Err("bad".to_string()));
        assert_eq!(failing.failure(), Some(SeqError::Callback("bad".to_string())));
    }

    #[rstest]
    fn test_mapped_stops_at_first_failure() {
        let mut visited = Vec::new();
        let result = numbers().mapped(|value| {
            visited.push(*value);
            if *value == 3 { Err(*value) } else { Ok(*value) }
        });
        assert_eq!(result.failure(), Some(3));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_mapped_changes_type() {
        let result = numbers().mapped(|value| Ok::<_, String>(value.to_string()));
        assert_eq!(result.success().map(|s| s.to_string()), Some("Seq(1, 2, 3, 4, 5)".to_string()));
    }

    #[rstest]
    fn test_filtered_failure() {
        let result = numbers().filtered(|value| if *value == 4 { Err("four") } else { Ok(true) });
        assert_eq!(result.failure(), Some("four"));
    }

    #[rstest]
    fn test_sorted_failure_stops_calling_comparator() {
        let mut calls = 0;
        let result = Seq::from(vec![5, 4, 3, 2, 1]).sorted(|left, right| {
            calls += 1;
            if calls == 2 { Err("boom") } else { Ok(left.cmp(right)) }
        });
        assert_eq!(result.failure(), Some("boom"));
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_sorted_failure_on_long_input_is_a_value() {
        let descending: Vec<i32> = (0..400).rev().map(|value| value % 37).collect();
        let sequence = Seq::from(descending.clone());
        let mut calls = 0;
        let result = sequence.sorted(|left, right| {
            calls += 1;
            if calls == 300 { Err(calls) } else { Ok(left.cmp(right)) }
        });
        assert_eq!(result.failure(), Some(300));
        assert_eq!(calls, 300);
        assert_eq!(sequence.to_vec(), descending);
    }

    #[rstest]
    fn test_sorted_is_stable() {
        let pairs = Seq::from(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        let by_key = pairs.sorted(|left, right| Ok::<_, ()>(left.0.cmp(&right.0)));
        assert_eq!(
            by_key.success().map(|sequence| sequence.to_vec()),
            Some(vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')])
        );
    }

    #[rstest]
    fn test_auto_sorted() {
        let sorted = Seq::from(vec!["b", "c", "a"]).auto_sorted();
        assert_eq!(sorted.as_slice(), &["a", "b", "c"]);
    }

    #[rstest]
    fn test_accumulated_failure() {
        let result = numbers().accumulated(
            |total, value| if total > 5 { Err(total) } else { Ok(total + value) },
            0,
        );
        assert_eq!(result.failure(), Some(6));
    }

    #[rstest]
    fn test_excluded() {
        assert_eq!(numbers().excluded([3, 4]).as_slice(), &[1, 2, 5]);
        assert_eq!(numbers().excluded([42]), numbers());
        assert_eq!(Seq::from(vec![1, 2, 1]).excluded([1]).as_slice(), &[2]);
    }

    #[rstest]
    fn test_padding() {
        assert_eq!(numbers().pad_start(6, -1).as_slice(), &[-1, 1, 2, 3, 4, 5]);
        assert_eq!(numbers().pad_end(6, -1).as_slice(), &[1, 2, 3, 4, 5, -1]);
        assert_eq!(numbers().pad_start(2, -1), numbers());
        assert_eq!(numbers().pad_end(0, -1), numbers());
    }

    #[rstest]
    fn test_index_of() {
        let sequence = Seq::from(vec![1, 2, 1]);
        assert_eq!(sequence.index_of(&1), Some(0));
        assert_eq!(sequence.last_index_of(&1), Some(2));
        assert_eq!(sequence.index_of(&9), None);
        assert_eq!(sequence.last_index_of(&9), None);
    }

    #[rstest]
    fn test_views() {
        let sequence = Seq::from(vec![2, 1, 2]);
        assert_eq!(sequence.as_set(), HashSet::from([1, 2]));
        assert_eq!(sequence.as_map(), BTreeMap::from([(0, 2), (1, 1), (2, 2)]));
        assert!(sequence.is_defined_at(2));
        assert!(!sequence.is_defined_at(3));
    }

    #[rstest]
    fn test_display_and_debug() {
        assert_eq!(numbers().to_string(), "Seq(1, 2, 3, 4, 5)");
        assert_eq!(Seq::<i32>::new().to_string(), "Seq()");
        assert_eq!(format!("{:?}", Seq::from(vec![1, 2])), "Seq([1, 2])");
    }
}
