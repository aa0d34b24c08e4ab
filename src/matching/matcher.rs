//! Case evaluation.

use tracing::{debug, trace};

use super::pattern::{Case, Pattern};
use super::value::Matchable;

/// Evaluates `cases` against `subject`.
///
/// Cases are scanned in order and the first non-wildcard case whose pattern
/// matches has its handler invoked; later cases are not tested. The first
/// wildcard seen during the scan is kept as the fallback and used only if no
/// other case matched. Further wildcards are ignored.
///
/// Returns `None` when nothing matched and no wildcard was given.
///
/// # Examples
///
/// ```rust
/// use casebox::matching::{evaluate, literal_case, wildcard_case};
///
/// let cases = vec![
///     literal_case(100, |value: &i32| value * 1),
///     literal_case(200, |value: &i32| value * 2),
///     wildcard_case(|value: &i32| value * 3),
/// ];
///
/// assert_eq!(evaluate(&100, &cases), Some(100));
/// assert_eq!(evaluate(&200, &cases), Some(400));
/// assert_eq!(evaluate(&1, &cases), Some(3));
/// assert_eq!(evaluate(&1, &cases[..2]), None);
/// ```
pub fn evaluate<S, O>(subject: &S, cases: &[Case<'_, S, O>]) -> Option<O>
where
    S: Matchable + PartialEq,
{
    let mut fallback: Option<(usize, &Case<'_, S, O>)> = None;

    for (index, case) in cases.iter().enumerate() {
        if case.pattern().is_wildcard() {
            if fallback.is_none() {
                fallback = Some((index, case));
            } else {
                trace!(index, "ignoring duplicate wildcard case");
            }
            continue;
        }

        if case.pattern().matches(subject) {
            trace!(index, kind = case.pattern().kind(), "case matched");
            return Some(case.call(subject));
        }
    }

    if let Some((index, case)) = fallback {
        debug!(index, "no case matched, using wildcard");
        return Some(case.call(subject));
    }

    trace!(cases = cases.len(), "no case matched");
    None
}

/// A subject bound for matching, the way containers expose `matcher()`.
#[derive(Debug)]
pub struct Match<'s, S> {
    subject: &'s S,
}

/// Binds a subject for matching.
///
/// # Examples
///
/// ```rust
/// use casebox::matching::{match_on, regex_case, wildcard_case};
///
/// let cases = vec![
///     regex_case(r"^\d+$", |_: &&str| "number").unwrap(),
///     wildcard_case(|_: &&str| "else"),
/// ];
/// assert_eq!(match_on(&"100").against(&cases), Some("number"));
/// ```
pub const fn match_on<S>(subject: &S) -> Match<'_, S> {
    Match { subject }
}

impl<'s, S> Match<'s, S> {
    /// Returns the bound subject.
    pub const fn subject(&self) -> &'s S {
        self.subject
    }
}

impl<S: Matchable + PartialEq> Match<'_, S> {
    /// Evaluates `cases` against the bound subject.
    pub fn against<O>(&self, cases: &[Case<'_, S, O>]) -> Option<O> {
        evaluate(self.subject, cases)
    }
}

// =============================================================================
// Cases
// =============================================================================

/// An ordered, reusable case list.
///
/// # Examples
///
/// ```rust
/// use casebox::matching::{Cases, Pattern};
///
/// let cases = Cases::new()
///     .case(Pattern::literal("ping"), |_| "pong")
///     .otherwise(|_| "?");
///
/// assert_eq!(cases.evaluate(&"ping"), Some("pong"));
/// assert_eq!(cases.evaluate(&"pong"), Some("?"));
/// ```
pub struct Cases<'a, S, O> {
    cases: Vec<Case<'a, S, O>>,
}

impl<'a, S, O> Cases<'a, S, O> {
    /// Creates an empty case list.
    #[must_use]
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Appends a case.
    #[must_use]
    pub fn case<F>(mut self, pattern: Pattern<S>, handler: F) -> Self
    where
        F: Fn(&S) -> O + 'a,
    {
        self.cases.push(Case::new(pattern, handler));
        self
    }

    /// Appends a wildcard case.
    #[must_use]
    pub fn otherwise<F>(self, handler: F) -> Self
    where
        F: Fn(&S) -> O + 'a,
    {
        self.case(Pattern::Wildcard, handler)
    }

    /// Returns the cases in order.
    pub fn as_slice(&self) -> &[Case<'a, S, O>] {
        &self.cases
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<S: Matchable + PartialEq, O> Cases<'_, S, O> {
    /// Evaluates the cases against `subject`.
    pub fn evaluate(&self, subject: &S) -> Option<O> {
        evaluate(subject, &self.cases)
    }
}

impl<S, O> Default for Cases<'_, S, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, O> FromIterator<Case<'a, S, O>> for Cases<'a, S, O> {
    fn from_iter<I: IntoIterator<Item = Case<'a, S, O>>>(iter: I) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}

impl<'a, S, O> From<Vec<Case<'a, S, O>>> for Cases<'a, S, O> {
    fn from(cases: Vec<Case<'a, S, O>>) -> Self {
        Self { cases }
    }
}
