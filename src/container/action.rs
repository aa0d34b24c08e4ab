//! Fallible IO-style function with a failure strategy.
//!
//! An [`Action`] wraps a function `I -> Result<O, E>` and decides what a
//! failure means for the caller:
//!
//! | Strategy  | On error                         |
//! |-----------|----------------------------------|
//! | `Fail`    | `Err(e)` is returned             |
//! | `Silent`  | `Ok(Outcome::Error(e))`          |
//! | `Ignore`  | `Ok(Outcome::Skipped)`           |
//!
//! Panics in the wrapped function are captured through
//! [`safecall`](super::safecall) and handled like a returned error.
//!
//! # Examples
//!
//! ```rust
//! use casebox::container::{Action, Outcome, Throwable};
//!
//! let parse = Action::wrap(|text: &str| {
//!     text.parse::<i32>().map_err(|error| Throwable::error(error.to_string()))
//! });
//!
//! assert_eq!(parse.call("12"), Ok(Outcome::Output(12)));
//! assert!(parse.call("x").is_err());
//!
//! let lenient = parse.ignore_fail();
//! assert_eq!(lenient.call("x"), Ok(Outcome::Skipped));
//! ```

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use super::attempt::Try;
use super::safecall::safecall;
use super::throwable::Throwable;

/// What an [`Action`] does with a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailStrategy {
    /// Propagate the error to the caller.
    #[default]
    Fail,
    /// Return the error as a value.
    Silent,
    /// Drop the error.
    Ignore,
}

/// Non-propagated result of an [`Action`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<O, E> {
    /// The function succeeded.
    Output(O),
    /// The function failed under [`FailStrategy::Silent`].
    Error(E),
    /// The function failed under [`FailStrategy::Ignore`].
    Skipped,
}

impl<O, E> Outcome<O, E> {
    /// Returns the output, if any.
    pub fn output(self) -> Option<O> {
        match self {
            Self::Output(output) => Some(output),
            Self::Error(_) | Self::Skipped => None,
        }
    }
}

/// A wrapped fallible function.
pub struct Action<I, O, E, F> {
    function: F,
    strategy: FailStrategy,
    marker: PhantomData<fn(I) -> Result<O, E>>,
}

impl<I, O, E, F> Action<I, O, E, F>
where
    F: Fn(I) -> Result<O, E>,
{
    /// Wraps `function` with the [`FailStrategy::Fail`] strategy.
    pub const fn wrap(function: F) -> Self {
        Self {
            function,
            strategy: FailStrategy::Fail,
            marker: PhantomData,
        }
    }

    /// Switches to [`FailStrategy::Fail`].
    #[must_use]
    pub fn throw_fail(self) -> Self {
        self.with_strategy(FailStrategy::Fail)
    }

    /// Switches to [`FailStrategy::Silent`].
    #[must_use]
    pub fn silent_fail(self) -> Self {
        self.with_strategy(FailStrategy::Silent)
    }

    /// Switches to [`FailStrategy::Ignore`].
    #[must_use]
    pub fn ignore_fail(self) -> Self {
        self.with_strategy(FailStrategy::Ignore)
    }

    fn with_strategy(self, strategy: FailStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Returns the current strategy.
    pub const fn strategy(&self) -> FailStrategy {
        self.strategy
    }
}

impl<I, O, E, F> Action<I, O, E, F>
where
    F: Fn(I) -> Result<O, E>,
    E: From<Throwable>,
{
    /// Calls the wrapped function and applies the strategy.
    ///
    /// # Errors
    ///
    /// Under [`FailStrategy::Fail`], returns the function's error (or the
    /// captured panic converted into `E`).
    pub fn call(&self, input: I) -> Result<Outcome<O, E>, E> {
        match safecall(|| (self.function)(input)) {
            Try::Success(output) => Ok(Outcome::Output(output)),
            Try::Failure(error) => {
                debug!(strategy = ?self.strategy, "action failed");
                match self.strategy {
                    FailStrategy::Fail => Err(error),
                    FailStrategy::Silent => Ok(Outcome::Error(error)),
                    FailStrategy::Ignore => Ok(Outcome::Skipped),
                }
            }
        }
    }
}

impl<I, O, E, F> fmt::Debug for Action<I, O, E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Action")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
