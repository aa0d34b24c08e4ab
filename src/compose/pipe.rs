//! Sequential pipe over fallible steps.
//!
//! A [`Pipe`] threads a value through an ordered list of steps, left to
//! right. Each step returns `Result<T, E>`; the first `Err` stops the pipe and
//! the remaining steps are never called.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::container::{Throwable, Try, safecall};

/// Failure of a [`Pipe`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipeError<E> {
    /// The pipe had no steps.
    #[error("failed to pipe, pipe functions were empty")]
    Empty,
    /// A step failed; later steps were skipped.
    #[error("{0}")]
    Step(E),
}

impl<E> PipeError<E> {
    /// Returns the step error, if this is one.
    pub fn into_step(self) -> Option<E> {
        match self {
            Self::Step(error) => Some(error),
            Self::Empty => None,
        }
    }
}

type Step<'a, T, E> = Box<dyn FnOnce(T) -> Result<T, E> + 'a>;

/// A value and the steps to run over it.
///
/// # Examples
///
/// ```rust
/// use casebox::compose::{PipeError, pipe};
///
/// let result = pipe(1)
///     .then(|value| Ok::<_, String>(value + 100))
///     .then(|value| Ok(value * 2))
///     .run();
/// assert_eq!(result, Ok(202));
///
/// let empty = pipe::<i32, String>(1).run();
/// assert_eq!(empty, Err(PipeError::Empty));
/// ```
#[must_use = "a pipe does nothing until `run` is called"]
pub struct Pipe<'a, T, E> {
    value: T,
    steps: Vec<Step<'a, T, E>>,
}

/// Starts a pipe over `value`.
pub fn pipe<'a, T, E>(value: T) -> Pipe<'a, T, E> {
    Pipe {
        value,
        steps: Vec::new(),
    }
}

impl<'a, T, E> Pipe<'a, T, E> {
    /// Appends a step.
    pub fn then<F>(mut self, step: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E> + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the steps in order.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::Empty`] if there are no steps, or
    /// [`PipeError::Step`] with the first step error.
    pub fn run(self) -> Result<T, PipeError<E>> {
        self.run_with(|step, value| step(value).into())
    }

    /// Runs the steps in order, capturing a panicking step as a failure.
    ///
    /// # Errors
    ///
    /// Same as [`Pipe::run`]; a panic becomes [`PipeError::Step`] holding the
    /// panic converted from a [`Throwable`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casebox::compose::{PipeError, pipe};
    /// use casebox::container::Throwable;
    /// use casebox::matching::tags;
    ///
    /// let result = pipe(1)
    ///     .then(|value| Ok(value + 1))
    ///     .then(|_| -> Result<i32, Throwable> { panic!("step two") })
    ///     .run_guarded();
    ///
    /// let Err(PipeError::Step(error)) = result else { unreachable!() };
    /// assert_eq!(error.tag(), tags::PANIC_ERROR);
    /// ```
    pub fn run_guarded(self) -> Result<T, PipeError<E>>
    where
        E: From<Throwable>,
    {
        self.run_with(|step, value| safecall(|| step(value)))
    }

    fn run_with<R>(self, mut apply: R) -> Result<T, PipeError<E>>
    where
        R: FnMut(Step<'a, T, E>, T) -> Try<T, E>,
    {
        if self.steps.is_empty() {
            debug!("pipe run without steps");
            return Err(PipeError::Empty);
        }

        let total = self.steps.len();
        let mut value = self.value;
        for (index, step) in self.steps.into_iter().enumerate() {
            match apply(step, value) {
                Try::Success(next) => value = next,
                Try::Failure(error) => {
                    debug!(step = index, skipped = total - index - 1, "pipe short-circuited");
                    return Err(PipeError::Step(error));
                }
            }
        }
        Ok(value)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Pipe<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipe")
            .field("value", &self.value)
            .field("steps", &self.steps.len())
            .finish()
    }
}
