//! Fallible-call wrapper.
//!
//! [`safecall`] runs a callback once and normalizes both ways it can fail
//! into a single [`Try::Failure`]:
//!
//! - the callback returns `Err(e)`: the failure is `e`
//! - the callback panics: the panic payload becomes a [`Throwable`] tagged
//!   [`tags::PANIC_ERROR`](crate::matching::tags::PANIC_ERROR), converted
//!   into `E` with `From<Throwable>`
//!
//! With the `async` feature, [`safecall_async`] does the same for a callback
//! returning a future, awaiting it before classifying the outcome.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::warn;

use super::attempt::Try;
use super::throwable::Throwable;

/// Runs `callback`, capturing returned errors and panics as `Failure`.
///
/// # Examples
///
/// ```rust
/// use casebox::container::{Throwable, Try, safecall};
/// use casebox::matching::tags;
///
/// let ok: Try<i32, Throwable> = safecall(|| Ok(1));
/// assert_eq!(ok, Try::Success(1));
///
/// let returned: Try<i32, Throwable> = safecall(|| Err(Throwable::error("returned")));
/// assert_eq!(returned.failure().map(|error| error.tag()), Some(tags::ERROR));
///
/// let raised: Try<i32, Throwable> = safecall(|| panic!("raised"));
/// let error = raised.failure().unwrap();
/// assert_eq!(error.tag(), tags::PANIC_ERROR);
/// assert_eq!(error.message(), "raised");
/// ```
pub fn safecall<T, E, F>(callback: F) -> Try<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<Throwable>,
{
    match catch_unwind(AssertUnwindSafe(callback)) {
        Ok(result) => result.into(),
        Err(payload) => Try::Failure(captured(payload.as_ref()).into()),
    }
}

fn captured(payload: &(dyn std::any::Any + Send)) -> Throwable {
    let throwable = Throwable::from_panic(payload);
    warn!(message = throwable.message(), "captured panic in safecall");
    throwable
}

/// Runs an asynchronous `callback`, capturing returned errors and panics as
/// `Failure`.
///
/// Panics raised while building the future and while polling it are both
/// captured.
///
/// # Examples
///
/// ```rust
/// use casebox::container::{Throwable, Try, safecall_async};
///
/// # futures::executor::block_on(async {
/// let result: Try<i32, Throwable> = safecall_async(|| async { Ok(1) }).await;
/// assert_eq!(result, Try::Success(1));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn safecall_async<T, E, F, Fut>(callback: F) -> Try<T, E>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: From<Throwable>,
{
    use futures::FutureExt;

    let future = match catch_unwind(AssertUnwindSafe(callback)) {
        Ok(future) => future,
        Err(payload) => return Try::Failure(captured(payload.as_ref()).into()),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result.into(),
        Err(payload) => Try::Failure(captured(payload.as_ref()).into()),
    }
}
