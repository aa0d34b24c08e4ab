//! Left-to-right composition of fallible steps.
//!
//! - [`pipe`] / [`Pipe`]: builder that runs steps in order and stops at the
//!   first error
//! - [`pipe!`]: macro form of the same builder
//! - [`PipeError`]: `Empty` when there is no step, `Step(e)` for a failing step
//!
//! # Examples
//!
//! ```
//! use casebox::compose::{PipeError, pipe};
//!
//! let result = pipe(1)
//!     .then(|value| Ok(value + 100))
//!     .then(|value| if value > 100 { Err("too large") } else { Ok(value) })
//!     .then(|value| Ok(value * 2))
//!     .run();
//!
//! assert_eq!(result, Err(PipeError::Step("too large")));
//! ```

mod pipe;
mod pipe_macro;

pub use pipe::{Pipe, PipeError, pipe};
