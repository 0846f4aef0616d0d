//! Conversions between `Result` and outcomes.
//!
//! An `Err` entering an outcome becomes its [`Fault`](crate::Fault) with
//! [`Code::UNEXPECTED_ERROR`](crate::Code::UNEXPECTED_ERROR). Leaving an
//! outcome, anything but a success becomes `Err(Outcome)` so callers can still
//! use `?`.
//!
//! # Examples
//!
//! ```
//! use op_outcome::{Code, Outcome, ValueOutcome};
//!
//! let parsed: ValueOutcome<u16> = "8080".parse::<u16>().into();
//! assert_eq!(parsed.into_result().ok(), Some(8080));
//!
//! let broken: ValueOutcome<u16> = "port".parse::<u16>().into();
//! assert!(broken.has_code(Code::UNEXPECTED_ERROR));
//! assert_eq!(broken.fault().map(|f| f.message()).as_deref(), Some("invalid digit found in string"));
//!
//! let done = Outcome::capture(Ok::<(), std::io::Error>(()));
//! assert!(done.into_result().is_ok());
//! ```

use crate::types::{Outcome, ValueOutcome};
use core::error::Error;

impl Outcome {
    /// Converts a unit `Result` into an outcome, capturing the error as a fault.
    pub fn capture<E>(result: Result<(), E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(()) => Self::succeeded(),
            Err(error) => Self::from_error(error),
        }
    }

    /// Returns `Ok(())` on success and the outcome itself otherwise.
    #[inline]
    pub fn into_result(self) -> Result<(), Outcome> {
        if self.success {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<T> ValueOutcome<T> {
    /// Converts a `Result` into an outcome, capturing the error as a fault.
    pub fn capture<E>(result: Result<T, E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::new().with_error(error),
        }
    }

    /// Returns the value when the outcome succeeded with one.
    ///
    /// A failure, or a success without a value, yields the bookkeeping.
    pub fn into_result(self) -> Result<T, Outcome> {
        match (self.outcome.success, self.value) {
            (true, Some(value)) => Ok(value),
            _ => Err(self.outcome),
        }
    }
}

impl<E> From<Result<(), E>> for Outcome
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        Self::capture(result)
    }
}

impl<T, E> From<Result<T, E>> for ValueOutcome<T>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::capture(result)
    }
}
