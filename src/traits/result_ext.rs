//! Extension trait turning `Result`s into outcomes at call sites.
//!
//! # Examples
//!
//! ```
//! use op_outcome::traits::ResultOutcomeExt;
//! use op_outcome::Code;
//!
//! fn read_settings() -> Result<String, std::io::Error> {
//!     std::fs::read_to_string("/definitely/not/here.toml")
//! }
//!
//! let outcome = read_settings().into_outcome_with(Code::NOT_FOUND);
//! assert!(outcome.is_failure());
//! assert!(outcome.has_code(Code::NOT_FOUND));
//! assert!(outcome.fault().is_some());
//! ```

use crate::types::{Code, ValueOutcome};
use core::error::Error;

/// Adds outcome conversions to `Result`.
pub trait ResultOutcomeExt<T> {
    /// Converts into a [`ValueOutcome`]; an error becomes the fault.
    fn into_outcome(self) -> ValueOutcome<T>;

    /// Like [`into_outcome`](Self::into_outcome), but a captured error is
    /// classified with `code` instead of
    /// [`Code::UNEXPECTED_ERROR`](crate::Code::UNEXPECTED_ERROR).
    fn into_outcome_with(self, code: impl Into<Code>) -> ValueOutcome<T>;
}

impl<T, E> ResultOutcomeExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_outcome(self) -> ValueOutcome<T> {
        ValueOutcome::capture(self)
    }

    fn into_outcome_with(self, code: impl Into<Code>) -> ValueOutcome<T> {
        let mut outcome = ValueOutcome::capture(self);
        if outcome.fault().is_some() {
            outcome.record_failure(code, None);
        }
        outcome
    }
}
