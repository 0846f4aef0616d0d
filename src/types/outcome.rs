//! The untyped operation outcome.
//!
//! An [`Outcome`] is created at the start of an operation, collects failures
//! and notes while the operation runs, and is handed back to the caller who
//! branches on [`is_success`](Outcome::is_success) or [`code`](Outcome::code).
//!
//! Every recorder exists twice: `record_*` borrows a held outcome mutably and
//! returns it for further chaining, `with_*` consumes a fresh outcome and
//! returns it. Both mutate the one instance the caller owns.

use crate::text::is_blank;
use crate::types::alloc_type::String;
use crate::types::{Code, Fault, MessageVec};
use alloc::borrow::ToOwned;
use core::error::Error;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record of whether an operation succeeded, with code, fault and messages.
///
/// A new outcome starts in the failed state; call [`Outcome::succeeded`] or
/// pass `true` to [`Outcome::with_success`] for the opposite.
///
/// # Examples
///
/// ```
/// use op_outcome::{Code, Outcome};
///
/// let mut outcome = Outcome::succeeded();
/// outcome
///     .record_message("cache warmed")
///     .record_failure(Code::NOT_FOUND, Some("missing id"));
///
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.code(), Some(&Code::NOT_FOUND));
/// assert_eq!(outcome.to_string(), "FAIL (NOT_FOUND) cache warmed.missing id");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    pub(crate) success: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) code: Option<Code>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) messages: MessageVec,
    #[cfg_attr(feature = "diagnostics", serde(rename = "exception", default))]
    #[cfg_attr(all(feature = "serde", not(feature = "diagnostics")), serde(skip))]
    pub(crate) fault: Option<Fault>,
}

impl Outcome {
    /// Creates a failed outcome with no code and no messages.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outcome with an explicit success flag.
    #[inline]
    pub fn with_success(success: bool) -> Self {
        Self { success, ..Self::default() }
    }

    /// Creates a successful outcome.
    #[inline]
    pub fn succeeded() -> Self {
        Self::with_success(true)
    }

    /// Creates a failed outcome carrying `code` and an optional message.
    #[inline]
    pub fn failure(code: impl Into<Code>, message: Option<&str>) -> Self {
        Self::new().with_failure(code, message)
    }

    /// Creates a failed outcome from a captured error.
    #[inline]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new().with_fault(Fault::new(error))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    #[inline]
    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    /// Returns `true` if the recorded code equals `code`.
    #[inline]
    pub fn has_code(&self, code: impl AsRef<str>) -> bool {
        self.code.as_ref().is_some_and(|c| c.as_str() == code.as_ref())
    }

    #[inline]
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Returns the recorded messages in insertion order.
    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Overrides the success flag.
    ///
    /// Marking the outcome successful discards a recorded fault, since a
    /// fault always means failure. Code and messages are kept.
    #[inline]
    pub fn set_success(&mut self, success: bool) -> &mut Self {
        self.success = success;
        if success {
            self.fault = None;
        }
        self
    }

    /// Overrides the code without touching any other field.
    #[inline]
    pub fn set_code(&mut self, code: Option<Code>) -> &mut Self {
        self.code = code;
        self
    }

    /// Records a captured fault.
    ///
    /// Always marks the outcome failed with [`Code::UNEXPECTED_ERROR`]; a
    /// later [`record_failure`](Self::record_failure) may refine the code.
    pub fn record_fault(&mut self, fault: Fault) -> &mut Self {
        self.fault = Some(fault);
        self.success = false;
        self.code = Some(Code::UNEXPECTED_ERROR);
        self
    }

    /// Captures `error` as a [`Fault`] and records it.
    #[inline]
    pub fn record_error<E>(&mut self, error: E) -> &mut Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.record_fault(Fault::new(error))
    }

    /// Marks the outcome as a validation failure.
    ///
    /// Blank messages are dropped; the code is set regardless.
    pub fn record_validation_failure(&mut self, message: impl AsRef<str>) -> &mut Self {
        self.success = false;
        self.code = Some(Code::VALIDATION_FAILURE);
        self.push_message(message.as_ref());
        self
    }

    /// Marks the outcome failed with `code`, appending `message` when it has text.
    pub fn record_failure(&mut self, code: impl Into<Code>, message: Option<&str>) -> &mut Self {
        self.success = false;
        self.code = Some(code.into());
        if let Some(message) = message {
            self.push_message(message);
        }
        self
    }

    /// Appends a note without changing the success flag or code.
    #[inline]
    pub fn record_message(&mut self, message: impl AsRef<str>) -> &mut Self {
        self.push_message(message.as_ref());
        self
    }

    /// Appends every non-blank note from `messages`.
    pub fn record_messages<I, S>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for message in messages {
            self.push_message(message.as_ref());
        }
        self
    }

    /// Builder form of [`record_fault`](Self::record_fault).
    #[inline]
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.record_fault(fault);
        self
    }

    /// Builder form of [`record_error`](Self::record_error).
    #[inline]
    pub fn with_error<E>(mut self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.record_error(error);
        self
    }

    /// Builder form of [`record_validation_failure`](Self::record_validation_failure).
    #[inline]
    pub fn with_validation_failure(mut self, message: impl AsRef<str>) -> Self {
        self.record_validation_failure(message);
        self
    }

    /// Builder form of [`record_failure`](Self::record_failure).
    #[inline]
    pub fn with_failure(mut self, code: impl Into<Code>, message: Option<&str>) -> Self {
        self.record_failure(code, message);
        self
    }

    /// Builder form of [`record_message`](Self::record_message).
    #[inline]
    pub fn with_message(mut self, message: impl AsRef<str>) -> Self {
        self.record_message(message);
        self
    }

    /// Renders the outcome as a single line.
    ///
    /// `"SUCCESS"` for a success, otherwise `"FAIL"` followed by
    /// `" (CODE)"`, `" <fault message>."` and `" <messages joined by '.'>"`,
    /// each only when its source is present.
    ///
    /// ```
    /// use op_outcome::{Fault, Outcome};
    ///
    /// let mut outcome = Outcome::new();
    /// outcome
    ///     .record_fault(Fault::msg("exc-message"))
    ///     .record_failure("CODE", Some("msg1"))
    ///     .record_message("msg2");
    /// assert_eq!(outcome.describe(), "FAIL (CODE) exc-message. msg1.msg2");
    /// ```
    #[inline]
    pub fn describe(&self) -> String {
        alloc::string::ToString::to_string(self)
    }

    fn push_message(&mut self, message: &str) {
        if !is_blank(message) {
            self.messages.push(message.to_owned());
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            return f.write_str("SUCCESS");
        }

        f.write_str("FAIL")?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        if let Some(fault) = &self.fault {
            write!(f, " {fault}.")?;
        }
        if !self.messages.is_empty() {
            f.write_str(" ")?;
            for (i, message) in self.messages.iter().enumerate() {
                if i > 0 {
                    f.write_str(".")?;
                }
                f.write_str(message)?;
            }
        }
        Ok(())
    }
}
