//! Outcome that also carries the value an operation produced.

use crate::types::{Code, Fault, Outcome};
use core::error::Error;
use core::fmt;
use core::ops::{Deref, DerefMut};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An [`Outcome`] plus an optional produced value.
///
/// Storing a present value marks the outcome successful. The value and the
/// failure bookkeeping are independent: setting a value does not clear an
/// earlier code, fault or message, which allows states such as "succeeded
/// with a warning code".
///
/// The recording and logging surface of [`Outcome`] is reachable through
/// `Deref`; the by-value builders are repeated here so they keep the type.
///
/// # Examples
///
/// ```
/// use op_outcome::{Code, ValueOutcome};
///
/// let found = ValueOutcome::from_value(7_u32);
/// assert!(found.is_success());
/// assert_eq!(found.value(), Some(&7));
///
/// let warned = ValueOutcome::with_code_and_value("STALE_CACHE", Some(7_u32));
/// assert!(warned.is_success());
/// assert!(warned.has_code("STALE_CACHE"));
///
/// let missing: ValueOutcome<u32> = ValueOutcome::new()
///     .with_failure(Code::NOT_FOUND, Some("no such order"));
/// assert!(missing.is_failure());
/// assert_eq!(missing.value(), None);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueOutcome<T> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) outcome: Outcome,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) value: Option<T>,
}

impl<T> ValueOutcome<T> {
    /// Creates a failed outcome without a value.
    #[inline]
    pub fn new() -> Self {
        Self { outcome: Outcome::new(), value: None }
    }

    /// Creates an outcome from an optional initial value.
    ///
    /// Succeeds only when the value is present.
    #[inline]
    pub fn from_value(value: impl Into<Option<T>>) -> Self {
        let mut outcome = Self::new();
        outcome.set_value(value.into());
        outcome
    }

    /// Creates an outcome with `code` set and, when present, a value.
    ///
    /// The code is recorded even when the value marks the outcome successful.
    #[inline]
    pub fn with_code_and_value(code: impl Into<Code>, value: Option<T>) -> Self {
        let mut outcome = Self::new();
        outcome.outcome.code = Some(code.into());
        outcome.set_value(value);
        outcome
    }

    /// Wraps existing bookkeeping without a value.
    #[inline]
    pub fn from_outcome(outcome: Outcome) -> Self {
        Self { outcome, value: None }
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Stores `value`; a present value marks the outcome successful.
    ///
    /// An absent value clears the slot and leaves the success flag alone.
    pub fn set_value(&mut self, value: Option<T>) -> &mut Self {
        if value.is_some() {
            self.outcome.success = true;
        }
        self.value = value;
        self
    }

    /// Removes the value, leaving the bookkeeping untouched.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns the untyped bookkeeping.
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.value)
    }

    /// Maps the value while keeping the bookkeeping.
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        ValueOutcome { outcome: self.outcome, value: self.value.map(f) }
    }

    /// Builder form of [`set_value`](Self::set_value).
    #[inline]
    pub fn with_value(mut self, value: Option<T>) -> Self {
        self.set_value(value);
        self
    }

    #[inline]
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.outcome.record_fault(fault);
        self
    }

    #[inline]
    pub fn with_error<E>(mut self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.outcome.record_error(error);
        self
    }

    #[inline]
    pub fn with_validation_failure(mut self, message: impl AsRef<str>) -> Self {
        self.outcome.record_validation_failure(message);
        self
    }

    #[inline]
    pub fn with_failure(mut self, code: impl Into<Code>, message: Option<&str>) -> Self {
        self.outcome.record_failure(code, message);
        self
    }

    #[inline]
    pub fn with_message(mut self, message: impl AsRef<str>) -> Self {
        self.outcome.record_message(message);
        self
    }
}

impl<T> Default for ValueOutcome<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ValueOutcome<T> {
    type Target = Outcome;

    #[inline]
    fn deref(&self) -> &Outcome {
        &self.outcome
    }
}

impl<T> DerefMut for ValueOutcome<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Outcome {
        &mut self.outcome
    }
}

impl<T> From<Outcome> for ValueOutcome<T> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    #[inline]
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.outcome
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueOutcome")
            .field("success", &self.outcome.success)
            .field("code", &self.outcome.code)
            .field("messages", &self.outcome.messages)
            .field("fault", &self.outcome.fault)
            .field("value", &self.value)
            .finish()
    }
}

impl<T> fmt::Display for ValueOutcome<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.outcome, f)
    }
}
