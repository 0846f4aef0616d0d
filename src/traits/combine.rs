//! Destructive left-biased merging of outcomes.
//!
//! `left.combine(right)` mutates `left` in place: its success flag, code and
//! fault are replaced by `right`'s, and `right`'s messages are appended after
//! the ones `left` already holds. Nothing is deduplicated. The `+` and `+=`
//! operators do the same; `left + right` consumes `left`, mutates it and
//! returns it.
//!
//! # Examples
//!
//! ```
//! use op_outcome::{Code, Combine, Outcome};
//!
//! let mut total = Outcome::succeeded().with_message("parsed header");
//! let body = Outcome::new().with_failure(Code::INVALID_REQUEST_FORMAT, Some("bad body"));
//!
//! total.combine(body);
//! assert!(total.is_failure());
//! assert_eq!(total.messages(), ["parsed header", "bad body"]);
//!
//! let merged = Outcome::new().with_message("a") + Outcome::succeeded().with_message("b");
//! assert!(merged.is_success());
//! assert_eq!(merged.to_string(), "SUCCESS");
//! ```

use crate::types::{Outcome, ValueOutcome};
use core::ops::{Add, AddAssign};

/// Merges `Rhs` into `self`, the right operand winning on scalar fields.
pub trait Combine<Rhs = Self> {
    /// Overwrites success, code and fault with `other`'s and appends its messages.
    ///
    /// Returns the mutated receiver for chaining.
    fn combine(&mut self, other: Rhs) -> &mut Self;
}

impl Combine for Outcome {
    fn combine(&mut self, other: Outcome) -> &mut Self {
        self.success = other.success;
        self.code = other.code;
        self.fault = other.fault;
        self.messages.extend(other.messages);
        self
    }
}

/// Merges bookkeeping only; the receiver keeps its value.
impl<T> Combine<Outcome> for ValueOutcome<T> {
    #[inline]
    fn combine(&mut self, other: Outcome) -> &mut Self {
        self.outcome.combine(other);
        self
    }
}

/// Merges bookkeeping and replaces the value, even with an absent one.
impl<T> Combine for ValueOutcome<T> {
    #[inline]
    fn combine(&mut self, other: ValueOutcome<T>) -> &mut Self {
        let (outcome, value) = other.into_parts();
        self.outcome.combine(outcome);
        self.value = value;
        self
    }
}

impl AddAssign for Outcome {
    #[inline]
    fn add_assign(&mut self, other: Outcome) {
        self.combine(other);
    }
}

impl Add for Outcome {
    type Output = Outcome;

    #[inline]
    fn add(mut self, other: Outcome) -> Outcome {
        self.combine(other);
        self
    }
}

impl<T> AddAssign<Outcome> for ValueOutcome<T> {
    #[inline]
    fn add_assign(&mut self, other: Outcome) {
        self.combine(other);
    }
}

impl<T> AddAssign for ValueOutcome<T> {
    #[inline]
    fn add_assign(&mut self, other: ValueOutcome<T>) {
        self.combine(other);
    }
}

impl<T> Add<Outcome> for ValueOutcome<T> {
    type Output = ValueOutcome<T>;

    #[inline]
    fn add(mut self, other: Outcome) -> ValueOutcome<T> {
        self.combine(other);
        self
    }
}

impl<T> Add for ValueOutcome<T> {
    type Output = ValueOutcome<T>;

    #[inline]
    fn add(mut self, other: ValueOutcome<T>) -> ValueOutcome<T> {
        self.combine(other);
        self
    }
}
