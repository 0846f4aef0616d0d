//! Uniform operation outcomes.
//!
//! An [`Outcome`] records whether an operation succeeded, a machine-readable
//! [`Code`], an optional captured [`Fault`] and a list of human-readable
//! messages. [`ValueOutcome`] adds the value the operation produced.
//! Outcomes never panic and never return errors of their own: failure is
//! data, branched on by the caller or merged into an aggregate outcome.
//!
//! # Examples
//!
//! ## Recording Failures
//!
//! ```
//! use op_outcome::{Code, Outcome};
//!
//! let outcome = Outcome::new().with_failure(Code::NOT_FOUND, Some("missing id"));
//!
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.to_string(), "FAIL (NOT_FOUND) missing id");
//! ```
//!
//! ## Producing Values
//!
//! ```
//! use op_outcome::{Code, ValueOutcome};
//!
//! fn find_user(id: u64) -> ValueOutcome<String> {
//!     if id == 0 {
//!         return ValueOutcome::new().with_validation_failure("id must be positive");
//!     }
//!     ValueOutcome::from_value(format!("user-{id}"))
//! }
//!
//! assert_eq!(find_user(7).value().map(String::as_str), Some("user-7"));
//! assert!(find_user(0).has_code(Code::VALIDATION_FAILURE));
//! ```
//!
//! ## Combining Steps
//!
//! ```
//! use op_outcome::{Combine, Outcome};
//!
//! let mut batch = Outcome::succeeded().with_message("row 1 imported");
//! batch.combine(Outcome::new().with_validation_failure("row 2: bad date"));
//!
//! assert!(batch.is_failure());
//! assert_eq!(batch.messages(), ["row 1 imported", "row 2: bad date"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and outcomes
pub mod convert;
/// Outcome logging: caller identity, sinks and the `tracing` backend
pub mod logging;
/// Shorthand macros for outcomes and caller identities
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Blank and absent string predicates
pub mod text;
/// Traits for composing outcomes
pub mod traits;
/// Outcome, ValueOutcome, Code and Fault
pub mod types;

/// Async extensions for fault logging (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use traits::*;
pub use types::{Code, Fault, FaultMessage, MessageVec, Outcome, ValueOutcome};
