//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use op_outcome::prelude::*;
//!
//! fn load(path: &str) -> ValueOutcome<String> {
//!     std::fs::read_to_string(path).into_outcome_with(Code::NOT_FOUND)
//! }
//!
//! let outcome = load("/no/such/file");
//! assert!(outcome.is_failure());
//! outcome.log(&DiscardSink, Some("loading settings"));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`caller!`], [`fail!`]
//! - **Types**: [`Outcome`], [`ValueOutcome`], [`Code`], [`Fault`]
//! - **Traits**: [`Combine`], [`ResultOutcomeExt`], [`LogSink`]
//! - **Logging**: [`CallerId`], [`Logger`], [`DiscardSink`] and, with the
//!   `tracing` feature, `TracingLogger`

// Macros
pub use crate::{caller, fail};

// Core types
pub use crate::types::{Code, Fault, Outcome, ValueOutcome};

// Traits
pub use crate::traits::{Combine, ResultOutcomeExt};

// Logging
pub use crate::logging::{CallerId, DiscardSink, LogSink, Logger};
#[cfg(feature = "tracing")]
pub use crate::logging::TracingLogger;

#[cfg(feature = "async")]
pub use crate::async_ext::FutureOutcomeExt;
