//! Optional logging of outcomes.
//!
//! The backend is a collaborator: anything implementing [`LogSink`] can
//! receive lines, and a [`ResolveSink`] picks the sink for a [`CallerId`].
//! With the `tracing` feature, [`TracingLogger`] routes lines to `tracing`
//! events tagged with the caller.
//!
//! # Examples
//!
//! ```
//! use op_outcome::logging::{CallerId, LogSink, Logger};
//! use op_outcome::{Fault, Outcome};
//! use std::cell::RefCell;
//!
//! #[derive(Default)]
//! struct Lines(RefCell<Vec<String>>);
//!
//! impl LogSink for Lines {
//!     fn info(&self, text: &str) {
//!         self.0.borrow_mut().push(format!("INFO {text}"));
//!     }
//!
//!     fn error(&self, text: &str, _fault: Option<&Fault>) {
//!         self.0.borrow_mut().push(format!("ERROR {text}"));
//!     }
//! }
//!
//! let logger = Logger::new(CallerId::named("billing"), Lines::default());
//! Outcome::new()
//!     .with_validation_failure("amount must be positive")
//!     .log(&logger, Some("charge card"));
//!
//! assert_eq!(
//!     *logger.sink().0.borrow(),
//!     ["ERROR VALIDATION_FAILURE charge card", "ERROR amount must be positive"]
//! );
//! ```

mod caller;
mod emit;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_sink;

pub use caller::{type_key, CallerId};
pub use emit::FAULT_LOG_PREFIX;
pub use sink::{DiscardSink, LogSink, Logger, ResolveSink};
#[cfg(feature = "tracing")]
pub use tracing_sink::{TracingLogger, TracingResolver, TracingSink};
