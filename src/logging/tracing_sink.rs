//! `tracing` backend for outcome logging.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! op-outcome = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! Events carry the caller identity in the `caller` field and a recorded
//! fault in the `error` field, so subscribers can filter per component.

use crate::logging::{CallerId, LogSink, Logger, ResolveSink};
use crate::types::Fault;

/// Sink that emits `tracing` events tagged with a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSink {
    caller: CallerId,
}

impl TracingSink {
    #[inline]
    pub fn new(caller: CallerId) -> Self {
        Self { caller }
    }
}

impl LogSink for TracingSink {
    fn info(&self, text: &str) {
        tracing::info!(caller = %self.caller, "{}", text);
    }

    fn error(&self, text: &str, fault: Option<&Fault>) {
        match fault {
            Some(fault) => tracing::error!(caller = %self.caller, error = %fault, "{}", text),
            None => tracing::error!(caller = %self.caller, "{}", text),
        }
    }
}

/// Resolver handing out a [`TracingSink`] per caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingResolver;

impl ResolveSink for TracingResolver {
    type Sink = TracingSink;

    #[inline]
    fn resolve(&self, caller: &CallerId) -> TracingSink {
        TracingSink::new(caller.clone())
    }
}

/// Logger backed by `tracing`.
pub type TracingLogger = Logger<TracingSink>;

impl Logger<TracingSink> {
    /// Logger keyed by a type token.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_outcome::logging::TracingLogger;
    /// use op_outcome::Outcome;
    ///
    /// struct PaymentGateway;
    ///
    /// let logger = TracingLogger::for_type::<PaymentGateway>();
    /// Outcome::succeeded().with_message("captured").log(&logger, None);
    /// ```
    #[inline]
    pub fn for_type<T: ?Sized>() -> Self {
        Self::for_caller(CallerId::of::<T>())
    }

    /// Logger keyed by the runtime type of `caller`.
    #[inline]
    pub fn for_val<T: ?Sized>(caller: &T) -> Self {
        Self::for_caller(CallerId::of_val(caller))
    }

    #[inline]
    pub fn for_caller(caller: CallerId) -> Self {
        Self::resolve(&TracingResolver, caller)
    }
}
