use crate::logging::CallerId;
use crate::types::Fault;
use alloc::boxed::Box;
use alloc::sync::Arc;

/// Destination for outcome log lines.
///
/// Implementations decide where text goes; outcomes only choose the level.
pub trait LogSink {
    /// Writes an informational line.
    fn info(&self, text: &str);

    /// Writes an error line, optionally with the fault that caused it.
    fn error(&self, text: &str, fault: Option<&Fault>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    #[inline]
    fn info(&self, text: &str) {
        (**self).info(text);
    }

    #[inline]
    fn error(&self, text: &str, fault: Option<&Fault>) {
        (**self).error(text, fault);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    #[inline]
    fn info(&self, text: &str) {
        (**self).info(text);
    }

    #[inline]
    fn error(&self, text: &str, fault: Option<&Fault>) {
        (**self).error(text, fault);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    #[inline]
    fn info(&self, text: &str) {
        (**self).info(text);
    }

    #[inline]
    fn error(&self, text: &str, fault: Option<&Fault>) {
        (**self).error(text, fault);
    }
}

/// Maps a caller identity to the sink that should receive its lines.
pub trait ResolveSink {
    type Sink: LogSink;

    fn resolve(&self, caller: &CallerId) -> Self::Sink;
}

impl<F, S> ResolveSink for F
where
    F: Fn(&CallerId) -> S,
    S: LogSink,
{
    type Sink = S;

    #[inline]
    fn resolve(&self, caller: &CallerId) -> S {
        self(caller)
    }
}

/// Sink that drops every line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardSink;

impl LogSink for DiscardSink {
    #[inline]
    fn info(&self, _text: &str) {}

    #[inline]
    fn error(&self, _text: &str, _fault: Option<&Fault>) {}
}

/// A sink resolved for one caller.
///
/// # Examples
///
/// ```
/// use op_outcome::logging::{CallerId, DiscardSink, Logger};
/// use op_outcome::Outcome;
///
/// struct Importer;
///
/// let resolver = |_: &CallerId| DiscardSink;
/// let logger = Logger::resolve(&resolver, CallerId::of::<Importer>());
/// Outcome::new().with_validation_failure("empty file").log(&logger, Some("import"));
/// assert!(logger.caller().as_str().ends_with("Importer"));
/// ```
#[derive(Debug, Clone)]
pub struct Logger<S> {
    caller: CallerId,
    sink: S,
}

impl<S: LogSink> Logger<S> {
    /// Pairs a caller with an already chosen sink.
    #[inline]
    pub fn new(caller: CallerId, sink: S) -> Self {
        Self { caller, sink }
    }

    /// Asks `resolver` for the sink that serves `caller`.
    #[inline]
    pub fn resolve<R>(resolver: &R, caller: CallerId) -> Self
    where
        R: ResolveSink<Sink = S> + ?Sized,
    {
        let sink = resolver.resolve(&caller);
        Self { caller, sink }
    }

    #[inline]
    pub fn caller(&self) -> &CallerId {
        &self.caller
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LogSink> LogSink for Logger<S> {
    #[inline]
    fn info(&self, text: &str) {
        self.sink.info(text);
    }

    #[inline]
    fn error(&self, text: &str, fault: Option<&Fault>) {
        self.sink.error(text, fault);
    }
}
