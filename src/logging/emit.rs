use crate::logging::LogSink;
use crate::text::non_blank;
use crate::types::{Outcome, ValueOutcome};

/// Text of the error line that carries a recorded fault.
pub const FAULT_LOG_PREFIX: &str = "Exception caught:";

impl Outcome {
    /// Writes the outcome to `sink`.
    ///
    /// A success goes out at info level: `message` alone when given,
    /// otherwise `description` followed by every recorded message.
    ///
    /// A failure goes out at error level, in this order: `message` when
    /// given; `"{code} {description}"`, or whichever of the two is present;
    /// every recorded message unless `message` was given; the fault, under
    /// [`FAULT_LOG_PREFIX`].
    ///
    /// Blank `description` and `message` count as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_outcome::logging::DiscardSink;
    /// use op_outcome::{Code, Outcome};
    ///
    /// let outcome = Outcome::new().with_failure(Code::NOT_AUTHORIZED, Some("role missing"));
    /// outcome.log_with(&DiscardSink, Some("delete order"), None);
    /// ```
    pub fn log_with<S>(&self, sink: &S, description: Option<&str>, message: Option<&str>) -> &Self
    where
        S: LogSink + ?Sized,
    {
        let description = non_blank(description);
        let message = non_blank(message);

        if self.success {
            match message {
                Some(message) => sink.info(message),
                None => {
                    if let Some(description) = description {
                        sink.info(description);
                    }
                    for recorded in &self.messages {
                        sink.info(recorded);
                    }
                },
            }
            return self;
        }

        if let Some(message) = message {
            sink.error(message, None);
        }
        match (&self.code, description) {
            (Some(code), Some(description)) => {
                sink.error(&alloc::format!("{code} {description}"), None)
            },
            (Some(code), None) => sink.error(code.as_str(), None),
            (None, Some(description)) => sink.error(description, None),
            (None, None) => {},
        }
        if message.is_none() {
            for recorded in &self.messages {
                sink.error(recorded, None);
            }
        }
        if let Some(fault) = &self.fault {
            sink.error(FAULT_LOG_PREFIX, Some(fault));
        }
        self
    }

    /// Shorthand for [`log_with`](Self::log_with) without a message override.
    #[inline]
    pub fn log<S>(&self, sink: &S, description: Option<&str>) -> &Self
    where
        S: LogSink + ?Sized,
    {
        self.log_with(sink, description, None)
    }

    /// Builder form of [`log`](Self::log).
    #[inline]
    pub fn logged<S>(self, sink: &S, description: Option<&str>) -> Self
    where
        S: LogSink + ?Sized,
    {
        self.log(sink, description);
        self
    }
}

impl<T> ValueOutcome<T> {
    /// Builder form of [`Outcome::log`] that keeps the value.
    #[inline]
    pub fn logged<S>(self, sink: &S, description: Option<&str>) -> Self
    where
        S: LogSink + ?Sized,
    {
        self.outcome.log(sink, description);
        self
    }
}
