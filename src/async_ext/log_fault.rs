//! Future wrapper that logs an error result once.

use core::error::Error;
use core::fmt::Display;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use alloc::string::{String, ToString};
use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::logging::LogSink;
use crate::types::{Fault, Outcome, ValueOutcome};

pin_project! {
    /// A future that writes its error to a sink when it resolves to `Err`.
    ///
    /// The output is passed through untouched. An `Ok` output is never
    /// logged, and the sink is consumed by the first error so a fault is
    /// written at most once.
    ///
    /// # Cancel Safety
    ///
    /// `LogFaultFuture` is cancel-safe if the inner future is cancel-safe.
    /// Dropping it before completion logs nothing.
    #[must_use = "futures do nothing unless polled"]
    pub struct LogFaultFuture<Fut, S> {
        #[pin]
        future: Fut,
        sink: Option<S>,
        description: Option<String>,
    }
}

impl<Fut, S> LogFaultFuture<Fut, S> {
    #[inline]
    pub fn new(future: Fut, sink: S, description: Option<String>) -> Self {
        Self { future, sink: Some(sink), description }
    }
}

impl<Fut, S, T, E> Future for LogFaultFuture<Fut, S>
where
    Fut: Future<Output = Result<T, E>>,
    S: LogSink,
    E: Display,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            if let Err(error) = &res {
                if let Some(sink) = this.sink.take() {
                    Outcome::new()
                        .with_fault(Fault::msg(error.to_string()))
                        .log(&sink, this.description.as_deref());
                }
            }
            res
        })
    }
}

impl<Fut, S, T, E> FusedFuture for LogFaultFuture<Fut, S>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    S: LogSink,
    E: Display,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

pin_project! {
    /// A future that turns its `Result` into a [`ValueOutcome`] and logs a failure.
    ///
    /// The error is captured as a [`Fault`] holding the original value, so
    /// `downcast_ref` and the `source()` chain stay available to the caller.
    #[must_use = "futures do nothing unless polled"]
    pub struct LogOutcomeFuture<Fut, S> {
        #[pin]
        future: Fut,
        sink: Option<S>,
        description: Option<String>,
    }
}

impl<Fut, S> LogOutcomeFuture<Fut, S> {
    #[inline]
    pub fn new(future: Fut, sink: S, description: Option<String>) -> Self {
        Self { future, sink: Some(sink), description }
    }
}

impl<Fut, S, T, E> Future for LogOutcomeFuture<Fut, S>
where
    Fut: Future<Output = Result<T, E>>,
    S: LogSink,
    E: Error + Send + Sync + 'static,
{
    type Output = ValueOutcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let outcome = ValueOutcome::capture(res);
            if outcome.is_failure() {
                if let Some(sink) = this.sink.take() {
                    outcome.log(&sink, this.description.as_deref());
                }
            }
            outcome
        })
    }
}

impl<Fut, S, T, E> FusedFuture for LogOutcomeFuture<Fut, S>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    S: LogSink,
    E: Error + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

/// Attaches fault logging to `Result`-producing futures.
///
/// # Examples
///
/// ```rust
/// use op_outcome::async_ext::FutureOutcomeExt;
/// use op_outcome::logging::DiscardSink;
///
/// async fn example() {
///     let result = async { Err::<(), _>("connection reset") }
///         .log_fault(DiscardSink)
///         .await;
///     assert!(result.is_err());
/// }
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Logs the error to `sink` if the future resolves to `Err`.
    #[inline]
    fn log_fault<S: LogSink>(self, sink: S) -> LogFaultFuture<Self, S> {
        LogFaultFuture::new(self, sink, None)
    }

    /// Like [`log_fault`](Self::log_fault), with a description for the error line.
    #[inline]
    fn log_fault_as<S, D>(self, sink: S, description: D) -> LogFaultFuture<Self, S>
    where
        S: LogSink,
        D: Into<String>,
    {
        LogFaultFuture::new(self, sink, Some(description.into()))
    }

    /// Resolves to a [`ValueOutcome`], logging it to `sink` when it failed.
    ///
    /// Unlike [`log_fault`](Self::log_fault), the error is kept as the
    /// outcome's fault rather than flattened to its message.
    #[inline]
    fn log_outcome<S>(self, sink: S, description: Option<&str>) -> LogOutcomeFuture<Self, S>
    where
        S: LogSink,
        E: Error + Send + Sync + 'static,
    {
        LogOutcomeFuture::new(self, sink, description.map(ToString::to_string))
    }
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
