//! Tokio task attachment.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! op-outcome = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::error::Error;

use tokio::task::JoinHandle;

use crate::logging::LogSink;
use crate::types::{Outcome, ValueOutcome};

/// Attaches a continuation to a spawned task that logs its fault.
///
/// The continuation runs on the tokio runtime and never blocks the caller.
/// When the task returns `Err`, or panics, or is cancelled, the failure is
/// captured as a fault and written to `sink` once. A task returning `Ok` is
/// not logged.
///
/// The returned handle yields the task's result as a [`ValueOutcome`]; it may
/// be dropped to fire and forget.
///
/// # Panics
///
/// Panics if called outside of a tokio runtime, like `tokio::spawn`.
///
/// # Example
///
/// ```rust,ignore
/// use op_outcome::async_ext::spawn_fault_logger;
/// use op_outcome::logging::TracingLogger;
///
/// let task = tokio::spawn(async { refresh_index().await });
/// spawn_fault_logger(task, TracingLogger::for_type::<IndexRefresher>());
/// ```
pub fn spawn_fault_logger<T, E, S>(
    task: JoinHandle<Result<T, E>>,
    sink: S,
) -> JoinHandle<ValueOutcome<T>>
where
    T: Send + 'static,
    E: Error + Send + Sync + 'static,
    S: LogSink + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = match task.await {
            Ok(result) => ValueOutcome::capture(result),
            Err(join_error) => ValueOutcome::from_outcome(Outcome::from_error(join_error)),
        };
        if outcome.is_failure() {
            outcome.log(&sink, None);
        }
        outcome
    })
}
