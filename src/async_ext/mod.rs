//! Async extensions for op-outcome.
//!
//! Fault logging for work that has not finished yet: wrap a future with
//! [`FutureOutcomeExt::log_fault`], resolve it to an outcome with
//! [`FutureOutcomeExt::log_outcome`], or attach a continuation to a spawned
//! tokio task with `spawn_fault_logger`.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! op-outcome = { version = "0.1", features = ["async"] }
//! ```

mod log_fault;

pub use log_fault::{FutureOutcomeExt, LogFaultFuture, LogOutcomeFuture};

#[cfg(feature = "async-tokio")]
mod tokio_ext;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::spawn_fault_logger;
