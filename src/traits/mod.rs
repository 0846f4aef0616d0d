//! Traits for composing outcomes.
//!
//! - [`Combine`]: destructive left-biased merge of one outcome into another
//! - [`ResultOutcomeExt`]: converts a `Result` into a [`ValueOutcome`](crate::ValueOutcome)
//!
//! # Examples
//!
//! ```
//! use op_outcome::traits::{Combine, ResultOutcomeExt};
//! use op_outcome::Outcome;
//!
//! let mut steps = Outcome::succeeded();
//! let parsed = "12".parse::<i32>().into_outcome();
//! steps.combine(Outcome::from(parsed));
//! assert!(steps.is_success());
//! ```

pub mod combine;
pub mod result_ext;

pub use combine::Combine;
pub use result_ext::ResultOutcomeExt;
