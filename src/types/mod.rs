//! Outcome values and the pieces they are built from.
//!
//! # Examples
//!
//! ```
//! use op_outcome::{Code, Outcome, ValueOutcome};
//!
//! let validated = Outcome::new().with_validation_failure("email is required");
//! assert_eq!(validated.to_string(), "FAIL (VALIDATION_FAILURE) email is required");
//!
//! let loaded = ValueOutcome::from_value(String::from("config"));
//! assert_eq!(loaded.to_string(), "SUCCESS");
//! assert!(!loaded.has_code(Code::NOT_FOUND));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod code;
pub mod fault;
pub mod outcome;
pub mod value_outcome;

pub use code::Code;
pub use fault::{Fault, FaultMessage};
pub use outcome::Outcome;
pub use value_outcome::ValueOutcome;

/// SmallVec-backed message list.
///
/// Most outcomes carry zero, one or two notes, which stay inline.
pub type MessageVec = SmallVec<[alloc_type::String; 2]>;
