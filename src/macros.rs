//! Shorthand macros for building outcomes and caller identities.
//!
//! - [`macro@crate::caller`] - Captures the current module path as a
//!   [`CallerId`](crate::logging::CallerId).
//! - [`macro@crate::fail`] - Creates a failed [`Outcome`](crate::Outcome)
//!   with a code and a formatted message.
//!
//! # Examples
//!
//! ```
//! use op_outcome::{caller, fail, Code};
//!
//! let order_id = 42;
//! let outcome = fail!(Code::NOT_FOUND, "order {} not found", order_id);
//! assert_eq!(outcome.to_string(), "FAIL (NOT_FOUND) order 42 not found");
//!
//! assert_eq!(caller!().as_str(), module_path!());
//! ```

/// Creates a [`CallerId`](crate::logging::CallerId) from `module_path!()`.
///
/// # Examples
///
/// ```
/// use op_outcome::caller;
///
/// let id = caller!();
/// assert!(!id.as_str().is_empty());
/// ```
#[macro_export]
macro_rules! caller {
    () => {
        $crate::logging::CallerId::named(module_path!())
    };
}

/// Creates a failed [`Outcome`](crate::Outcome).
///
/// `fail!(code)` records the code alone; `fail!(code, "fmt", args..)` also
/// records the formatted message.
///
/// # Examples
///
/// ```
/// use op_outcome::{fail, Code};
///
/// let bare = fail!(Code::NOT_IMPLEMENTED);
/// assert_eq!(bare.to_string(), "FAIL (NOT_IMPLEMENTED)");
///
/// let field = "email";
/// let detailed = fail!(Code::MISSING_REQUIRED_FIELDS, "{field} is required");
/// assert_eq!(detailed.messages(), ["email is required"]);
/// ```
#[macro_export]
macro_rules! fail {
    ($code:expr $(,)?) => {
        $crate::Outcome::failure($code, None)
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::Outcome::failure($code, Some(format!($($arg)+).as_str()))
    };
}
