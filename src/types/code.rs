//! Open set of machine-readable outcome codes.
//!
//! A [`Code`] is a plain string with a handful of well-known sentinel values.
//! It is deliberately not an enum: services introduce their own codes next to
//! the predefined ones and those travel through the same field.
//!
//! # Examples
//!
//! ```
//! use op_outcome::Code;
//!
//! let custom = Code::new("QUOTA_EXCEEDED");
//! assert_eq!(custom, "QUOTA_EXCEEDED");
//! assert!(!custom.is_well_known());
//! assert!(Code::NOT_FOUND.is_well_known());
//! assert_eq!(Code::GENERAL_ERROR.as_str(), "ERROR");
//! ```

use crate::types::alloc_type::{Cow, String};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Machine-readable classifier attached to an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Code(Cow<'static, str>);

impl Code {
    /// Generic failure without a more specific classification.
    pub const GENERAL_ERROR: Code = Code::from_static("ERROR");
    /// A fault was captured while running the operation.
    pub const UNEXPECTED_ERROR: Code = Code::from_static("UNEXPECTED_ERROR");
    pub const AUTHENTICATION_REQUIRED: Code = Code::from_static("AUTHENTICATION_REQUIRED");
    pub const NOT_AUTHORIZED: Code = Code::from_static("NOT_AUTHORIZED");
    pub const INVALID_REQUEST_FORMAT: Code = Code::from_static("INVALID_REQUEST_FORMAT");
    pub const MISSING_REQUIRED_FIELDS: Code = Code::from_static("MISSING_REQUIRED_FIELDS");
    /// Domain validation rejected the input.
    pub const VALIDATION_FAILURE: Code = Code::from_static("VALIDATION_FAILURE");
    pub const NOT_FOUND: Code = Code::from_static("NOT_FOUND");
    pub const NOT_IMPLEMENTED: Code = Code::from_static("NOT_IMPLEMENTED");

    /// Every predefined code, in declaration order.
    pub const WELL_KNOWN: [Code; 9] = [
        Code::GENERAL_ERROR,
        Code::UNEXPECTED_ERROR,
        Code::AUTHENTICATION_REQUIRED,
        Code::NOT_AUTHORIZED,
        Code::INVALID_REQUEST_FORMAT,
        Code::MISSING_REQUIRED_FIELDS,
        Code::VALIDATION_FAILURE,
        Code::NOT_FOUND,
        Code::NOT_IMPLEMENTED,
    ];

    /// Creates a code from any owned or static string.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(code: S) -> Self {
        Self(code.into())
    }

    /// Creates a code from a string literal in const context.
    #[inline]
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Returns the wire value of the code.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is one of the predefined codes.
    pub fn is_well_known(&self) -> bool {
        Self::WELL_KNOWN.iter().any(|known| known.as_str() == self.as_str())
    }

    /// Consumes the code, returning its owned string form.
    #[inline]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl fmt::Display for Code {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Code {
    #[inline]
    fn from(code: &'static str) -> Self {
        Self::from_static(code)
    }
}

impl From<String> for Code {
    #[inline]
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}

impl PartialEq<str> for Code {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Code {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
