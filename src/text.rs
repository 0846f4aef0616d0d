//! Blank and absent string predicates.
//!
//! Outcomes silently drop messages that carry no text. These helpers define
//! what "no text" means: absent, empty, or made only of Unicode whitespace.
//!
//! # Examples
//!
//! ```
//! use op_outcome::text::{has_text, is_blank, non_blank};
//!
//! assert!(is_blank(" \t\n"));
//! assert!(!is_blank(" x "));
//! assert!(has_text(Some("id")));
//! assert!(!has_text(None));
//! assert_eq!(non_blank(Some("  ")), None);
//! ```

/// Returns `true` if `text` is empty or whitespace only.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Returns `true` if `text` is absent, empty or whitespace only.
#[inline]
pub fn is_blank_opt(text: Option<&str>) -> bool {
    text.map_or(true, is_blank)
}

/// Returns `true` if `text` is present and has at least one non-whitespace character.
#[inline]
pub fn has_text(text: Option<&str>) -> bool {
    !is_blank_opt(text)
}

/// Filters out absent and blank text.
#[inline]
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !is_blank(t))
}
