//! Avatar file naming.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_]+").unwrap();
}

/// Derive a filename-safe slug from a display name.
///
/// A `-` goes between a lowercase letter followed by an uppercase one,
/// runs of whitespace or underscores collapse to a single `-`, and the
/// result is lowercased.
///
/// # Examples
/// ```
/// use notifeed_core::avatar_key;
/// assert_eq!(avatar_key("Alice Smith"), "alice-smith");
/// assert_eq!(avatar_key("JohnDoe"), "john-doe");
/// ```
pub fn avatar_key(full_name: &str) -> String {
    let split = CASE_BOUNDARY.replace_all(full_name, "$1-$2");
    SEPARATOR_RUN.replace_all(&split, "-").to_lowercase()
}
