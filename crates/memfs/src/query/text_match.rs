//! Case-insensitive text matching and name ordering.

use std::cmp::Ordering;

/// Lowercases a keyword once so it can be matched against many candidates.
#[inline]
pub fn lowercase_needle(keyword: &str) -> String {
    keyword.to_lowercase()
}

/// Returns true if `needle` (already lowercased) occurs in `haystack`,
/// ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }
    haystack.to_lowercase().contains(needle)
}

/// Orders names lexicographically, ignoring case.
///
/// Names that differ only in case compare equal; callers that need a
/// deterministic order among such names must sort stably.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
