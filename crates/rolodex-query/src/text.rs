//! Text normalization shared by search, containment filters and collation.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Folds text for case- and accent-insensitive comparison.
///
/// Non-ASCII characters are transliterated to their closest ASCII form and
/// the result is lowercased, so `"Zahrá"` and `"ZAHRA"` fold to the same
/// string.
pub fn fold(text: &str) -> String {
    if text.is_ascii() {
        text.to_ascii_lowercase()
    } else {
        deunicode(text).to_lowercase()
    }
}

/// Returns `true` if `folded_needle` occurs in the folded form of `haystack`.
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold(haystack).contains(folded_needle)
}

/// Locale-aware ordering: folded text first, raw text to break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

pub(crate) fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

pub(crate) fn last_token(text: &str) -> Option<&str> {
    text.split_whitespace().next_back()
}
