//! Disqualifying-flag detection over free-text vetting comments
//!
//! A fixed vocabulary of vetting flags (eclipsing-binary indicators, false
//! positive markers, retirement notes) is compiled into one case-insensitive
//! pattern, built once and reused for every row. Short ambiguous tokens such
//! as "eb" and "fp" are matched only on word boundaries so they cannot trip
//! inside unrelated words.

use crate::constants::{COMMENT_FLAG_SUBSTRINGS, COMMENT_FLAG_WORDS};
use regex::Regex;
use std::sync::LazyLock;

/// Compiled flag pattern, shared across the process
static FLAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let substrings = COMMENT_FLAG_SUBSTRINGS
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    let words = COMMENT_FLAG_WORDS
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)(?:{substrings}|\b(?:{words})\b)");
    Regex::new(&pattern).expect("comment flag vocabulary must compile to a valid pattern")
});

/// Check whether a vetting comment carries a disqualifying flag.
///
/// Pure string predicate; an empty comment never disqualifies.
pub fn is_disqualified(comment: &str) -> bool {
    FLAG_PATTERN.is_match(comment)
}
