use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[A-Za-z]+").expect("valid regex");
}

/// Yield every maximal run of ASCII letters, lowercased.
///
/// Anything else (digits, punctuation, whitespace, non-ASCII) separates terms and is dropped.
fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    RE.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}

/// Tokenize text into an ordered term sequence, duplicates preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    terms(text).collect()
}

/// Tokenize text into its set of unique terms.
pub fn tokenize_set(text: &str) -> HashSet<String> {
    terms(text).collect()
}
