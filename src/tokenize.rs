//! Tokenization: lowercase word tokens split on `\W+` (word = letters,
//! digits, underscore). No stemming, no stopword removal.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid word-break regex"));

/// Split `text` into lowercase tokens, dropping empty fragments from
/// leading/trailing/repeated delimiters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_BREAK
        .split(&lowered)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
