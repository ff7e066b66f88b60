//! Tokenizer module - Splits lines of text into lowercase word tokens
//!
//! A token is a maximal run of ASCII letters. Everything else (digits,
//! punctuation, whitespace, non-ASCII letters) separates tokens and is dropped.
//!
//! Usage:
//! ```ignore
//! use ngrams::core::tokenizer::tokens;
//!
//! let words: Vec<String> = tokens("Don't panic, 42 times!").collect();
//! assert_eq!(words, vec!["don", "t", "panic", "times"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Word pattern shared by every call
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]+").expect("Invalid WORD_RE regex"));

/// Lazily yield the tokens of a single line, left to right, lowercased
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    WORD_RE
        .find_iter(line)
        .map(|m| m.as_str().to_ascii_lowercase())
}
