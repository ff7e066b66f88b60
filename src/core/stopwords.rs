//! Stop words excluded from n-gram construction
//!
//! Stop words still appear in the word list and in the character counts.
//! Only their participation in the unigram/bigram/trigram window is suppressed.

use std::collections::HashSet;

/// Fixed English stop-word list, including contraction fragments
/// (`s`, `t`, `d`, `ll`, `re`, `ve`, ...) left behind by the tokenizer.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "this", "that", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
    "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "isn", "wasn", "weren", "don", "didn", "t", "can", "will", "ll",
    "just", "should", "now", "ve", "st", "would", "wouldn", "could", "couldn", "oh",
    "yes", "re", "d",
];

/// Membership-only set of words kept out of the n-gram window
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<&'static str>,
}

impl StopWordSet {
    /// The built-in English list
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().copied().collect(),
        }
    }

    /// A set that filters nothing
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Whether a lowercase token is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
