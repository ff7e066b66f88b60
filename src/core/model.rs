//! Frequency model
//!
//! Ordered frequency tables for unigrams, bigrams and trigrams, plus the
//! run statistics reported at the end of a pass.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// N-gram order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramOrder {
    Unigram,
    Bigram,
    Trigram,
}

impl NgramOrder {
    pub fn all() -> [NgramOrder; 3] {
        [NgramOrder::Unigram, NgramOrder::Bigram, NgramOrder::Trigram]
    }

    /// Number of tokens in a key of this order
    #[cfg(test)]
    pub fn arity(&self) -> usize {
        match self {
            NgramOrder::Unigram => 1,
            NgramOrder::Bigram => 2,
            NgramOrder::Trigram => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NgramOrder::Unigram => "unigrams",
            NgramOrder::Bigram => "bigrams",
            NgramOrder::Trigram => "trigrams",
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Key -> count map, iterated in ascending key order
///
/// Counts only grow; keys are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` at 1 or bump its count
    pub fn increment(&mut self, key: String) {
        *self.entries.entry(key).or_insert(0) += 1;
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.entries.values().sum()
    }

    /// Entries in ascending lexicographic key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// The three n-gram tables
#[derive(Debug, Clone, Default)]
pub struct NgramTables {
    pub unigrams: FrequencyTable,
    pub bigrams: FrequencyTable,
    pub trigrams: FrequencyTable,
}

impl NgramTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_unigram(&mut self, w: &str) {
        self.unigrams.increment(w.to_string());
    }

    pub fn insert_bigram(&mut self, a: &str, b: &str) {
        self.bigrams.increment(format!("{} {}", a, b));
    }

    pub fn insert_trigram(&mut self, a: &str, b: &str, c: &str) {
        self.trigrams.increment(format!("{} {} {}", a, b, c));
    }

    /// Table for a given order
    pub fn table(&self, order: NgramOrder) -> &FrequencyTable {
        match order {
            NgramOrder::Unigram => &self.unigrams,
            NgramOrder::Bigram => &self.bigrams,
            NgramOrder::Trigram => &self.trigrams,
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Documents read
    pub documents: usize,
    /// Lines read across all documents
    pub lines: u64,
    /// Tokens extracted, stop words included
    pub tokens: u64,
    /// Tokens that entered the n-gram window
    pub accepted_tokens: u64,
    /// Tokens dropped as stop words
    pub stop_word_tokens: u64,
    /// Letters counted into the character tally
    pub letters: u64,
    /// Distinct unigram keys
    pub unigrams: usize,
    /// Distinct bigram keys
    pub bigrams: usize,
    /// Distinct trigram keys
    pub trigrams: usize,
}
