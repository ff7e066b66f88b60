//! Sliding-window aggregator
//!
//! Every token is tallied. Tokens that are not stop words are "accepted" and
//! feed a two-token window (`prev1`, `prev2`) from which bigrams and trigrams
//! are formed. The window starts empty, fills from the first two accepted
//! tokens, and from then on shifts by one per accepted token. By default it
//! carries over from one document to the next.

use crate::core::model::{NgramTables, RunStats};
use crate::core::stopwords::StopWordSet;
use crate::core::tally::CharacterTally;

/// Aggregator behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatorConfig {
    /// Start a fresh window at every document boundary
    pub reset_window_per_document: bool,
}

/// Window over the most recent accepted tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowState {
    /// Fewer than two accepted tokens seen since the window (re)started
    Uninitialized { first: Option<String> },
    /// `prev1` precedes `prev2`
    Running { prev1: String, prev2: String },
}

impl Default for WindowState {
    fn default() -> Self {
        WindowState::Uninitialized { first: None }
    }
}

/// What happened to a single observed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stop word: tallied only
    Skipped,
    /// Accepted while the window was still filling
    Priming,
    /// Accepted with a full window: unigram, bigram and trigram recorded
    Recorded,
}

/// Accumulates character counts, n-gram tables and the window across a corpus
#[derive(Debug)]
pub struct Aggregator {
    stop_words: StopWordSet,
    config: AggregatorConfig,
    window: WindowState,
    tables: NgramTables,
    tally: CharacterTally,
    stats: RunStats,
}

impl Aggregator {
    pub fn new(stop_words: StopWordSet, config: AggregatorConfig) -> Self {
        Self {
            stop_words,
            config,
            window: WindowState::default(),
            tables: NgramTables::new(),
            tally: CharacterTally::new(),
            stats: RunStats::default(),
        }
    }

    /// Mark the start of a new document
    pub fn begin_document(&mut self) {
        self.stats.documents += 1;
        if self.config.reset_window_per_document {
            self.window = WindowState::default();
        }
    }

    /// Mark one line read (for statistics only)
    pub fn count_line(&mut self) {
        self.stats.lines += 1;
    }

    /// Feed one lowercase token
    pub fn observe(&mut self, token: &str) -> Outcome {
        self.tally.tally(token);
        self.stats.tokens += 1;

        if self.stop_words.contains(token) {
            self.stats.stop_word_tokens += 1;
            return Outcome::Skipped;
        }

        self.stats.accepted_tokens += 1;
        self.accept(token)
    }

    fn accept(&mut self, w: &str) -> Outcome {
        self.tables.insert_unigram(w);

        let window = std::mem::take(&mut self.window);
        let (next, outcome) = match window {
            WindowState::Uninitialized { first: None } => (
                WindowState::Uninitialized {
                    first: Some(w.to_string()),
                },
                Outcome::Priming,
            ),
            WindowState::Uninitialized { first: Some(prev1) } => (
                WindowState::Running {
                    prev1,
                    prev2: w.to_string(),
                },
                Outcome::Priming,
            ),
            WindowState::Running { prev1, prev2 } => {
                self.tables.insert_bigram(&prev2, w);
                self.tables.insert_trigram(&prev1, &prev2, w);
                (
                    WindowState::Running {
                        prev1: prev2,
                        prev2: w.to_string(),
                    },
                    Outcome::Recorded,
                )
            }
        };
        self.window = next;
        outcome
    }

    #[cfg(test)]
    pub fn window(&self) -> &WindowState {
        &self.window
    }

    #[cfg(test)]
    pub fn tables(&self) -> &NgramTables {
        &self.tables
    }

    #[cfg(test)]
    pub fn tally(&self) -> &CharacterTally {
        &self.tally
    }

    /// Consume the aggregator, returning the final tables, tally and statistics
    pub fn finish(self) -> (NgramTables, CharacterTally, RunStats) {
        let mut stats = self.stats;
        stats.letters = self.tally.total();
        stats.unigrams = self.tables.unigrams.len();
        stats.bigrams = self.tables.bigrams.len();
        stats.trigrams = self.tables.trigrams.len();
        (self.tables, self.tally, stats)
    }
}
