//! Per-letter character counts

/// Counters for the 26 ASCII letters, case-insensitive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterTally {
    counts: [u64; 26],
}

/// Zero-based alphabet index of an ASCII letter
#[inline]
fn letter_index(ch: char) -> usize {
    (ch.to_ascii_uppercase() as u8 - b'A') as usize
}

impl CharacterTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every letter of `word` to its bucket
    pub fn tally(&mut self, word: &str) {
        for ch in word.chars().filter(|c| c.is_ascii_alphabetic()) {
            self.counts[letter_index(ch)] += 1;
        }
    }

    /// Count for a single letter (either case); 0 for non-letters
    #[cfg(test)]
    pub fn count(&self, letter: char) -> u64 {
        if letter.is_ascii_alphabetic() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Sum over all buckets
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(letter, count)` pairs in a..z order
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ('a'..='z').zip(self.counts.iter().copied())
    }
}
