//! Reading time estimates.

use std::fmt;

/// Default reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Estimated time to read a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingTime {
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Whole minutes, rounded up, at least 1.
    pub minutes: usize,
}

impl ReadingTime {
    /// Estimate reading time for `text` at `words_per_minute`.
    ///
    /// A zero speed is treated as 1 word per minute.
    #[must_use]
    pub fn estimate(text: &str, words_per_minute: usize) -> Self {
        let words = text.split_whitespace().count();
        let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
        Self { words, minutes }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}
