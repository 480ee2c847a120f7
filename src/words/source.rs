//! Shuffle-and-cycle word source
//!
//! Owns a shuffled copy of the word list and a cursor, handing out words
//! sequentially and reshuffling on exhaustion. Injected into the game rather
//! than referenced as ambient global state, so each caller controls its own
//! cycle (and tests control the shuffle).

use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Source of solution words, cycling through a shuffled list
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
    cursor: usize,
}

impl WordSource {
    /// Create a source over `words`, shuffling them once up front
    pub fn new<R: Rng + ?Sized>(rng: &mut R, mut words: Vec<Word>) -> Self {
        words.shuffle(rng);
        Self { words, cursor: 0 }
    }

    /// Hand out the next word
    ///
    /// Every word in the list is handed out once before any repeats; on
    /// exhaustion the list is reshuffled and the cycle restarts. Returns
    /// `None` only for an empty list.
    pub fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Word> {
        if self.words.is_empty() {
            return None;
        }

        if self.cursor >= self.words.len() {
            debug!(words = self.words.len(), "word list exhausted, reshuffling");
            self.words.shuffle(rng);
            self.cursor = 0;
        }

        let word = self.words[self.cursor].clone();
        self.cursor += 1;
        Some(word)
    }

    /// Number of words in the cycle
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the source has no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
