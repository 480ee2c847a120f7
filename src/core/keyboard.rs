//! Keyboard key-state aggregation
//!
//! Folds scored guesses into the best-known outcome per letter, used to color
//! the on-screen keyboard. Only real outcomes are folded — penalty display
//! values never reach this map.

use super::{LetterOutcome, Outcomes, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout (QWERTY, as the original board uses)
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known outcome per letter across all scored guesses
///
/// Precedence is Correct > Present > Absent: a letter marked `Correct` is
/// terminal, and a letter proven `Present` is never downgraded to `Absent`
/// by a later guess whose copy of it lost the multiset draw.
#[derive(Debug, Default, Clone)]
pub struct KeyStateMap {
    states: FxHashMap<u8, LetterOutcome>,
}

impl KeyStateMap {
    /// Empty map, all keys unmarked
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-known outcome for a letter, if any guess has touched it
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterOutcome> {
        self.states.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Fold one scored guess into the map
    ///
    /// The guess is first reduced to a single strongest outcome per letter,
    /// then merged. Reducing first means duplicate letters within the same
    /// guess cannot have an earlier position's update change how a later
    /// position is merged.
    pub fn apply(&mut self, word: &Word, outcomes: &Outcomes) {
        let mut strongest: FxHashMap<u8, LetterOutcome> = FxHashMap::default();
        for i in 0..WORD_LENGTH {
            let letter = word.letter_at(i);
            let outcome = outcomes[i];
            strongest
                .entry(letter)
                .and_modify(|current| {
                    if outcome.strength() > current.strength() {
                        *current = outcome;
                    }
                })
                .or_insert(outcome);
        }

        for (letter, outcome) in strongest {
            match self.states.get(&letter) {
                // Correct is sticky
                Some(LetterOutcome::Correct) => {}
                // Present is never downgraded to Absent
                Some(LetterOutcome::Present) if outcome == LetterOutcome::Absent => {}
                _ => {
                    self.states.insert(letter, outcome);
                }
            }
        }
    }
}
