//! Anagram bonus round
//!
//! When a session is lost, the player gets one timed chance to unscramble
//! the solution. This is a pure reducer over two discrete events: a one-second
//! countdown tick and a text input submission. No timer lives here — the
//! owner delivers ticks.

use super::penalty::shuffle_distinct;
use crate::core::Word;
use rand::Rng;

/// Countdown length in seconds
pub const ANAGRAM_SECONDS: u32 = 15;

/// Timed unscramble-the-solution challenge shown after a loss
#[derive(Debug, Clone)]
pub struct AnagramChallenge {
    solution: Word,
    anagram: String,
    input: String,
    seconds_remaining: u32,
    solved: bool,
    revealed: bool,
}

impl AnagramChallenge {
    /// Start a challenge for `solution`
    ///
    /// The displayed anagram is a permutation of the solution's letters,
    /// guaranteed different from the solution itself whenever a distinct
    /// permutation exists.
    pub fn start<R: Rng + ?Sized>(rng: &mut R, solution: Word) -> Self {
        let anagram = shuffle_distinct(rng, solution.letters())
            .iter()
            .map(|&b| b as char)
            .collect();

        Self {
            solution,
            anagram,
            input: String::new(),
            seconds_remaining: ANAGRAM_SECONDS,
            solved: false,
            revealed: false,
        }
    }

    /// One-second countdown tick
    ///
    /// Reaching zero reveals the solution without solving. Ticks are ignored
    /// once the challenge is over.
    pub fn tick(&mut self) {
        if self.revealed {
            return;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.revealed = true;
        }
    }

    /// Record the player's current input
    ///
    /// Input is uppercased and compared to the solution; an exact match
    /// solves the challenge and halts the countdown. Input after the reveal
    /// has no effect.
    pub fn submit(&mut self, input: &str) {
        if self.revealed {
            return;
        }

        self.input = input.to_uppercase();
        if self.input == self.solution.text() {
            self.solved = true;
            self.revealed = true;
        }
    }

    /// The scrambled word shown to the player
    #[must_use]
    pub fn anagram(&self) -> &str {
        &self.anagram
    }

    /// The player's latest input, uppercased
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Seconds left on the countdown
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Whether the player unscrambled the word in time
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    /// Whether the solution is now shown (solved or timed out)
    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn challenge(seed: u64) -> AnagramChallenge {
        let mut rng = StdRng::seed_from_u64(seed);
        AnagramChallenge::start(&mut rng, Word::new("TERMO").unwrap())
    }

    #[test]
    fn anagram_differs_from_solution() {
        for seed in 0..100 {
            let c = challenge(seed);
            assert_ne!(c.anagram(), "TERMO");

            let mut expected = b"TERMO".to_vec();
            let mut actual = c.anagram().as_bytes().to_vec();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn correct_submission_solves_and_halts_countdown() {
        let mut c = challenge(1);
        c.tick();
        c.tick();
        assert_eq!(c.seconds_remaining(), ANAGRAM_SECONDS - 2);

        c.submit("termo");
        assert!(c.solved());
        assert!(c.revealed());

        // Countdown is halted
        let before = c.seconds_remaining();
        c.tick();
        assert_eq!(c.seconds_remaining(), before);
    }

    #[test]
    fn wrong_submission_just_records_input() {
        let mut c = challenge(2);
        c.submit("mrote");
        assert!(!c.solved());
        assert!(!c.revealed());
        assert_eq!(c.input(), "MROTE");
    }

    #[test]
    fn timeout_reveals_without_solving() {
        let mut c = challenge(3);
        for _ in 0..ANAGRAM_SECONDS {
            c.tick();
        }

        assert_eq!(c.seconds_remaining(), 0);
        assert!(c.revealed());
        assert!(!c.solved());
    }

    #[test]
    fn input_after_reveal_is_ignored() {
        let mut c = challenge(4);
        for _ in 0..ANAGRAM_SECONDS {
            c.tick();
        }
        assert!(c.revealed());

        c.submit("TERMO");
        assert!(!c.solved(), "late input must not rescue the challenge");
    }
}
