//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear rules.

mod keyboard;
mod outcome;
mod word;

pub use keyboard::{KEYBOARD_ROWS, KeyStateMap};
pub use outcome::{LetterOutcome, Outcomes, empty_outcomes, evaluate};
pub use word::{Word, WordError};

/// Length of every guess and solution word
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses (rows) in one session
pub const MAX_GUESSES: usize = 6;
