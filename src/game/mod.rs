//! Game session logic
//!
//! The session state machine, the penalty selector, the anagram bonus round,
//! and the running statistics record. Everything randomized takes
//! `&mut impl Rng` so callers (and tests) control the draws.

mod anagram;
mod penalty;
mod session;
mod stats;

pub use anagram::{ANAGRAM_SECONDS, AnagramChallenge};
pub use penalty::{Penalty, shuffle_distinct};
pub use session::{
    GameStatus, GuessRow, HintRequestError, ScoredGuess, Session, SubmitError, TurnOutcome,
};
pub use stats::GameStats;
