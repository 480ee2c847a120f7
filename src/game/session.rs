//! Game session state machine
//!
//! One `Session` is a complete play-through: word selection, up to six
//! guesses, penalties, the optional hint sacrifice, and the terminal
//! Won/Lost transition. A session is frozen once terminal; replay means
//! constructing a brand-new `Session`, never resetting in place.

use super::anagram::AnagramChallenge;
use super::penalty::Penalty;
use crate::core::{
    KeyStateMap, LetterOutcome, MAX_GUESSES, Outcomes, WORD_LENGTH, Word, WordError, evaluate,
};
use crate::hint::{HINT_FAILED_MSG, HintError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

const BLANK: u8 = b' ';

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A submitted, scored guess
///
/// Appended once and never rescored. The only post-hoc mutations are the
/// display-only penalty descriptor and the hint obscure flag.
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    word: Word,
    outcomes: Outcomes,
    penalty: Option<Penalty>,
    hint_penalized: bool,
}

impl ScoredGuess {
    /// The guessed word
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Real per-position outcomes (never altered by penalties)
    #[must_use]
    pub const fn outcomes(&self) -> &Outcomes {
        &self.outcomes
    }

    /// Active penalty descriptor, if this row carries one
    #[must_use]
    pub const fn penalty(&self) -> Option<&Penalty> {
        self.penalty.as_ref()
    }

    /// Whether a hint request obscured this row
    #[must_use]
    pub const fn hint_penalized(&self) -> bool {
        self.hint_penalized
    }
}

/// One board row: a played guess, or a turn sacrificed for a hint
#[derive(Debug, Clone)]
pub enum GuessRow {
    Played(ScoredGuess),
    Sacrificed,
}

impl GuessRow {
    /// Resolve what this row actually shows on the board
    ///
    /// Applies the display-only transformations in order: sacrificed rows
    /// are blank, hint-obscured rows render as crossed-out cells, and an
    /// attached penalty substitutes its payload (hidden letter, shuffled
    /// letters, or scrambled colors).
    #[must_use]
    pub fn display_cells(&self) -> [(char, LetterOutcome); WORD_LENGTH] {
        let guess = match self {
            Self::Sacrificed => return [(' ', LetterOutcome::Empty); WORD_LENGTH],
            Self::Played(guess) => guess,
        };

        if guess.hint_penalized {
            return [('X', LetterOutcome::Invalid); WORD_LENGTH];
        }

        let mut letters: [char; WORD_LENGTH] =
            std::array::from_fn(|i| guess.word.letter_at(i) as char);
        let mut outcomes = guess.outcomes;

        match &guess.penalty {
            Some(Penalty::HideLetter { index }) => {
                letters[*index] = ' ';
            }
            Some(Penalty::ShuffleLetters { display_word }) => {
                for (cell, shown) in letters.iter_mut().zip(display_word.chars()) {
                    *cell = shown;
                }
            }
            Some(Penalty::ScrambleColors { display_outcomes }) => {
                outcomes = *display_outcomes;
            }
            None => {}
        }

        std::array::from_fn(|i| (letters[i], outcomes[i]))
    }
}

/// Result of a consumed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Guess matched the solution
    Won,
    /// Last turn spent without a match; anagram challenge started
    Lost,
    /// Incorrect guess; a penalty landed on a random past row
    Penalized,
}

/// Rejected guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Buffer still has blank cells; the turn is not consumed
    IncompleteGuess,
    /// Session already ended
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Guess is not fully filled"),
            Self::GameOver => write!(f, "Session is no longer accepting guesses"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Rejected hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintRequestError {
    /// Session already ended
    NotPlaying,
    /// A fetch is already in flight
    AlreadyPending,
    /// No turn left to sacrifice
    NoTurnsRemaining,
}

impl fmt::Display for HintRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlaying => write!(f, "Hints are only available while playing"),
            Self::AlreadyPending => write!(f, "A hint request is already pending"),
            Self::NoTurnsRemaining => write!(f, "No turn left to spend on a hint"),
        }
    }
}

impl std::error::Error for HintRequestError {}

/// One complete play-through against a single solution
#[derive(Debug)]
pub struct Session {
    id: u64,
    solution: Word,
    rows: Vec<GuessRow>,
    buffer: [u8; WORD_LENGTH],
    cursor: usize,
    status: GameStatus,
    key_states: KeyStateMap,
    hint: Option<String>,
    hint_in_flight: bool,
    anagram: Option<AnagramChallenge>,
}

impl Session {
    /// Start a session for `solution`
    ///
    /// `id` tags asynchronous hint responses; the caller hands each new
    /// session a fresh id so late responses for a replaced session are
    /// dropped.
    #[must_use]
    pub fn new(solution: Word, id: u64) -> Self {
        Self {
            id,
            solution,
            rows: Vec::new(),
            buffer: [BLANK; WORD_LENGTH],
            cursor: 0,
            status: GameStatus::Playing,
            key_states: KeyStateMap::new(),
            hint: None,
            hint_in_flight: false,
            anagram: None,
        }
    }

    /// Type a letter into the active cell, advancing the cursor
    pub fn type_letter(&mut self, c: char) {
        if self.status != GameStatus::Playing || !c.is_ascii_alphabetic() {
            return;
        }

        self.buffer[self.cursor] = c.to_ascii_uppercase() as u8;
        self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1);
    }

    /// Clear the active cell, or the previous one if it is already blank
    pub fn erase(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if self.buffer[self.cursor] == BLANK && self.cursor > 0 {
            self.cursor -= 1;
        }
        self.buffer[self.cursor] = BLANK;
    }

    /// Move the active cell left
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the active cell right
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1);
    }

    /// Jump the active cell to `index` (clamped)
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(WORD_LENGTH - 1);
    }

    /// Replace the whole buffer from a typed word (line-based CLI input)
    ///
    /// # Errors
    /// Returns the underlying [`WordError`] if `text` is not a valid word.
    pub fn set_guess(&mut self, text: &str) -> Result<(), WordError> {
        let word = Word::new(text)?;
        self.buffer = *word.letters();
        self.cursor = WORD_LENGTH - 1;
        Ok(())
    }

    /// Whether every buffer cell holds a letter
    #[must_use]
    pub fn buffer_complete(&self) -> bool {
        self.buffer.iter().all(|&b| b != BLANK)
    }

    /// Submit the current buffer as a guess
    ///
    /// An incomplete buffer is rejected without consuming the turn (the
    /// caller surfaces a shake). A complete guess is scored, folded into the
    /// keyboard state, and either wins the game, loses it on the final turn
    /// (starting the anagram challenge), or draws a penalty against a random
    /// past row.
    ///
    /// # Errors
    /// [`SubmitError::GameOver`] once terminal, [`SubmitError::IncompleteGuess`]
    /// when blank cells remain.
    pub fn submit_guess<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnOutcome, SubmitError> {
        if self.status != GameStatus::Playing {
            return Err(SubmitError::GameOver);
        }
        if !self.buffer_complete() {
            return Err(SubmitError::IncompleteGuess);
        }

        let word = Word::from_letters(self.buffer);
        let outcomes = evaluate(&word, &self.solution);
        self.key_states.apply(&word, &outcomes);

        let won = word == self.solution;
        self.rows.push(GuessRow::Played(ScoredGuess {
            word,
            outcomes,
            penalty: None,
            hint_penalized: false,
        }));
        self.buffer = [BLANK; WORD_LENGTH];
        self.cursor = 0;

        if won {
            self.status = GameStatus::Won;
            Ok(TurnOutcome::Won)
        } else if self.rows.len() >= MAX_GUESSES {
            self.lose(rng);
            Ok(TurnOutcome::Lost)
        } else {
            self.apply_penalty(rng);
            Ok(TurnOutcome::Penalized)
        }
    }

    /// Spend one turn on a hint
    ///
    /// Immediately obscures every played row, appends a sacrificed row, and
    /// marks the fetch in flight; the actual text arrives later through
    /// [`Session::resolve_hint`]. Sacrificing the last remaining turn loses
    /// the game on the spot.
    ///
    /// # Errors
    /// Rejected when the session is over, a fetch is already pending, or no
    /// turn remains to sacrifice.
    pub fn request_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u64, HintRequestError> {
        if self.status != GameStatus::Playing {
            return Err(HintRequestError::NotPlaying);
        }
        if self.hint_in_flight {
            return Err(HintRequestError::AlreadyPending);
        }
        if self.rows.len() >= MAX_GUESSES {
            return Err(HintRequestError::NoTurnsRemaining);
        }

        for row in &mut self.rows {
            if let GuessRow::Played(guess) = row {
                guess.hint_penalized = true;
            }
        }
        self.rows.push(GuessRow::Sacrificed);
        self.buffer = [BLANK; WORD_LENGTH];
        self.cursor = 0;
        self.hint_in_flight = true;

        if self.rows.len() >= MAX_GUESSES {
            self.lose(rng);
        }

        Ok(self.id)
    }

    /// Deliver the result of a hint fetch
    ///
    /// Responses tagged with a different session id are stale and dropped.
    /// A failed fetch degrades to the fixed fallback message; either way the
    /// in-flight flag clears so the player may request again.
    pub fn resolve_hint(&mut self, session_id: u64, result: Result<String, HintError>) {
        if session_id != self.id {
            return;
        }

        self.hint_in_flight = false;
        self.hint = Some(result.unwrap_or_else(|_| HINT_FAILED_MSG.to_string()));
    }

    /// Forward the player's anagram input, after a loss
    pub fn anagram_submit(&mut self, input: &str) {
        if let Some(anagram) = &mut self.anagram {
            anagram.submit(input);
        }
    }

    /// One-second logical tick, driving the anagram countdown
    pub fn tick(&mut self) {
        if let Some(anagram) = &mut self.anagram {
            anagram.tick();
        }
    }

    fn lose<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.status = GameStatus::Lost;
        self.anagram = Some(AnagramChallenge::start(rng, self.solution.clone()));
    }

    /// Attach a freshly drawn penalty to a uniformly random played row
    ///
    /// At most one penalty is active at a time: any previous descriptor is
    /// cleared before the new one lands.
    fn apply_penalty<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let played: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| matches!(row, GuessRow::Played(_)).then_some(i))
            .collect();
        let Some(&target) = played.choose(rng) else {
            return;
        };

        for row in &mut self.rows {
            if let GuessRow::Played(guess) = row {
                guess.penalty = None;
            }
        }

        if let GuessRow::Played(guess) = &mut self.rows[target] {
            let penalty = Penalty::draw(rng, &guess.word, &guess.outcomes);
            guess.penalty = Some(penalty);
        }
    }

    /// Session identifier used to tag hint responses
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The hidden solution
    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    /// Current lifecycle status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// All rows submitted so far, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Turns consumed (played and sacrificed rows)
    #[must_use]
    pub fn turn(&self) -> usize {
        self.rows.len()
    }

    /// Best-known keyboard state
    #[must_use]
    pub const fn key_states(&self) -> &KeyStateMap {
        &self.key_states
    }

    /// Hint text, once a fetch has resolved
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Whether a hint fetch is in flight
    #[must_use]
    pub const fn hint_pending(&self) -> bool {
        self.hint_in_flight
    }

    /// The anagram challenge, present only after a loss
    #[must_use]
    pub const fn anagram(&self) -> Option<&AnagramChallenge> {
        self.anagram.as_ref()
    }

    /// Current buffer contents as displayable characters
    #[must_use]
    pub fn buffer_chars(&self) -> [char; WORD_LENGTH] {
        std::array::from_fn(|i| self.buffer[i] as char)
    }

    /// Index of the active buffer cell
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}
