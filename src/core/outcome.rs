//! Guess evaluation against the hidden solution
//!
//! Scoring one guess produces a per-position [`LetterOutcome`]. The evaluator
//! is two-pass so that duplicate letters are credited from a shared multiset:
//! exact-position matches reserve their letter first, and only the remaining
//! pool can satisfy present-elsewhere matches.

use super::{WORD_LENGTH, Word};

/// Per-letter scoring result of a guess against the solution
///
/// `Correct`/`Present`/`Absent` are the only values a scored guess may hold.
/// `Empty` marks unsubmitted cells and sacrificed rows; `Invalid` marks cells
/// obscured as a hint penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    /// Letter is in the solution at this exact position
    Correct,
    /// Letter is in the solution at a different position
    Present,
    /// Letter is not in the solution (or its copies are exhausted)
    Absent,
    /// No letter here yet
    Empty,
    /// Display-only: cell obscured by a hint penalty
    Invalid,
}

/// Ordered sequence of outcomes, one per board cell
pub type Outcomes = [LetterOutcome; WORD_LENGTH];

impl LetterOutcome {
    /// Precedence used by the keyboard aggregation: Correct > Present > Absent
    ///
    /// `Empty` and `Invalid` never enter the keyboard map and rank lowest.
    #[must_use]
    pub(crate) const fn strength(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Invalid => 0,
        }
    }
}

/// All-`Empty` outcome row, the display default for unsubmitted cells
#[must_use]
pub const fn empty_outcomes() -> Outcomes {
    [LetterOutcome::Empty; WORD_LENGTH]
}

/// Score `guess` against `solution`
///
/// Both arguments are [`Word`]s, so equal length is guaranteed by
/// construction. Every returned position is `Correct`, `Present`, or
/// `Absent` — never `Empty`/`Invalid`.
///
/// # Algorithm
/// 1. Build a per-letter available-count multiset from the solution.
/// 2. First pass: mark exact-position matches `Correct` and decrement the
///    matched letter's count, reserving it.
/// 3. Second pass: for each remaining position, mark `Present` and decrement
///    if the letter still has count available, otherwise `Absent`.
///
/// The first pass must fully complete before the second begins; otherwise a
/// solution letter guessed correctly in one slot could also be credited as
/// present in another.
///
/// # Examples
/// ```
/// use evil_termo::core::{LetterOutcome, Word, evaluate};
///
/// let solution = Word::new("FLORA").unwrap();
/// let guess = Word::new("FAROL").unwrap();
/// let outcomes = evaluate(&guess, &solution);
///
/// assert_eq!(outcomes[0], LetterOutcome::Correct); // F in place
/// assert!(outcomes[1..].iter().all(|&o| o == LetterOutcome::Present));
/// ```
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> Outcomes {
    let mut outcomes = [LetterOutcome::Absent; WORD_LENGTH];
    let mut available = solution.letter_counts();

    // First pass: exact-position matches, reserving letters
    // Allow: index needed to access guess[i], solution[i], and set outcomes[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.letter_at(i) == solution.letter_at(i) {
            outcomes[i] = LetterOutcome::Correct;

            if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-elsewhere matches from the remaining pool
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if outcomes[i] != LetterOutcome::Correct {
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                outcomes[i] = LetterOutcome::Present;
                *count -= 1;
            }
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterOutcome::{Absent, Correct, Empty, Present};

    #[test]
    fn evaluate_all_correct() {
        let word = Word::new("TERMO").unwrap();
        assert_eq!(evaluate(&word, &word), [Correct; WORD_LENGTH]);
    }

    #[test]
    fn evaluate_all_absent() {
        let guess = Word::new("VINHO").unwrap();
        let solution = Word::new("PARTE").unwrap();
        assert_eq!(evaluate(&guess, &solution), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn evaluate_flora_farol() {
        // Every guessed letter is somewhere in FLORA, only F is in place
        let solution = Word::new("FLORA").unwrap();
        let guess = Word::new("FAROL").unwrap();

        assert_eq!(
            evaluate(&guess, &solution),
            [Correct, Present, Present, Present, Present]
        );
    }

    #[test]
    fn evaluate_termo_motor() {
        // TERMO vs MOTOR: second O has no copy left in the pool
        let solution = Word::new("TERMO").unwrap();
        let guess = Word::new("MOTOR").unwrap();

        assert_eq!(
            evaluate(&guess, &solution),
            [Present, Present, Present, Absent, Present]
        );
    }

    #[test]
    fn evaluate_correct_reserves_letter() {
        // MUNDO has one M; the positional match at 0 must consume it so the
        // second M cannot also be credited as present
        let solution = Word::new("MUNDO").unwrap();
        let guess = Word::new("MESMO").unwrap();

        assert_eq!(
            evaluate(&guess, &solution),
            [Correct, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_duplicate_guess_letters_share_pool() {
        // SENSO has two S; ASSIM's two S both land Present, no more
        let solution = Word::new("SENSO").unwrap();
        let guess = Word::new("ASSIM").unwrap();

        assert_eq!(
            evaluate(&guess, &solution),
            [Absent, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_multiset_conservation() {
        // For every letter, Correct+Present credits never exceed the letter's
        // count in the solution
        let pairs = [
            ("SENSO", "NOSSO"),
            ("TERRA", "CARRO"),
            ("SAGAZ", "AMAGO"),
            ("PASSO", "POSTE"),
            ("ROSTO", "SONHO"),
        ];

        for (solution, guess) in pairs {
            let solution = Word::new(solution).unwrap();
            let guess = Word::new(guess).unwrap();
            let outcomes = evaluate(&guess, &solution);

            let solution_counts = solution.letter_counts();
            let mut credited: rustc_hash::FxHashMap<u8, u8> = rustc_hash::FxHashMap::default();
            for i in 0..WORD_LENGTH {
                if outcomes[i] != Absent {
                    *credited.entry(guess.letter_at(i)).or_insert(0) += 1;
                }
            }

            for (letter, count) in credited {
                assert!(
                    count <= *solution_counts.get(&letter).unwrap_or(&0),
                    "letter {} over-credited for guess {guess} vs {solution}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluate_never_yields_display_states() {
        let solution = Word::new("JUSTO").unwrap();
        let guess = Word::new("GOSTO").unwrap();

        for outcome in evaluate(&guess, &solution) {
            assert!(matches!(outcome, Correct | Present | Absent));
        }
    }

    #[test]
    fn empty_outcomes_is_all_empty() {
        assert_eq!(empty_outcomes(), [Empty; WORD_LENGTH]);
    }
}
