//! Board-obscuring penalties
//!
//! Every incorrect, non-terminal guess triggers one penalty against a random
//! past row. Penalties attach display-only payloads: the real outcomes used
//! for scoring and keyboard state are never touched.

use crate::core::{Outcomes, WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::SliceRandom;

/// A display-only obfuscation attached to one scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Penalty {
    /// Blank one letter of the row
    HideLetter { index: usize },
    /// Show the row's letters in a different order
    ShuffleLetters { display_word: String },
    /// Show the row's real outcomes in shuffled positions
    ScrambleColors { display_outcomes: Outcomes },
}

impl Penalty {
    /// Draw a penalty kind uniformly and compute its payload for `word`
    ///
    /// `outcomes` are the row's real outcomes; `ScrambleColors` permutes a
    /// copy of them, so the multiset of displayed colors always matches the
    /// real ones.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, word: &Word, outcomes: &Outcomes) -> Self {
        match rng.random_range(0..3) {
            0 => Self::HideLetter {
                index: rng.random_range(0..WORD_LENGTH),
            },
            1 => {
                let shuffled = shuffle_distinct(rng, word.letters());
                Self::ShuffleLetters {
                    display_word: shuffled.iter().map(|&b| b as char).collect(),
                }
            }
            _ => {
                let mut display_outcomes = *outcomes;
                display_outcomes.shuffle(rng);
                Self::ScrambleColors { display_outcomes }
            }
        }
    }
}

/// Random permutation of `items`, resampled until it differs from the input
///
/// When the sequence admits no distinct permutation (length <= 1, or all
/// items equal) the input order is returned as-is. Termination of the
/// resample loop is probabilistic but immediate in practice: every draw
/// differs from the input with probability >= 1/2.
#[must_use]
pub fn shuffle_distinct<R: Rng + ?Sized>(rng: &mut R, items: &[u8]) -> Vec<u8> {
    let mut shuffled = items.to_vec();
    if items.len() <= 1 || items.iter().all(|&item| item == items[0]) {
        return shuffled;
    }

    loop {
        shuffled.shuffle(rng);
        if shuffled != items {
            return shuffled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterOutcome, evaluate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_distinct_never_returns_original_order() {
        let word = Word::new("TERMO").unwrap();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = shuffle_distinct(&mut rng, word.letters());

            assert_ne!(shuffled.as_slice(), word.letters().as_slice());

            let mut expected = word.letters().to_vec();
            let mut actual = shuffled.clone();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected, "shuffle must preserve the letter multiset");
        }
    }

    #[test]
    fn shuffle_distinct_single_item_returned_as_is() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(shuffle_distinct(&mut rng, b"A"), b"A".to_vec());
        assert_eq!(shuffle_distinct(&mut rng, b""), Vec::<u8>::new());
    }

    #[test]
    fn shuffle_distinct_identical_items_returned_as_is() {
        // No distinct permutation exists; must not spin forever
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(shuffle_distinct(&mut rng, b"AAAAA"), b"AAAAA".to_vec());
    }

    #[test]
    fn draw_hide_letter_index_in_bounds() {
        let word = Word::new("FESTA").unwrap();
        let solution = Word::new("TERMO").unwrap();
        let outcomes = evaluate(&word, &solution);

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Penalty::HideLetter { index } = Penalty::draw(&mut rng, &word, &outcomes) {
                assert!(index < WORD_LENGTH);
            }
        }
    }

    #[test]
    fn draw_scramble_colors_preserves_outcome_multiset() {
        let word = Word::new("FAROL").unwrap();
        let solution = Word::new("FLORA").unwrap();
        let outcomes = evaluate(&word, &solution);

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Penalty::ScrambleColors { display_outcomes } =
                Penalty::draw(&mut rng, &word, &outcomes)
            {
                let count = |slice: &Outcomes, o: LetterOutcome| {
                    slice.iter().filter(|&&x| x == o).count()
                };
                for o in [
                    LetterOutcome::Correct,
                    LetterOutcome::Present,
                    LetterOutcome::Absent,
                ] {
                    assert_eq!(count(&display_outcomes, o), count(&outcomes, o));
                }
            }
        }
    }

    #[test]
    fn draw_shuffled_word_differs_from_original() {
        let word = Word::new("MUNDO").unwrap();
        let solution = Word::new("TERMO").unwrap();
        let outcomes = evaluate(&word, &solution);

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Penalty::ShuffleLetters { display_word } =
                Penalty::draw(&mut rng, &word, &outcomes)
            {
                assert_ne!(display_word, word.text());
                assert_eq!(display_word.len(), WORD_LENGTH);
            }
        }
    }

    #[test]
    fn draw_covers_all_kinds() {
        let word = Word::new("PEDRA").unwrap();
        let solution = Word::new("TERMO").unwrap();
        let outcomes = evaluate(&word, &solution);

        let mut saw = [false; 3];
        for seed in 0..60 {
            let mut rng = StdRng::seed_from_u64(seed);
            match Penalty::draw(&mut rng, &word, &outcomes) {
                Penalty::HideLetter { .. } => saw[0] = true,
                Penalty::ShuffleLetters { .. } => saw[1] = true,
                Penalty::ScrambleColors { .. } => saw[2] = true,
            }
        }
        assert_eq!(saw, [true; 3]);
    }
}
