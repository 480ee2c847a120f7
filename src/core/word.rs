//! Game word representation
//!
//! A Word stores a 5-letter uppercase word. The word list is ASCII-folded
//! Portuguese, so accented input is expected to arrive already normalized.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter uppercase word
///
/// Construction is the validation boundary: every `Word` in the game is
/// guaranteed to be exactly [`WORD_LENGTH`] ASCII letters, so guess and
/// solution lengths can never disagree downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use evil_termo::core::Word;
    ///
    /// let word = Word::new("termo").unwrap();
    /// assert_eq!(word.text(), "TERMO");
    ///
    /// assert!(Word::new("longa demais").is_err());
    /// assert!(Word::new("TERM0").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LENGTH] = match text.as_bytes().try_into() {
            Ok(letters) => letters,
            // Unreachable: length validated above
            Err(_) => return Err(WordError::InvalidLength(text.len())),
        };

        Ok(Self { text, letters })
    }

    /// Build a Word from letters already validated as uppercase ASCII
    ///
    /// Used by the session when converting a fully-filled guess buffer,
    /// whose cells only ever hold uppercase letters.
    pub(crate) fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        let text = letters.iter().map(|&b| b as char).collect();
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for evaluation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("TERMO").unwrap();
        assert_eq!(word.text(), "TERMO");
        assert_eq!(word.letters(), b"TERMO");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("termo").unwrap();
        assert_eq!(word.text(), "TERMO");

        let word2 = Word::new("TeRmO").unwrap();
        assert_eq!(word2.text(), "TERMO");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("PALAVRA"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(Word::new("MEDO"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("TERM0").is_err()); // Number
        assert!(Word::new("TERM ").is_err()); // Space
        assert!(Word::new("TERM!").is_err()); // Punctuation
    }

    #[test]
    fn word_creation_non_ascii() {
        // Accented words must be folded before entering the game
        assert!(Word::new("AVIÃO").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("TERMO").unwrap();
        assert_eq!(word.letter_at(0), b'T');
        assert_eq!(word.letter_at(1), b'E');
        assert_eq!(word.letter_at(2), b'R');
        assert_eq!(word.letter_at(3), b'M');
        assert_eq!(word.letter_at(4), b'O');
    }

    #[test]
    fn word_from_letters_matches_new() {
        let built = Word::from_letters(*b"FLORA");
        let parsed = Word::new("flora").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("SENSO").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&2));
        assert_eq!(counts.get(&b'E'), Some(&1));
        assert_eq!(counts.get(&b'N'), Some(&1));
        assert_eq!(counts.get(&b'O'), Some(&1));
    }

    #[test]
    fn word_letter_counts_all_unique() {
        let word = Word::new("FLORA").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("vigor").unwrap();
        assert_eq!(format!("{word}"), "VIGOR");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("TERMO").unwrap();
        let word2 = Word::new("termo").unwrap();
        let word3 = Word::new("SENHA").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
