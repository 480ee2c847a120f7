//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constant. Entries that are not valid 5-letter words are skipped, which
//! also filters the short legacy entries the original list carried.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid [`Word`] instances, skipping any invalid
/// entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_termo::words::loader::load_from_file;
///
/// let words = load_from_file("data/palavras.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use evil_termo::words::{PALAVRAS, loader::words_from_slice};
///
/// let words = words_from_slice(PALAVRAS);
/// assert!(!words.is_empty());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["TERMO", "SENHA", "FROTA"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "TERMO");
        assert_eq!(words[1].text(), "SENHA");
        assert_eq!(words[2].text(), "FROTA");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["TERMO", "PALAVRA", "MEDO", "SENHA"];
        let words = words_from_slice(input);

        // Only the 5-letter entries survive
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "TERMO");
        assert_eq!(words[1].text(), "SENHA");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_list() {
        use crate::words::{PALAVRAS, PALAVRAS_COUNT};

        let words = words_from_slice(PALAVRAS);
        // One legacy 4-letter entry is filtered
        assert_eq!(words.len(), PALAVRAS_COUNT - 1);
    }
}
