//! Word lists for the game
//!
//! Provides the embedded Portuguese answer list compiled into the binary,
//! plus loading utilities and the shuffle-and-cycle word source.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{PALAVRAS, PALAVRAS_COUNT};
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palavras_count_matches_const() {
        assert_eq!(PALAVRAS.len(), PALAVRAS_COUNT);
    }

    #[test]
    fn palavras_are_uppercase_ascii() {
        for &word in PALAVRAS {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' is not uppercase ASCII"
            );
        }
    }

    #[test]
    fn palavras_contains_known_entries() {
        assert!(PALAVRAS.contains(&"TERMO"));
        assert!(PALAVRAS.contains(&"SAGAZ"));
    }

    #[test]
    fn list_carries_one_short_legacy_entry() {
        // MEDO is 4 letters; it rides along in the data file and is filtered
        // out at load, same as the original list handled it
        assert!(PALAVRAS.contains(&"MEDO"));
        let valid = PALAVRAS.iter().filter(|w| w.len() == 5).count();
        assert_eq!(valid, PALAVRAS_COUNT - 1);
    }
}
