//! Word lists for the game
//!
//! The dictionary gates which guesses are accepted and supplies the answer.
//! A small built-in list is compiled into the binary as a fallback.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, DictionarySource};
pub use embedded::FALLBACK;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(FALLBACK.len(), 30, "Expected 30 built-in words");
    }
}
