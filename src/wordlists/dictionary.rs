//! Dictionary of valid words
//!
//! The dictionary is loaded once and is read-only afterwards. It is both the
//! pool the answer is drawn from and the filter for submitted guesses.

use super::FALLBACK;
use super::loader::{load_from_file, words_from_slice};
use crate::core::{Word, WordError};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid entry on line {line}")]
    Malformed {
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("word list mixes lengths: expected {expected} letters, found {got}")]
    MixedLengths { expected: usize, got: usize },

    #[error("word list is empty")]
    Empty,

    #[error("no built-in words with {0} letters")]
    NoBuiltinWords(usize),
}

/// Where the dictionary's words came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Builtin,
    InMemory,
}

/// Ordered list of valid words, all of the same length
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
    word_len: usize,
    source: DictionarySource,
}

impl Dictionary {
    /// Build a dictionary from words that all share one length
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` for an empty list and
    /// `DictionaryError::MixedLengths` if word lengths differ.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        Self::with_source(words, DictionarySource::InMemory)
    }

    fn with_source(words: Vec<Word>, source: DictionarySource) -> Result<Self, DictionaryError> {
        let word_len = words.first().ok_or(DictionaryError::Empty)?.len();

        if let Some(odd) = words.iter().find(|w| w.len() != word_len) {
            return Err(DictionaryError::MixedLengths {
                expected: word_len,
                got: odd.len(),
            });
        }

        let index = words.iter().map(|w| w.text().to_string()).collect();

        Ok(Self {
            words,
            index,
            word_len,
            source,
        })
    }

    /// Load a dictionary of `len`-letter words from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, malformed, or empty.
    pub fn from_file<P: AsRef<Path>>(path: P, len: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = load_from_file(path, len)?;
        Self::with_source(words, DictionarySource::File(path.to_path_buf()))
    }

    /// The built-in word list, restricted to `len`-letter words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NoBuiltinWords` if no built-in word has `len` letters.
    pub fn builtin(len: usize) -> Result<Self, DictionaryError> {
        let words = words_from_slice(FALLBACK, len);
        if words.is_empty() {
            return Err(DictionaryError::NoBuiltinWords(len));
        }
        Self::with_source(words, DictionarySource::Builtin)
    }

    /// Load from `path`, falling back to the built-in list on any problem
    ///
    /// # Errors
    ///
    /// Only fails when the fallback itself has no `len`-letter words.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::load_or_builtin("does/not/exist.txt", 5).unwrap();
    /// assert!(dict.is_builtin());
    /// assert!(dict.contains("tesla"));
    /// ```
    pub fn load_or_builtin<P: AsRef<Path>>(path: P, len: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        match Self::from_file(path, len) {
            Ok(dict) => {
                debug!(path = %path.display(), words = dict.len(), "loaded dictionary");
                Ok(dict)
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "dictionary unavailable, using built-in word list"
                );
                Self::builtin(len)
            }
        }
    }

    /// Exact, case-insensitive lookup
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(&word.to_ascii_lowercase())
        } else {
            self.index.contains(word)
        }
    }

    /// Pick an answer uniformly at random
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Construction guarantees at least one word
        self.words
            .choose(rng)
            .unwrap_or_else(|| &self.words[0])
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letter count shared by every word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub const fn source(&self) -> &DictionarySource {
        &self.source
    }

    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self.source, DictionarySource::Builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn contains_is_exact_and_case_insensitive() {
        let dict = Dictionary::new(words(&["tesla", "curie"])).unwrap();
        assert_eq!(dict.source(), &DictionarySource::InMemory);

        assert!(dict.contains("tesla"));
        assert!(dict.contains("TESLA"));
        assert!(!dict.contains("tesl"));
        assert!(!dict.contains("teslas"));
        assert!(!dict.contains("gauss"));
    }

    #[test]
    fn new_rejects_empty_and_mixed() {
        assert!(matches!(Dictionary::new(vec![]), Err(DictionaryError::Empty)));
        assert!(matches!(
            Dictionary::new(words(&["tesla", "bohr"])),
            Err(DictionaryError::MixedLengths {
                expected: 5,
                got: 4
            })
        ));
    }

    #[test]
    fn builtin_has_all_fallback_words() {
        let dict = Dictionary::builtin(5).unwrap();
        assert_eq!(dict.len(), FALLBACK.len());
        assert_eq!(dict.word_len(), 5);
        assert!(dict.is_builtin());
    }

    #[test]
    fn builtin_without_matching_length_fails() {
        assert!(matches!(
            Dictionary::builtin(7),
            Err(DictionaryError::NoBuiltinWords(7))
        ));
    }

    #[test]
    fn load_or_builtin_prefers_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plank\nquirk").unwrap();

        let dict = Dictionary::load_or_builtin(file.path(), 5).unwrap();
        assert!(!dict.is_builtin());
        assert_eq!(dict.source(), &DictionarySource::File(file.path().to_path_buf()));
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("quirk"));
        assert!(!dict.contains("tesla"));
    }

    #[test]
    fn load_or_builtin_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dict = Dictionary::load_or_builtin(dir.path().join("dict.txt"), 5).unwrap();

        assert!(dict.is_builtin());
        assert_eq!(dict.len(), FALLBACK.len());
    }

    #[test]
    fn load_or_builtin_falls_back_on_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plank\nquirks\n").unwrap();

        let dict = Dictionary::load_or_builtin(file.path(), 5).unwrap();
        assert!(dict.is_builtin());
        assert!(!dict.contains("plank"));
    }

    #[test]
    fn load_or_builtin_falls_back_on_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let dict = Dictionary::load_or_builtin(file.path(), 5).unwrap();
        assert!(dict.is_builtin());
    }

    #[test]
    fn choose_answer_comes_from_list() {
        let dict = Dictionary::builtin(5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let answer = dict.choose_answer(&mut rng);
            assert!(dict.contains(answer.text()));
        }
    }

    #[test]
    fn choose_answer_is_reproducible_with_seed() {
        let dict = Dictionary::builtin(5).unwrap();
        let first = dict.choose_answer(&mut StdRng::seed_from_u64(42)).clone();
        let second = dict.choose_answer(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
    }
}
