//! Word list loading utilities
//!
//! Parses newline-separated word lists from files or embedded constants.

use super::DictionaryError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Parse a newline-separated word list where every entry has `len` letters
///
/// Blank lines and surrounding whitespace are ignored. Any other line that is
/// not a `len`-letter ASCII word makes the whole list malformed.
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` with the 1-based line number of the
/// first bad entry.
///
/// # Examples
/// ```
/// use wordle_board::wordlists::loader::parse_words;
///
/// let words = parse_words("tesla\ncurie\n\n", 5).unwrap();
/// assert_eq!(words.len(), 2);
///
/// assert!(parse_words("tesla\nbohr\n", 5).is_err());
/// ```
pub fn parse_words(content: &str, len: usize) -> Result<Vec<Word>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::with_len(line.trim(), len).map_err(|source| DictionaryError::Malformed {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Malformed` if any entry is not a `len`-letter word.
///
/// # Examples
/// ```no_run
/// use wordle_board::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dict.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, len: usize) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(&content, len)
}

/// Convert an embedded string slice to words of length `len`
///
/// Entries of any other length are skipped.
///
/// # Examples
/// ```
/// use wordle_board::wordlists::loader::words_from_slice;
/// use wordle_board::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK, 5);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], len: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_len(s, len).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use std::io::Write;

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("joule\n\n  gauss  \nhertz\n", 5).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "joule");
        assert_eq!(words[1].text(), "gauss");
        assert_eq!(words[2].text(), "hertz");
    }

    #[test]
    fn parse_words_lowercases_entries() {
        let words = parse_words("Tesla\r\nCURIE\r\n", 5).unwrap();
        assert_eq!(words[0].text(), "tesla");
        assert_eq!(words[1].text(), "curie");
    }

    #[test]
    fn parse_words_rejects_wrong_length() {
        let err = parse_words("joule\nbohr\ngauss\n", 5).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::Malformed {
                line: 2,
                source: WordError::InvalidLength {
                    expected: 5,
                    got: 4
                }
            }
        ));
    }

    #[test]
    fn parse_words_rejects_non_letters() {
        assert!(matches!(
            parse_words("joule\nga-ss\n", 5),
            Err(DictionaryError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fermi\nfreud\nnobel").unwrap();

        let words = load_from_file(file.path(), 5).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "nobel");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        assert!(matches!(
            load_from_file(&missing, 5),
            Err(DictionaryError::Io { .. })
        ));
    }

    #[test]
    fn words_from_slice_filters_length() {
        let input = &["tesla", "toolong", "abc", "curie"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "tesla");
        assert_eq!(words[1].text(), "curie");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }
}
