//! Word list used to decide whether a traced path spells a real word.

use derive_more::{Display, Error};
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dictionary from in-memory words, normalized like a file load.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().filter_map(|w| normalize(w.as_ref())).collect();
        Self { words }
    }

    /// Reads newline-delimited words from `reader`.
    #[instrument(skip(reader))]
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line =
                line.map_err(|e| DictionaryError::new(format!("Failed to read line: {}", e)))?;
            if let Some(word) = normalize(&line) {
                words.insert(word);
            }
        }
        debug!(count = words.len(), "Read words");
        Ok(Self { words })
    }

    /// Loads a word list file, surfacing I/O failures.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            DictionaryError::new(format!(
                "Failed to open {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let dictionary = Self::from_reader(std::io::BufReader::new(file))?;
        info!(words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Loads a word list file, falling back to an empty dictionary.
    ///
    /// With an empty dictionary every word attempt is rejected, so a missing
    /// file degrades the game instead of stopping the server.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to empty word list");
            Self::empty()
        })
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}

/// Failure to read a word list.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_reader_normalizes() {
        let dict = Dictionary::from_reader(Cursor::new("  Cat\nDOG\n\n   \nbird  \n")).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("bird"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::from_words(["tree"]);
        assert!(dict.contains("TREE"));
        assert!(dict.contains("Tree"));
        assert!(!dict.contains("trees"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dict = Dictionary::from_words(["cat", "CAT", " cat "]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_load_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple\r\nbanana\n\ncherry").unwrap();
        let dict = Dictionary::load(file.path());
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("apple"));
        assert!(dict.contains("cherry"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dict = Dictionary::load("/definitely/not/a/wordlist.txt");
        assert!(dict.is_empty());
        assert!(!dict.contains("cat"));
    }

    #[test]
    fn test_try_load_reports_missing_file() {
        let err = Dictionary::try_load("/definitely/not/a/wordlist.txt").unwrap_err();
        assert!(err.message.contains("Failed to open"));
    }
}
