//! Common-word dictionary.
//!
//! A [`Dictionary`] is the set of words excluded from keyword statistics
//! (stop words, in effect). It is populated once from a text source and
//! then consumed read-only by [`analyze`](crate::analyze::analyze).
//! Membership is whole-token, case-insensitive exact match; a dictionary
//! word never matches inside a longer token.

use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::TextError;
use crate::tokenize::{normalize_line, tokenize};

/// An unordered set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from newline-delimited text.
    ///
    /// Each line is trimmed, lowercased, and tokenized; every token not
    /// already present is added. Returns the dictionary together with the
    /// number of distinct words added (duplicates in the source count once).
    ///
    /// # Errors
    ///
    /// [`TextError::InputUnavailable`] if the source cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexsift::Dictionary;
    ///
    /// let (dict, added) = Dictionary::from_reader("The a an. THE".as_bytes()).unwrap();
    /// assert_eq!(added, 3);
    /// assert!(dict.contains("the"));
    /// ```
    pub fn from_reader<R: BufRead>(source: R) -> Result<(Self, usize), TextError> {
        let mut dict = Self::new();
        let mut added = 0;
        for line in source.lines() {
            let line = normalize_line(&line?);
            for token in tokenize(&line) {
                if dict.insert(token) {
                    added += 1;
                }
            }
        }
        Ok((dict, added))
    }

    /// Builds a dictionary from a text file.
    ///
    /// # Errors
    ///
    /// [`TextError::InputUnavailable`] if the file cannot be opened or read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<(Self, usize), TextError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds a dictionary from an in-memory word list. Words are
    /// lowercased on insertion.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// Inserts a single word, lowercasing it first. Returns `true` if the
    /// word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Returns `true` if the dictionary contains `word`.
    ///
    /// The lookup is case-insensitive and matches whole tokens only:
    /// `contains("cat")` is not satisfied by a dictionary entry "category".
    ///
    /// # Examples
    ///
    /// ```
    /// use lexsift::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["the", "category"]);
    /// assert!(dict.contains("The"));
    /// assert!(!dict.contains("cat"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_words_counted_once() {
        let text = "the quick the lazy\nthe quick";
        let (dict, added) = Dictionary::from_reader(text.as_bytes()).unwrap();
        assert_eq!(added, 3);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::from_words(["Cat"]);
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
    }

    #[test]
    fn test_no_substring_match() {
        let dict = Dictionary::from_words(["category"]);
        assert!(!dict.contains("cat"));

        let dict = Dictionary::from_words(["cat"]);
        assert!(!dict.contains("category"));
    }

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let err = Dictionary::from_path("/nonexistent/common-words.txt").unwrap_err();
        assert!(matches!(err, TextError::InputUnavailable(_)));
    }
}
