//! Word-frequency analysis over newline-delimited text.
//!
//! [`analyze`] re-reads a text source line by line, tokenizing with the same
//! rules as dictionary building, and accumulates per-keyword occurrence
//! counts plus aggregate [`WordStats`]. A *keyword* is any token absent from
//! the supplied [`Dictionary`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::dictionary::Dictionary;
use crate::error::TextError;
use crate::tokenize::{normalize_line, tokenize};

/// A keyword and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// The lowercase word.
    pub word: String,
    /// Number of occurrences seen.
    pub count: usize,
}

/// Aggregate counters for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStats {
    /// Lines read, including empty ones.
    pub line_count: usize,
    /// Total token occurrences, dictionary hits and capacity-dropped
    /// tokens included.
    pub word_count: usize,
    /// Distinct keywords recorded.
    pub keyword_count: usize,
}

/// Result of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Keyword records in first-seen order.
    pub keywords: Vec<Keyword>,
    /// Aggregate counters.
    pub stats: WordStats,
    /// `true` if at least one distinct keyword was dropped because the
    /// capacity was exhausted. Counted statistics are unaffected.
    pub truncated: bool,
}

/// Analyzes a text source against a common-word dictionary.
///
/// Per line: increments `line_count` and tokenizes. Per token: increments
/// `word_count`; if the token is not in the dictionary, bumps the count of
/// an already-recorded keyword or records a new one with count 1. With
/// `capacity` of `Some(k)`, at most `k` distinct keywords are recorded;
/// further distinct keywords are dropped silently (their occurrences still
/// count toward `word_count`), a warning is logged, and
/// [`Analysis::truncated`] is set. `None` means unbounded.
///
/// Keyword records come back in first-seen order; sort them with
/// [`sort_indices`](crate::algo::sort_indices) or
/// [`sort_by`](crate::algo::sort_by) for frequency-ordered reporting.
///
/// # Errors
///
/// [`TextError::InputUnavailable`] if the source cannot be read.
///
/// # Examples
///
/// ```
/// use lexsift::{Dictionary, analyze};
///
/// let dict = Dictionary::from_words(["the"]);
/// let analysis = analyze("The cat sat. The dog ran.".as_bytes(), &dict, None).unwrap();
///
/// assert_eq!(analysis.stats.line_count, 1);
/// assert_eq!(analysis.stats.word_count, 6);
/// assert_eq!(analysis.stats.keyword_count, 4);
/// ```
pub fn analyze<R: BufRead>(
    source: R,
    dictionary: &Dictionary,
    capacity: Option<usize>,
) -> Result<Analysis, TextError> {
    let mut analysis = Analysis::default();
    // Maps a keyword to its position in `analysis.keywords`.
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for line in source.lines() {
        let line = normalize_line(&line?);
        analysis.stats.line_count += 1;

        for token in tokenize(&line) {
            analysis.stats.word_count += 1;

            if dictionary.contains(token) {
                continue;
            }

            if let Some(&at) = index.get(token) {
                analysis.keywords[at].count += 1;
            } else if capacity.is_none_or(|cap| analysis.keywords.len() < cap) {
                index.insert(token.to_string(), analysis.keywords.len());
                analysis.keywords.push(Keyword {
                    word: token.to_string(),
                    count: 1,
                });
                analysis.stats.keyword_count += 1;
            } else if !analysis.truncated {
                warn!(
                    capacity = capacity.unwrap_or(0),
                    dropped = token,
                    "keyword capacity exhausted, further distinct keywords dropped"
                );
                analysis.truncated = true;
            }
        }
    }

    Ok(analysis)
}

/// Analyzes a text file. See [`analyze`].
///
/// # Errors
///
/// [`TextError::InputUnavailable`] if the file cannot be opened or read.
pub fn analyze_path<P: AsRef<Path>>(
    path: P,
    dictionary: &Dictionary,
    capacity: Option<usize>,
) -> Result<Analysis, TextError> {
    let file = File::open(path)?;
    analyze(BufReader::new(file), dictionary, capacity)
}
