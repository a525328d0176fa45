//! # Lexsift
//!
//! `lexsift` bundles two small, independent utility groups:
//!
//! - **Generic sort**: in-place, comparator-driven sorting of slices, plus an
//!   index-based variant that orders references to elements without ever
//!   moving the caller's data.
//! - **Word/dictionary analyzer**: line-oriented tokenization of text,
//!   common-word filtering against a [`Dictionary`], and per-keyword
//!   frequency counting with aggregate statistics.
//!
//! The two halves meet in the [`record`] module, which imports `name, score`
//! records, computes score statistics, and writes a grade report ordered by
//! the index sort.
//!
//! ## Sorting
//!
//! ```rust
//! use lexsift::{sort_by, sort_indices};
//!
//! let mut data = vec![3, 1, 2];
//! sort_by(&mut data, |a, b| a.cmp(b));
//! assert_eq!(data, vec![1, 2, 3]);
//!
//! // Index-based: `names` itself is untouched.
//! let names = vec!["banana", "apple", "cherry"];
//! let order = sort_indices(&names, |a, b| a.cmp(b));
//! assert_eq!(order, vec![1, 0, 2]);
//! ```
//!
//! The quicksort behind [`sort_by`] uses the first element of each partition
//! as the pivot and recurses without a depth limit; see the [`algo`] module
//! docs for the degenerate-input trade-off.
//!
//! ## Text analysis
//!
//! ```rust
//! use lexsift::{Dictionary, analyze};
//!
//! let dict = Dictionary::from_words(["the", "a"]);
//! let analysis = analyze("The cat sat.\n".as_bytes(), &dict, None).unwrap();
//!
//! assert_eq!(analysis.stats.word_count, 3);
//! assert_eq!(analysis.stats.keyword_count, 2); // cat, sat
//! ```
//!
//! Dictionary building and analysis share one tokenizer ([`tokenize`]), so
//! token boundaries can never diverge between the two.

pub mod algo;
pub mod analyze;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod record;
pub mod tokenize;

pub use algo::{quick_sort, selection_sort, sort_by, sort_indices};
pub use analyze::{Analysis, Keyword, WordStats, analyze, analyze_path};
pub use core::ElementAccessor;
pub use dictionary::Dictionary;
pub use error::TextError;

pub mod prelude {
    pub use crate::algo::{quick_sort, selection_sort, sort_by, sort_indices};
    pub use crate::analyze::{Analysis, Keyword, WordStats, analyze, analyze_path};
    pub use crate::core::{ElementAccessor, default_cmp};
    pub use crate::dictionary::Dictionary;
    pub use crate::error::TextError;
    pub use crate::record::{
        Record, RecordStats, import_records, letter_grade, record_stats, write_report,
    };
    pub use crate::tokenize::tokenize;
}
