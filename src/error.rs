//! Error types for the text-analysis half of the crate.
//!
//! The sorting APIs have no error type at all: degenerate arguments (empty
//! or single-element ranges) are defined as no-ops. Keyword-capacity
//! overflow during analysis is likewise non-fatal; it is reported through
//! [`Analysis::truncated`](crate::analyze::Analysis) and a `tracing`
//! warning, never as an `Err`.

use thiserror::Error;

/// Errors surfaced by dictionary building and text analysis.
#[derive(Debug, Error)]
pub enum TextError {
    /// The text source could not be opened or read. Fatal; analysis state
    /// accumulated before the failure is discarded.
    #[error("text source unavailable: {0}")]
    InputUnavailable(#[from] std::io::Error),
}
