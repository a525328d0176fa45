//! Shared line tokenizer.
//!
//! Dictionary building and analysis must agree exactly on token boundaries,
//! or a word recorded by one will silently fail to match in the other. Both
//! therefore go through this one tokenizer: trim the line, lowercase it,
//! split on the delimiter set, keep non-empty segments.

/// Characters that end a token: space, tab, comma, period, and the line
/// terminators a reader may leave behind.
pub const DELIMITERS: [char; 6] = [' ', '\t', ',', '.', '\r', '\n'];

/// Maximum line length honored by the reading layer, in characters.
/// Longer lines are clipped before tokenization.
pub const MAX_LINE_LEN: usize = 1000;

/// Splits an already-normalized (trimmed, lowercased) line into tokens.
///
/// Returns the non-empty segments between [`DELIMITERS`]. Consecutive
/// delimiters produce no empty tokens.
///
/// # Examples
///
/// ```
/// use lexsift::tokenize::tokenize;
///
/// let tokens: Vec<&str> = tokenize("the cat sat. the dog ran.").collect();
/// assert_eq!(tokens, vec!["the", "cat", "sat", "the", "dog", "ran"]);
/// ```
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITERS).filter(|token| !token.is_empty())
}

/// Normalizes one raw input line: clip to [`MAX_LINE_LEN`] characters,
/// trim surrounding whitespace, lowercase.
pub(crate) fn normalize_line(raw: &str) -> String {
    clip_line(raw).trim().to_lowercase()
}

/// Clips a line to [`MAX_LINE_LEN`] characters, respecting char boundaries.
fn clip_line(line: &str) -> &str {
    match line.char_indices().nth(MAX_LINE_LEN) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_delimiters() {
        let tokens: Vec<&str> = tokenize("one,two.three\tfour  five").collect();
        assert_eq!(tokens, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_tokenize_empty_and_delimiter_only() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t..,, ").count(), 0);
    }

    #[test]
    fn test_tokenize_no_trailing_delimiter() {
        let tokens: Vec<&str> = tokenize("last word").collect();
        assert_eq!(tokens, vec!["last", "word"]);
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_line("  The CAT  "), "the cat");
    }

    #[test]
    fn test_clip_long_line() {
        let long = "a".repeat(MAX_LINE_LEN + 50);
        let normalized = normalize_line(&long);
        assert_eq!(normalized.len(), MAX_LINE_LEN);
    }
}
