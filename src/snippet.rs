//! Context snippets — bounded-width excerpts around a matched substring.
//!
//! A match row shows a slice of the matched line, not the whole thing:
//! the matched text plus up to [`CONTEXT_MARGIN`] characters on each side,
//! with `"..."` marking whichever ends were cut off. All arithmetic is in
//! chars, so multi-byte text never gets sliced mid-codepoint.

use std::error::Error;
use std::fmt;

/// Characters of context kept on each side of the matched text.
pub const CONTEXT_MARGIN: usize = 8;

// ---------------------------------------------------------------------------
// SnippetError
// ---------------------------------------------------------------------------

/// The matched text was not found in the line it supposedly came from.
///
/// This is an internal-invariant violation: the engine only ever asks for
/// a snippet of text it just extracted from that same line. Seeing this
/// error means a bug in the engine, not bad user input — it aborts the
/// scan rather than producing a wrong excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetError {
    /// The matched text that could not be located.
    pub matched: String,
}

impl fmt::Display for SnippetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matched text {:?} not present in its line", self.matched)
    }
}

impl Error for SnippetError {}

// ---------------------------------------------------------------------------
// Snippet construction
// ---------------------------------------------------------------------------

/// Build the display excerpt for `matched` within `line`.
///
/// Locates the first occurrence of `matched`, keeps [`CONTEXT_MARGIN`]
/// chars of surrounding context on each side, and marks truncated ends
/// with `"..."`.
///
/// # Errors
///
/// [`SnippetError`] when `matched` does not occur in `line` — an internal
/// inconsistency between the regex engine and this builder.
pub fn surrounding_context(line: &str, matched: &str) -> Result<String, SnippetError> {
    let Some(byte_pos) = line.find(matched) else {
        return Err(SnippetError {
            matched: matched.to_string(),
        });
    };

    let pos = byte_to_char(line, byte_pos);
    let line_chars = line.chars().count();
    let matched_chars = matched.chars().count();

    let start = pos.saturating_sub(CONTEXT_MARGIN);
    let end = (pos + matched_chars + CONTEXT_MARGIN).min(line_chars);

    let excerpt: String = line.chars().skip(start).take(end - start).collect();
    let mut out = String::with_capacity(excerpt.len() + 6);
    if start > 0 {
        out.push_str("...");
    }
    out.push_str(&excerpt);
    if end < line_chars {
        out.push_str("...");
    }
    Ok(out)
}

/// Convert a byte offset to a char offset in a string.
fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // -- Ellipsis placement ------------------------------------------------

    #[test]
    fn short_line_kept_whole() {
        assert_eq!(surrounding_context("foo bar", "bar").unwrap(), "foo bar");
    }

    #[test]
    fn match_at_start_truncates_tail_only() {
        let line = "bar and then a long tail of text";
        assert_eq!(
            surrounding_context(line, "bar").unwrap(),
            "bar and the..."
        );
    }

    #[test]
    fn match_at_end_truncates_head_only() {
        let line = "a long head of text and then bar";
        assert_eq!(
            surrounding_context(line, "bar").unwrap(),
            "...nd then bar"
        );
    }

    #[test]
    fn interior_match_truncates_both() {
        let line = "aaaaaaaaaaaaaaaa bar bbbbbbbbbbbbbbbb";
        assert_eq!(
            surrounding_context(line, "bar").unwrap(),
            "...aaaaaaa bar bbbbbbb..."
        );
    }

    #[test]
    fn exact_margin_fits_without_ellipsis() {
        // Exactly 8 chars on each side: nothing is cut.
        let line = "12345678bar87654321";
        assert_eq!(surrounding_context(line, "bar").unwrap(), line);
    }

    #[test]
    fn one_past_margin_gets_ellipsis() {
        let line = "x12345678bar87654321x";
        assert_eq!(
            surrounding_context(line, "bar").unwrap(),
            "...12345678bar87654321..."
        );
    }

    // -- First occurrence --------------------------------------------------

    #[test]
    fn uses_first_occurrence() {
        // Both occurrences present; context must center on the first.
        let line = "bar xxxxxxxxxxxx bar";
        assert_eq!(
            surrounding_context(line, "bar").unwrap(),
            "bar xxxxxxx..."
        );
    }

    // -- Containment property ----------------------------------------------

    #[test]
    fn output_always_contains_match() {
        let lines = [
            "bar",
            "prefix bar",
            "bar suffix",
            "long long long prefix bar long long long suffix",
        ];
        for line in lines {
            let snippet = surrounding_context(line, "bar").unwrap();
            assert!(snippet.contains("bar"), "snippet {snippet:?} lost the match");
        }
    }

    // -- Unicode -----------------------------------------------------------

    #[test]
    fn unicode_margins_count_chars() {
        // 10 multi-byte chars on each side: margin cuts at 8 chars, not bytes.
        let line = "ああああああああああbarいいいいいいいいいい";
        assert_eq!(
            surrounding_context(line, "bar").unwrap(),
            "...ああああああああbarいいいいいいいい..."
        );
    }

    #[test]
    fn unicode_match_text() {
        let line = "prefix 日本語 suffix";
        assert_eq!(
            surrounding_context(line, "日本語").unwrap(),
            "prefix 日本語 suffix"
        );
    }

    // -- Precondition violation --------------------------------------------

    #[test]
    fn absent_match_is_an_error() {
        let err = surrounding_context("hello", "xyz").unwrap_err();
        assert_eq!(err.matched, "xyz");
        assert!(err.to_string().contains("xyz"));
    }
}
