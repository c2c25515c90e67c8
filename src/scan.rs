//! Match engine — one full scan of every open document per query edit.
//!
//! Each keystroke in the query triggers [`scan`]: compile the query as a
//! case-insensitive regex, walk every line of every entry's document, and
//! collect a match row per matching line plus the set of distinct matched
//! substrings (for the presentation layer to highlight).
//!
//! # Contracts
//!
//! - **Empty query** is the "no filter active" state: every entry comes
//!   back as a zero-context row, no highlights.
//! - **Malformed query** (an unbalanced bracket mid-typing) is not an
//!   error: the scan succeeds with no rows until the expression becomes
//!   valid again.
//! - **Ordering**: rows are grouped by entry in open order and sorted by
//!   ascending line number within an entry. Consumers may rely on this.
//! - **First match per line**: a line contributes at most one row, for the
//!   leftmost match.
//!
//! The scan is synchronous and read-only: it never mutates entries or
//! documents, and identical inputs produce identical output.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use regex::RegexBuilder;

use crate::entry::Entry;
use crate::snippet::{surrounding_context, SnippetError};
use crate::source::DocumentSource;

// ---------------------------------------------------------------------------
// MatchRecord
// ---------------------------------------------------------------------------

/// One selectable row produced by a scan.
///
/// Borrows its [`Entry`] — entries outlive every record of the scan that
/// produced them, and the whole record set is discarded on the next query
/// edit. A record the user confirms is copied out into an owned
/// [`Selection`](crate::navigate::Selection) before the discard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<'a> {
    /// The entry this match came from.
    pub entry: &'a Entry,
    /// 1-indexed line of the match within the document.
    pub line_number: usize,
    /// The row text: `"{short_name}:{line}:{snippet}"`, or just the short
    /// name for the unfiltered (empty-query) state.
    pub display_text: String,
}

/// Everything one scan produces: the rows and the highlight strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanOutput<'a> {
    /// Match rows, grouped by entry in open order, ascending line number
    /// within an entry.
    pub matches: Vec<MatchRecord<'a>>,
    /// Distinct matched substrings in first-seen order. Case-sensitive
    /// distinctness: a case-insensitive query for `foo` that hits both
    /// `Foo` and `foo` yields both strings.
    pub highlights: Vec<String>,
}

// ---------------------------------------------------------------------------
// ScanError
// ---------------------------------------------------------------------------

/// A scan aborted on an internal-invariant violation.
///
/// Not produced for malformed queries — those quietly yield no matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The snippet builder rejected text the regex engine claimed to have
    /// matched. Indicates a bug in the engine, never bad user input.
    Snippet(SnippetError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snippet(err) => write!(f, "internal scan error: {err}"),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snippet(err) => Some(err),
        }
    }
}

impl From<SnippetError> for ScanError {
    fn from(err: SnippetError) -> Self {
        Self::Snippet(err)
    }
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Run `query` against every line of every entry's document.
///
/// See the module docs for the ordering, empty-query, and malformed-query
/// contracts. A document the source no longer yields lines for (closed
/// since the snapshot) simply contributes no rows.
///
/// # Errors
///
/// [`ScanError`] only on internal-invariant violations; a malformed query
/// is `Ok` with empty output.
pub fn scan<'a>(
    entries: &'a [Entry],
    source: &impl DocumentSource,
    query: &str,
) -> Result<ScanOutput<'a>, ScanError> {
    if query.is_empty() {
        // No filter active: the plain document list.
        return Ok(ScanOutput {
            matches: entries
                .iter()
                .map(|entry| MatchRecord {
                    entry,
                    line_number: 1,
                    display_text: entry.short_name.clone(),
                })
                .collect(),
            highlights: Vec::new(),
        });
    }

    let Ok(regex) = RegexBuilder::new(query).case_insensitive(true).build() else {
        // Transient invalid input while typing — show nothing, fail nothing.
        return Ok(ScanOutput::default());
    };

    let mut matches = Vec::new();
    let mut highlights = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in entries {
        let Some(line_count) = source.line_count(entry.document) else {
            continue;
        };
        for line_number in 1..=line_count {
            let Some(line) = source.line(entry.document, line_number) else {
                break;
            };
            let Some(found) = regex.find(&line) else {
                continue;
            };

            let matched = found.as_str();
            let snippet = surrounding_context(&line, matched)?;
            matches.push(MatchRecord {
                entry,
                line_number,
                display_text: format!("{}:{line_number}:{snippet}", entry.short_name),
            });

            if seen.insert(matched.to_string()) {
                highlights.push(matched.to_string());
            }
        }
    }

    Ok(ScanOutput { matches, highlights })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
