//! Grep session — the lifecycle of one picker invocation.
//!
//! A [`GrepSession`] is created when the picker opens and consumed when it
//! closes. On creation it snapshots the open documents into entries with
//! short names; after every query edit the embedder calls
//! [`refresh`](GrepSession::refresh) to rerun the scan; the presentation
//! layer renders [`rows`](GrepSession::rows) and emphasizes
//! [`highlights`](GrepSession::highlights) wherever they occur in those
//! rows.
//!
//! Confirming (or cancelling) goes through
//! [`finish`](GrepSession::finish), which consumes the session — the
//! picker must be gone before navigation starts, and taking `self` by
//! value makes that impossible to get wrong. The returned [`Selection`]
//! is the only thing that outlives the session.
//!
//! Everything is synchronous: one keystroke, one blocking full rescan.
//! The entry snapshot is read-only between edits, so there is no shared
//! mutable state to guard.

use crate::entry::{entries_from, Entry};
use crate::navigate::Selection;
use crate::query::QueryState;
use crate::scan::{scan, ScanError};
use crate::source::{DocumentId, DocumentSource};

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// One cached row: the display text plus what selecting it means.
///
/// Rows are owned copies of the scan's borrowed records, cached so the
/// presentation layer can render between edits without re-borrowing the
/// entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    document: DocumentId,
    line_number: usize,
    display_text: String,
}

// ---------------------------------------------------------------------------
// GrepSession
// ---------------------------------------------------------------------------

/// One invocation of the buffer-grep picker.
#[derive(Debug, Default)]
pub struct GrepSession {
    /// Session-start snapshot of the open documents. Never recomputed.
    entries: Vec<Entry>,
    /// The query being typed.
    query: QueryState,
    /// Rows from the most recent scan.
    rows: Vec<Row>,
    /// Highlight substrings from the most recent scan, first-seen order.
    highlights: Vec<String>,
}

impl GrepSession {
    /// Open a session: snapshot the source's documents, shorten names,
    /// and populate the unfiltered row list.
    #[must_use]
    pub fn start(source: &impl DocumentSource) -> Self {
        let mut session = Self {
            entries: entries_from(source),
            query: QueryState::new(),
            rows: Vec::new(),
            highlights: Vec::new(),
        };
        // The empty-query scan cannot fail: no regex is compiled and no
        // snippet is built.
        let _ = session.refresh(source);
        session
    }

    // -- Query editing ------------------------------------------------------

    /// The current query text.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.input()
    }

    /// Mutable access to the query line. Call
    /// [`refresh`](Self::refresh) after editing.
    #[inline]
    pub fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    // -- Scanning -----------------------------------------------------------

    /// Rerun the scan with the current query and cache the results.
    ///
    /// # Errors
    ///
    /// [`ScanError`] on internal-invariant violations only; malformed
    /// queries succeed with an empty row list.
    pub fn refresh(&mut self, source: &impl DocumentSource) -> Result<(), ScanError> {
        let out = scan(&self.entries, source, self.query.input())?;
        self.highlights = out.highlights;
        self.rows = out
            .matches
            .iter()
            .map(|record| Row {
                document: record.entry.document,
                line_number: record.line_number,
                display_text: record.display_text.clone(),
            })
            .collect();
        Ok(())
    }

    // -- Presentation queries -----------------------------------------------

    /// Display strings for the selectable rows, in scan order.
    #[must_use]
    pub fn rows(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.display_text.as_str()).collect()
    }

    /// Number of selectable rows.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Substrings to emphasize wherever they occur in the rendered rows.
    #[inline]
    #[must_use]
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    /// The session-start entry snapshot.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    // -- Confirm / cancel ---------------------------------------------------

    /// Close the picker, keeping the selection at `index` (if any).
    ///
    /// Consumes the session — every row, entry, and highlight is dropped
    /// here; only the returned [`Selection`] survives. An out-of-range
    /// index is a cancel: the session is still consumed and `None` comes
    /// back.
    #[must_use]
    pub fn finish(self, index: usize) -> Option<Selection> {
        self.rows.get(index).map(|row| Selection {
            document: row.document,
            line_number: row.line_number,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
