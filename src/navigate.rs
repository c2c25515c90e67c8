//! Navigation — turning a confirmed match into host editor directives.
//!
//! When the user confirms a row, the picker session is torn down and the
//! confirmed row survives as an owned [`Selection`]. [`navigate`] resolves
//! it against the live document set and emits exactly two ordered
//! directives for the host: switch to the document (with the requested
//! open strategy), then move the cursor to the matched line. The host must
//! execute them in order with nothing interleaved, so the jump is atomic
//! from the user's point of view.
//!
//! The teardown-before-navigation precondition is encoded in ownership:
//! a `Selection` only exists once the session has been consumed (see
//! [`GrepSession::finish`](crate::session::GrepSession::finish)).

use std::error::Error;
use std::fmt;

use crate::scan::MatchRecord;
use crate::source::{DocumentId, DocumentSource};

// ---------------------------------------------------------------------------
// OpenMode
// ---------------------------------------------------------------------------

/// How the host should open the jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Reuse the window that was active when the session started.
    CurrentTab,
    /// Open a new tab page.
    NewTab,
    /// Open a horizontal split.
    NewSplit,
    /// Open a vertical split.
    NewVsplit,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The confirmed match, copied out of the scan results before they are
/// discarded. Owns its data — it outlives the session, the entries, and
/// the records it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The document to jump to.
    pub document: DocumentId,
    /// 1-indexed target line.
    pub line_number: usize,
}

impl From<&MatchRecord<'_>> for Selection {
    fn from(record: &MatchRecord<'_>) -> Self {
        Self {
            document: record.entry.document,
            line_number: record.line_number,
        }
    }
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// One instruction for the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Make `document` current, using the given open strategy.
    Switch {
        document: DocumentId,
        mode: OpenMode,
    },
    /// Move the cursor to the 1-indexed `line` of the now-current document.
    MoveCursor { line: usize },
}

// ---------------------------------------------------------------------------
// NavigateError
// ---------------------------------------------------------------------------

/// Navigation failed; no directives were issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateError {
    /// The selected document was closed between scan and confirm. Shown to
    /// the user — jumping to a vanished target must not fail silently.
    StaleDocument(DocumentId),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleDocument(id) => {
                write!(f, "target no longer available: document {id} was closed")
            }
        }
    }
}

impl Error for NavigateError {}

// ---------------------------------------------------------------------------
// Navigate
// ---------------------------------------------------------------------------

/// Resolve a selection to the two-directive jump sequence.
///
/// # Errors
///
/// [`NavigateError::StaleDocument`] when the selection's document is no
/// longer open. No directives are issued in that case.
pub fn navigate(
    selection: Selection,
    mode: OpenMode,
    source: &impl DocumentSource,
) -> Result<[Directive; 2], NavigateError> {
    if !source.contains(selection.document) {
        return Err(NavigateError::StaleDocument(selection.document));
    }
    Ok([
        Directive::Switch {
            document: selection.document,
            mode,
        },
        Directive::MoveCursor {
            line: selection.line_number,
        },
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
