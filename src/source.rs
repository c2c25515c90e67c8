//! Document source — the read-only window onto the host's open documents.
//!
//! The grep engine never creates, mutates, or destroys documents. Everything
//! it knows about them comes through the [`DocumentSource`] trait: which
//! documents are open (in open order), their optional file paths, and their
//! line content. The host editor implements this trait over its live buffer
//! set; tests (and hosts without their own store) use [`MemorySource`], an
//! in-memory implementation backed by [`ropey::Rope`].
//!
//! # Staleness
//!
//! Every per-document lookup returns `Option`: a document the host has since
//! closed answers `None` everywhere and `contains` turns false. That signal
//! is how the navigator detects a stale selection (see
//! [`navigate`](crate::navigate::navigate)).
//!
//! # Line indexing
//!
//! Lines are **1-indexed**, matching how matches are displayed
//! (`name:12:...`) and how hosts address cursor lines. Line content excludes
//! the trailing line ending.

use ropey::Rope;

/// Opaque handle to a host document. Monotonically increasing, never reused
/// within a session.
pub type DocumentId = usize;

// ---------------------------------------------------------------------------
// DocumentSource
// ---------------------------------------------------------------------------

/// Read-only access to the host's open documents.
///
/// All methods are queries; implementations must not mutate document state
/// on behalf of the engine. A scan may call `line` many times between two
/// `documents` calls — implementations should make line access cheap.
pub trait DocumentSource {
    /// Ids of all open documents, in the order the host opened them.
    fn documents(&self) -> Vec<DocumentId>;

    /// Whether `id` still refers to an open document.
    fn contains(&self, id: DocumentId) -> bool;

    /// The document's path as the host names it (possibly a remote path
    /// like `scp://host/file`). `None` for unsaved buffers and for closed
    /// documents.
    fn path(&self, id: DocumentId) -> Option<String>;

    /// Number of lines in the document. `None` if it has been closed.
    fn line_count(&self, id: DocumentId) -> Option<usize>;

    /// Content of the 1-indexed line `line`, without its line ending.
    /// `None` if the line is out of range or the document has been closed.
    fn line(&self, id: DocumentId, line: usize) -> Option<String>;
}

// ---------------------------------------------------------------------------
// MemorySource
// ---------------------------------------------------------------------------

/// An in-memory [`DocumentSource`] backed by ropes.
///
/// Used by tests and by embedders that don't have a document store of their
/// own. Documents keep their id after `close` so stale lookups behave like
/// a real host's: the id is known but resolves to nothing.
#[derive(Debug, Default)]
pub struct MemorySource {
    docs: Vec<MemoryDocument>,
}

#[derive(Debug)]
struct MemoryDocument {
    path: Option<String>,
    rope: Rope,
    open: bool,
}

impl MemorySource {
    /// Create an empty source with no open documents.
    #[must_use]
    pub const fn new() -> Self {
        Self { docs: Vec::new() }
    }

    /// Open a document with the given path (`None` for an unsaved buffer)
    /// and content. Returns its id.
    pub fn open(&mut self, path: Option<&str>, text: &str) -> DocumentId {
        let id = self.docs.len();
        self.docs.push(MemoryDocument {
            path: path.map(str::to_string),
            rope: Rope::from_str(text),
            open: true,
        });
        id
    }

    /// Close a document. Its id stays known but all lookups on it now
    /// answer `None`.
    pub fn close(&mut self, id: DocumentId) {
        if let Some(doc) = self.docs.get_mut(id) {
            doc.open = false;
        }
    }

    fn doc(&self, id: DocumentId) -> Option<&MemoryDocument> {
        self.docs.get(id).filter(|d| d.open)
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> Vec<DocumentId> {
        (0..self.docs.len())
            .filter(|&id| self.docs[id].open)
            .collect()
    }

    fn contains(&self, id: DocumentId) -> bool {
        self.doc(id).is_some()
    }

    fn path(&self, id: DocumentId) -> Option<String> {
        self.doc(id)?.path.clone()
    }

    fn line_count(&self, id: DocumentId) -> Option<usize> {
        let rope = &self.doc(id)?.rope;
        let count = rope.len_lines();
        // A rope ending in a line break reports a trailing empty line.
        // Editors don't count it, and neither do we.
        if count > 1 && rope.line(count - 1).len_chars() == 0 {
            Some(count - 1)
        } else {
            Some(count)
        }
    }

    fn line(&self, id: DocumentId, line: usize) -> Option<String> {
        if line == 0 || line > self.line_count(id)? {
            return None;
        }
        let rope = &self.doc(id)?.rope;
        let s: String = rope.line(line - 1).chars().collect();
        Some(s.trim_end_matches(['\n', '\r']).to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
