//! # bufgrep — live grep across open buffers
//!
//! The match-and-present core of an editor-embedded "grep the open
//! buffers" picker. The user types an incremental regular expression; the
//! engine scans every line of every open document and produces a live,
//! ordered list of match rows with context snippets, plus the set of
//! matched substrings for the presentation layer to highlight. Confirming
//! a row yields the two-directive jump sequence for the host editor.
//!
//! Module map, leaves first:
//!
//! - **[`source`]** — `DocumentSource`, the injected read-only view of the
//!   host's open documents, and a rope-backed in-memory implementation
//! - **[`entry`]** — per-document entries with unique shortened names
//! - **[`snippet`]** — bounded-width context excerpts around a match
//! - **[`scan`]** — the per-keystroke full scan: rows + highlight set
//! - **[`query`]** — the editable query input line
//! - **[`navigate`]** — selection resolution and host directives
//! - **[`session`]** — `GrepSession`, the lifecycle tying it together
//!
//! Everything is single-threaded and synchronous: one query edit, one
//! blocking rescan. Picker rendering, keystroke decoding, and window
//! management belong to the embedder.

pub mod entry;
pub mod navigate;
pub mod query;
pub mod scan;
pub mod session;
pub mod snippet;
pub mod source;
