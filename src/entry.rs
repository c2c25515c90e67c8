//! Entries — the per-document rows of a grep session, with short names.
//!
//! At session start, every open document becomes an [`Entry`]. Its display
//! name is shortened so the picker shows the minimum needed to tell
//! documents apart: usually just the basename, with leading path segments
//! added back only when several open documents share a basename.
//!
//! Names are computed once per session and never recomputed mid-session,
//! even if the host's document set changes underneath — the session works
//! against its start-of-session snapshot.
//!
//! # Shortening rules
//!
//! 1. An unsaved buffer is named [`UNNAMED`] (`"[No Name]"`).
//! 2. A remote path (`scp://...`) is kept verbatim — collapsing paths
//!    across hosts would make distinct files look identical.
//! 3. Unique basenames show as the bare basename.
//! 4. Shared basenames drop the longest common path prefix, truncated back
//!    to a `/` boundary so a path segment is never split.
//! 5. Duplicate buffers of the same file get no prefix removed at all —
//!    the full path is shown.

use std::collections::HashMap;

use crate::source::{DocumentId, DocumentSource};

/// Display name for a buffer with no file path.
pub const UNNAMED: &str = "[No Name]";

/// Paths with this prefix are never shortened.
const REMOTE_PREFIX: &str = "scp://";

/// Path separator assumed in host-supplied paths.
const SEPARATOR: char = '/';

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One open document in the session-start snapshot.
///
/// Holds the host's full path (if any), the computed short display name,
/// and the id of the document it describes. The entry never owns the
/// document — content is read back through a
/// [`DocumentSource`] at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path as the host names the document. `None` for unsaved buffers.
    pub full_name: Option<String>,
    /// Unique display name, set once by [`shorten_names`]. Stable for the
    /// whole session.
    pub short_name: String,
    /// Handle to the document this entry describes.
    pub document: DocumentId,
}

/// Snapshot the source's open documents into entries, in open order, with
/// short names already computed.
#[must_use]
pub fn entries_from(source: &impl DocumentSource) -> Vec<Entry> {
    let mut entries: Vec<Entry> = source
        .documents()
        .into_iter()
        .map(|id| Entry {
            full_name: source.path(id),
            short_name: String::new(),
            document: id,
        })
        .collect();
    shorten_names(&mut entries);
    entries
}

// ---------------------------------------------------------------------------
// Name shortening
// ---------------------------------------------------------------------------

/// Compute a unique short display name for every entry, in place.
///
/// Called exactly once per session, before any scan. See the module docs
/// for the rules.
pub fn shorten_names(entries: &mut [Entry]) {
    // Group shortenable entries by basename.
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        if let Some(full) = &entry.full_name {
            if !full.starts_with(REMOTE_PREFIX) {
                groups.entry(basename(full)).or_default().push(idx);
            }
        }
    }

    // Longest common prefix per basename shared by more than one entry.
    let mut prefixes: HashMap<usize, String> = HashMap::new();
    for indices in groups.into_values() {
        if indices.len() < 2 {
            continue;
        }
        let full_names: Vec<&str> = indices
            .iter()
            .filter_map(|&idx| entries[idx].full_name.as_deref())
            .collect();
        let prefix = common_prefix(&full_names);
        for idx in indices {
            prefixes.insert(idx, prefix.clone());
        }
    }

    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.short_name = match &entry.full_name {
            None => UNNAMED.to_string(),
            Some(full) if full.starts_with(REMOTE_PREFIX) => full.clone(),
            Some(full) => prefixes.get(&idx).map_or_else(
                || basename(full).to_string(),
                |prefix| full.strip_prefix(prefix).unwrap_or(full).to_string(),
            ),
        };
    }
}

/// Final path component of `name` (the text after the last separator).
fn basename(name: &str) -> &str {
    name.rsplit(SEPARATOR).next().unwrap_or(name)
}

/// Longest common prefix of all names, truncated back so it ends exactly
/// on a separator boundary.
///
/// Compared char-by-char: at the first divergence (or length exhaustion)
/// the candidate prefix is cut there, then backed off to just past the
/// last separator at or before the cut. No separator before the cut means
/// an empty prefix. If no name ever diverges — all identical, duplicate
/// buffers of one file — the prefix is empty so the full path shows.
fn common_prefix(names: &[&str]) -> String {
    let Some(first) = names.first() else {
        return String::new();
    };
    let mut prefix: Vec<char> = first.chars().collect();
    let mut diverged = false;

    for name in names {
        let chars: Vec<char> = name.chars().collect();
        for i in 0..prefix.len() {
            if chars.len() <= i || prefix[i] != chars[i] {
                diverged = true;
                prefix.truncate(i);
                // Back off to a separator boundary, keeping the separator.
                while prefix.last().is_some_and(|&ch| ch != SEPARATOR) {
                    prefix.pop();
                }
                break;
            }
        }
    }

    if diverged {
        prefix.into_iter().collect()
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn entry(path: Option<&str>) -> Entry {
        Entry {
            full_name: path.map(str::to_string),
            short_name: String::new(),
            document: 0,
        }
    }

    fn short_names(paths: &[Option<&str>]) -> Vec<String> {
        let mut entries: Vec<Entry> = paths.iter().map(|p| entry(*p)).collect();
        shorten_names(&mut entries);
        entries.into_iter().map(|e| e.short_name).collect()
    }

    // -- Basics ------------------------------------------------------------

    #[test]
    fn unsaved_buffer_is_no_name() {
        assert_eq!(short_names(&[None]), vec![UNNAMED]);
    }

    #[test]
    fn unique_basename_shows_bare() {
        assert_eq!(
            short_names(&[Some("/home/u/project/main.rs")]),
            vec!["main.rs"]
        );
    }

    #[test]
    fn distinct_basenames_all_bare() {
        assert_eq!(
            short_names(&[Some("/a/one.rs"), Some("/a/two.rs"), Some("/b/three.rs")]),
            vec!["one.rs", "two.rs", "three.rs"]
        );
    }

    #[test]
    fn remote_path_kept_verbatim() {
        assert_eq!(
            short_names(&[Some("scp://host/lib/util.py")]),
            vec!["scp://host/lib/util.py"]
        );
    }

    // -- Shared basenames --------------------------------------------------

    #[test]
    fn shared_basename_trims_common_prefix() {
        // Prefix trimmed at the last common separator.
        assert_eq!(
            short_names(&[Some("/a/lib/util.py"), Some("/b/lib/util.py")]),
            vec!["a/lib/util.py", "b/lib/util.py"]
        );
    }

    #[test]
    fn shared_basename_deep_prefix() {
        assert_eq!(
            short_names(&[
                Some("/home/u/project/src/mod.rs"),
                Some("/home/u/project/tests/mod.rs"),
            ]),
            vec!["src/mod.rs", "tests/mod.rs"]
        );
    }

    #[test]
    fn shared_basename_mixed_with_unique() {
        assert_eq!(
            short_names(&[
                Some("/x/lib/util.py"),
                Some("/y/lib/util.py"),
                Some("/z/other.py"),
            ]),
            vec!["x/lib/util.py", "y/lib/util.py", "other.py"]
        );
    }

    #[test]
    fn duplicate_buffers_show_full_path() {
        // Same file open twice: no divergence, so no prefix is removed.
        assert_eq!(
            short_names(&[Some("/a/lib/util.py"), Some("/a/lib/util.py")]),
            vec!["/a/lib/util.py", "/a/lib/util.py"]
        );
    }

    #[test]
    fn remote_not_grouped_with_local() {
        // The remote twin keeps its full path; the local one is alone in
        // its group and shows the bare basename.
        assert_eq!(
            short_names(&[Some("scp://host/lib/util.py"), Some("/a/lib/util.py")]),
            vec!["scp://host/lib/util.py", "util.py"]
        );
    }

    // -- Pairwise distinctness --------------------------------------------

    #[test]
    fn names_pairwise_distinct() {
        let names = short_names(&[
            Some("/home/a/src/main.rs"),
            Some("/home/b/src/main.rs"),
            Some("/home/c/lib.rs"),
            None,
        ]);
        for (i, a) in names.iter().enumerate() {
            for b in names.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // -- common_prefix -----------------------------------------------------

    #[test]
    fn prefix_ends_on_separator() {
        // Divergence mid-segment ("liba" vs "libb") must back off to /x/.
        assert_eq!(common_prefix(&["/x/liba/f.rs", "/x/libb/f.rs"]), "/x/");
    }

    #[test]
    fn prefix_without_separator_is_empty() {
        assert_eq!(common_prefix(&["abc/f.rs", "abd/f.rs"]), "");
    }

    #[test]
    fn prefix_of_identical_paths_is_empty() {
        assert_eq!(common_prefix(&["/a/f.rs", "/a/f.rs"]), "");
    }

    #[test]
    fn prefix_shorter_name_diverges_by_exhaustion() {
        assert_eq!(common_prefix(&["/a/b/f.rs", "/a/b"]), "/a/");
    }

    #[test]
    fn prefix_unicode_segments() {
        assert_eq!(
            common_prefix(&["/ホーム/a/f.rs", "/ホーム/b/f.rs"]),
            "/ホーム/"
        );
    }

    // -- entries_from ------------------------------------------------------

    #[test]
    fn entries_snapshot_in_open_order() {
        let mut src = MemorySource::new();
        let a = src.open(Some("/p/a.rs"), "");
        let b = src.open(None, "");
        let entries = entries_from(&src);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].document, a);
        assert_eq!(entries[0].short_name, "a.rs");
        assert_eq!(entries[1].document, b);
        assert_eq!(entries[1].short_name, UNNAMED);
    }
}
