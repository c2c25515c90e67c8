//! Query input — the editable search-expression line.
//!
//! Holds the raw query text the user is typing, with a char-offset cursor
//! so editing is Unicode-correct. Each edit is followed by a full rescan
//! (see [`scan`](crate::scan::scan)); this type only owns the text.

/// The query line being typed.
///
/// Cursor positions are char offsets, never bytes — position 1 of `"日本"`
/// sits between the two characters, not inside one.
#[derive(Debug, Default)]
pub struct QueryState {
    /// The query text being typed.
    input: String,
    /// Cursor position within the input (char offset).
    input_cursor: usize,
}

impl QueryState {
    /// Create an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
            input_cursor: 0,
        }
    }

    /// The current query text.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The cursor position within the input (char offset).
    #[inline]
    #[must_use]
    pub const fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Whether the query is empty (the "no filter active" state).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.char_to_byte(self.input_cursor);
        self.input.insert(byte_idx, ch);
        self.input_cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    /// Returns `false` if the cursor is at position 0.
    pub fn backspace(&mut self) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        self.input_cursor -= 1;
        let byte_idx = self.char_to_byte(self.input_cursor);
        self.input.remove(byte_idx);
        true
    }

    /// Replace the whole query and put the cursor at its end.
    pub fn set(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.input_cursor = self.input.chars().count();
    }

    /// Clear the query.
    pub fn clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }

    /// Convert a char offset to a byte offset in the input string.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(byte_idx, _)| byte_idx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
