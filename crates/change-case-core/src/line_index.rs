//! Logical line index
//!
//! Provides line/column access using a Rope, supporting O(log N) line lookup and editing.
//! Lines end at `"\r\n"`, `'\n'` or a lone `'\r'`; terminators are stored as they are.

use crate::position::Position;
use ropey::Rope;

/// Logical line index - implemented using Rope data structure
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Build line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a line in characters, excluding its terminator.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        // Rope's line() includes the line break.
        let last = len.checked_sub(1).map(|i| slice.char(i));
        let before_last = len.checked_sub(2).map(|i| slice.char(i));
        let terminator = match (before_last, last) {
            (Some('\r'), Some('\n')) => 2,
            (_, Some('\n' | '\r')) => 1,
            _ => 0,
        };
        Some(len - terminator)
    }

    /// Get text of the specified line (excluding newline)
    pub fn get_line_text(&self, line: usize) -> Option<String> {
        let len = self.line_len(line)?;
        let start = self.rope.line_to_char(line);
        Some(self.rope.slice(start..start + len).to_string())
    }

    /// Character offset of a position, or `None` if the position lies outside the document.
    ///
    /// A column equal to the line length (end of line) is valid.
    pub fn position_to_char_offset(&self, pos: Position) -> Option<usize> {
        let len = self.line_len(pos.line)?;
        if pos.column > len {
            return None;
        }
        Some(self.rope.line_to_char(pos.line) + pos.column)
    }

    /// Text between two character offsets.
    pub fn slice(&self, start_char: usize, end_char: usize) -> String {
        let end_char = end_char.min(self.rope.len_chars());
        let start_char = start_char.min(end_char);
        self.rope.slice(start_char..end_char).to_string()
    }

    /// Replace the characters in `start_char..end_char` with `text`.
    pub fn replace(&mut self, start_char: usize, end_char: usize, text: &str) {
        let end_char = end_char.min(self.rope.len_chars());
        let start_char = start_char.min(end_char);
        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
        if !text.is_empty() {
            self.rope.insert(start_char, text);
        }
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}
