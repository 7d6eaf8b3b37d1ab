//! Text buffer abstraction consumed by the case transformer.
//!
//! The transformer only needs a handful of capabilities from its host: reading text in a range,
//! locating the default word at a caret, applying an atomic batch of replacements and installing
//! new selections. [`TextBuffer`] captures exactly that, and [`MemoryBuffer`] is a rope-backed
//! implementation usable without an editor.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::line_ending::LineEnding;
use crate::line_index::LineIndex;
use crate::position::{Position, Range, Selection};

/// Errors reported by a [`TextBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The buffer does not accept edits.
    #[error("buffer is read-only")]
    ReadOnly,

    /// A position lies outside the document.
    #[error("invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },

    /// Two edits in one batch cover the same text.
    #[error("overlapping edits at line {line}, column {column}")]
    OverlappingEdits {
        /// Line of the later edit's start.
        line: usize,
        /// Column of the later edit's start.
        column: usize,
    },
}

/// One replacement inside an atomic edit batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferEdit {
    /// Range to replace, in pre-edit coordinates.
    pub range: Range,
    /// Replacement text, inserted verbatim.
    pub text: String,
}

/// The host text-buffer surface used by the case transformer.
pub trait TextBuffer {
    /// Number of logical lines.
    fn line_count(&self) -> usize;

    /// Column of the end of `line`, or `None` if the line does not exist.
    fn line_end_column(&self, line: usize) -> Option<usize>;

    /// Text covered by `range`, including the line terminators inside it as stored.
    fn get_text(&self, range: Range) -> Result<String, BufferError>;

    /// The buffer's built-in notion of the word at `pos`: a maximal run of word characters
    /// (letters, digits, `_`) that contains or touches `pos`.
    fn default_word_range_at(&self, pos: Position) -> Option<Range>;

    /// The document's dominant line separator.
    fn line_ending(&self) -> LineEnding;

    /// Current selections, in the order the host reports them.
    fn selections(&self) -> Vec<Selection>;

    /// Replace the current selections.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// Apply all edits or none of them.
    ///
    /// Ranges are interpreted against the buffer as it is before the batch.
    fn apply_edits(&mut self, edits: &[BufferEdit]) -> Result<(), BufferError>;
}

static DEFAULT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word regex should compile"));

/// An in-memory [`TextBuffer`] backed by a rope.
///
/// Text is stored verbatim, so every line keeps its own terminator even in a file that mixes
/// conventions. The dominant line ending is detected once at construction.
///
/// # Example
///
/// ```rust
/// use change_case_core::{MemoryBuffer, Position, Range, TextBuffer};
///
/// let buffer = MemoryBuffer::new("let fooBar = 1;");
/// let word = buffer.default_word_range_at(Position::new(0, 6)).unwrap();
/// assert_eq!(word, Range::from_coords(0, 4, 0, 10));
/// assert_eq!(buffer.get_text(word).unwrap(), "fooBar");
/// ```
pub struct MemoryBuffer {
    index: LineIndex,
    line_ending: LineEnding,
    selections: Vec<Selection>,
    read_only: bool,
}

impl MemoryBuffer {
    /// Create a buffer from text, detecting its line ending. The caret starts at `(0, 0)`.
    pub fn new(text: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        Self {
            index: LineIndex::from_text(text),
            line_ending,
            selections: vec![Selection::cursor(Position::new(0, 0))],
            read_only: false,
        }
    }

    /// Create a buffer with the given selections already installed.
    pub fn with_selections(text: &str, selections: Vec<Selection>) -> Self {
        let mut buffer = Self::new(text);
        buffer.selections = selections;
        buffer
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.index.get_text()
    }

    /// Range covering the entire document.
    pub fn full_range(&self) -> Range {
        let last = self.index.line_count().saturating_sub(1);
        let end = self.index.line_len(last).unwrap_or(0);
        Range::from_coords(0, 0, last, end)
    }

    /// Make subsequent [`TextBuffer::apply_edits`] calls fail (or succeed again).
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn offset_of(&self, pos: Position) -> Result<usize, BufferError> {
        self.index
            .position_to_char_offset(pos)
            .ok_or(BufferError::InvalidPosition {
                line: pos.line,
                column: pos.column,
            })
    }
}

impl TextBuffer for MemoryBuffer {
    fn line_count(&self) -> usize {
        self.index.line_count()
    }

    fn line_end_column(&self, line: usize) -> Option<usize> {
        self.index.line_len(line)
    }

    fn get_text(&self, range: Range) -> Result<String, BufferError> {
        let start = self.offset_of(range.start)?;
        let end = self.offset_of(range.end)?;
        Ok(self.index.slice(start, end))
    }

    fn default_word_range_at(&self, pos: Position) -> Option<Range> {
        let line = self.index.get_line_text(pos.line)?;
        DEFAULT_WORD.find_iter(&line).find_map(|m| {
            let start = line[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            (start <= pos.column && pos.column <= end)
                .then(|| Range::from_coords(pos.line, start, pos.line, end))
        })
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    fn apply_edits(&mut self, edits: &[BufferEdit]) -> Result<(), BufferError> {
        if self.read_only {
            return Err(BufferError::ReadOnly);
        }

        // Validate everything before touching the rope.
        let mut ops: Vec<(usize, usize, Position, &str)> = Vec::with_capacity(edits.len());
        for edit in edits {
            let start = self.offset_of(edit.range.start)?;
            let end = self.offset_of(edit.range.end)?;
            ops.push((start, end, edit.range.start, edit.text.as_str()));
        }
        ops.sort_by_key(|(start, end, _, _)| (*start, *end));

        for pair in ops.windows(2) {
            let (_, prev_end, _, _) = &pair[0];
            let (next_start, _, next_pos, _) = &pair[1];
            if next_start < prev_end {
                return Err(BufferError::OverlappingEdits {
                    line: next_pos.line,
                    column: next_pos.column,
                });
            }
        }

        // Apply back to front so earlier offsets stay valid.
        for (start, end, _, text) in ops.iter().rev() {
            self.index.replace(*start, *end, text);
        }
        Ok(())
    }
}
