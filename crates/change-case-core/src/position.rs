//! Positions, ranges and selections in a line/column text buffer.
//!
//! Columns count Unicode scalar values (`char`s) within a logical line and never include the
//! line terminator.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns this position moved horizontally by `delta` columns, clamped at column 0.
    pub fn shifted(self, delta: isize) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add_signed(delta),
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A half-open span between two positions, always stored with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Range {
    /// Create a range from two positions in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`.
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// A zero-width range at `pos`.
    pub fn cursor(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` when the range is zero-width, i.e. a caret rather than a selection.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` when start and end lie on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns `true` if the two ranges share at least one character.
    ///
    /// Ranges that merely touch (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Shift both endpoints horizontally by `delta` columns.
    pub fn shifted(self, delta: isize) -> Self {
        Self {
            start: self.start.shifted(delta),
            end: self.end.shifted(delta),
        }
    }
}

/// Document order by end position: line first, then column.
pub fn compare_by_end(a: &Range, b: &Range) -> Ordering {
    a.end.cmp(&b.end)
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (from start to end)
    Forward,
    /// Backward selection (from end to start)
    Backward,
}

/// A user selection: the anchor stays put while the active end follows the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection was started.
    pub anchor: Position,
    /// Where the caret currently is.
    pub active: Position,
}

impl Selection {
    /// Create a selection from anchor and active positions.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A collapsed selection (caret) at `pos`.
    pub fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// A forward selection covering `range`.
    pub fn from_range(range: Range) -> Self {
        Self {
            anchor: range.start,
            active: range.end,
        }
    }

    /// The normalized range covered by this selection.
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Returns `true` if this selection is a bare caret.
    pub fn is_cursor(&self) -> bool {
        self.anchor == self.active
    }

    /// Direction derived from anchor/active ordering.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor <= self.active {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        }
    }
}

impl From<Range> for Selection {
    fn from(range: Range) -> Self {
        Self::from_range(range)
    }
}
