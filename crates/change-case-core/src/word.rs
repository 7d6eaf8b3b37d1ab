//! Word-boundary detection for carets.
//!
//! A case-conversion "word" is broader than an identifier: besides letters, digits and `_` it
//! also spans `-`, `/`, `$` and optionally `.`, so that a caret inside `foo-bar/baz` converts the
//! whole token.

use crate::buffer::TextBuffer;
use crate::position::{Position, Range};

/// Which characters extend a word beyond the buffer's default word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordClass {
    /// `[A-Za-z0-9_\-/$]`
    #[default]
    WithoutDot,
    /// `[A-Za-z0-9_.\-/$]`
    WithDot,
}

impl WordClass {
    /// Pick the class from the `includeDotInCurrentWord` flag.
    pub fn from_include_dot(include_dot: bool) -> Self {
        if include_dot {
            Self::WithDot
        } else {
            Self::WithoutDot
        }
    }

    /// Returns `true` if `ch` belongs to this class.
    pub fn matches(self, ch: char) -> bool {
        ch.is_ascii_alphanumeric()
            || matches!(ch, '_' | '-' | '/' | '$')
            || (ch == '.' && self == Self::WithDot)
    }
}

/// Find the case-conversion word around `pos`.
///
/// The buffer's default word at `pos` seeds the search; the range is then grown backward and
/// forward one character at a time while characters belong to the class. Scanning never leaves
/// the seed's line. Returns `None` if the buffer has no word at `pos`.
pub fn word_range_at<B>(buffer: &B, pos: Position, include_dot: bool) -> Option<Range>
where
    B: TextBuffer + ?Sized,
{
    word_range_with_class(buffer, pos, WordClass::from_include_dot(include_dot))
}

/// Like [`word_range_at`], with an explicit [`WordClass`].
pub fn word_range_with_class<B>(buffer: &B, pos: Position, class: WordClass) -> Option<Range>
where
    B: TextBuffer + ?Sized,
{
    let seed = buffer.default_word_range_at(pos)?;
    let line = seed.start.line;

    let mut start = seed.start.column;
    while start > 0 {
        match char_at(buffer, line, start - 1) {
            Some(ch) if class.matches(ch) => start -= 1,
            _ => break,
        }
    }

    let line_end = buffer.line_end_column(line).unwrap_or(seed.end.column);
    let mut end = seed.end.column;
    while end < line_end {
        match char_at(buffer, line, end) {
            Some(ch) if class.matches(ch) => end += 1,
            _ => break,
        }
    }

    Some(Range::from_coords(line, start, line, end))
}

fn char_at<B>(buffer: &B, line: usize, column: usize) -> Option<char>
where
    B: TextBuffer + ?Sized,
{
    let range = Range::from_coords(line, column, line, column + 1);
    buffer.get_text(range).ok()?.chars().next()
}
