//! Line ending helpers.
//!
//! Buffers keep every line's terminator exactly as loaded. The dominant separator is only used
//! to rejoin the lines of a multi-line selection after they have been converted one by one.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break regex should compile"));

/// The newline sequence a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
    /// Classic Mac CR (`'\r'`).
    Cr,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: the most frequent terminator wins. Ties prefer LF, then CRLF. Text without any
    /// line break is [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        let (mut lf, mut crlf, mut cr) = (0usize, 0usize, 0usize);
        for m in LINE_BREAK.find_iter(text) {
            match m.as_str() {
                "\r\n" => crlf += 1,
                "\r" => cr += 1,
                _ => lf += 1,
            }
        }
        if lf >= crlf && lf >= cr {
            Self::Lf
        } else if crlf >= cr {
            Self::Crlf
        } else {
            Self::Cr
        }
    }

    /// The separator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Split `text` into lines on any terminator (`"\r\n"`, `'\n'` or `'\r'`).
///
/// Unlike [`str::lines`], a trailing terminator yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_picks_most_frequent() {
        assert_eq!(LineEnding::detect_in_text("a\r\nb\r\nc\n"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text("a\nb\r\nc"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\rb\rc\r\n"), LineEnding::Cr);
        assert_eq!(LineEnding::detect_in_text("a\r\nb\rc"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text(""), LineEnding::Lf);
    }

    #[test]
    fn test_split_lines_on_every_terminator() {
        assert_eq!(split_lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r\n"), vec!["", ""]);
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
    }
}
