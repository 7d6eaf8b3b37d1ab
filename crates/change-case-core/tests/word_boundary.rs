use change_case_core::{MemoryBuffer, Position, Range, TextBuffer, word_range_at};
use pretty_assertions::assert_eq;

#[test]
fn test_dot_stops_word_by_default() {
    let buffer = MemoryBuffer::new("foo.bar-baz");
    let range = word_range_at(&buffer, Position::new(0, 5), false).unwrap();

    assert_eq!(range, Range::from_coords(0, 4, 0, 11));
    assert_eq!(buffer.get_text(range).unwrap(), "bar-baz");
}

#[test]
fn test_dot_included_when_enabled() {
    let buffer = MemoryBuffer::new("foo.bar-baz");
    let range = word_range_at(&buffer, Position::new(0, 5), true).unwrap();

    assert_eq!(range, Range::from_coords(0, 0, 0, 11));
    assert_eq!(buffer.get_text(range).unwrap(), "foo.bar-baz");
}

#[test]
fn test_caret_at_word_edges() {
    let buffer = MemoryBuffer::new("(some_path/file$x)");
    assert_eq!(
        word_range_at(&buffer, Position::new(0, 1), false),
        Some(Range::from_coords(0, 1, 0, 17))
    );
    assert_eq!(
        word_range_at(&buffer, Position::new(0, 17), false),
        Some(Range::from_coords(0, 1, 0, 17))
    );
}

#[test]
fn test_caret_in_whitespace_has_no_word() {
    let buffer = MemoryBuffer::new("foo    bar");
    assert_eq!(word_range_at(&buffer, Position::new(0, 5), false), None);
}

#[test]
fn test_caret_on_separator_only_run_has_no_word() {
    // Separators extend a word but never seed one.
    let buffer = MemoryBuffer::new("a - / $ b");
    assert_eq!(word_range_at(&buffer, Position::new(0, 4), true), None);
}

#[test]
fn test_scan_does_not_cross_lines() {
    let buffer = MemoryBuffer::new("abc-\n-def-\n-ghi");
    assert_eq!(
        word_range_at(&buffer, Position::new(1, 2), false),
        Some(Range::from_coords(1, 0, 1, 5))
    );
}

#[test]
fn test_line_out_of_range() {
    let buffer = MemoryBuffer::new("abc");
    assert_eq!(word_range_at(&buffer, Position::new(4, 0), false), None);
}

#[test]
fn test_non_ascii_seed_is_not_extended_through_non_ascii() {
    let buffer = MemoryBuffer::new("naïve-über");
    // Extension only accepts ASCII, so scanning back from `über` stops at `ï`.
    let range = word_range_at(&buffer, Position::new(0, 8), false).unwrap();
    assert_eq!(range, Range::from_coords(0, 3, 0, 10));
}
