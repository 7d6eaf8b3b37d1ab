//! Selection transformer and remapper.
//!
//! Converting the text under several selections at once is done in two phases:
//!
//! 1. **Plan** ([`plan_replacements`]): for every selection, resolve the text range (carets
//!    expand to the word around them), run the transform and record a [`ReplacementAction`]
//!    carrying the length delta and the selection range as it would look if only this edit
//!    happened.
//! 2. **Remap** ([`remap_selections`]): after the whole batch has been applied, walk the actions
//!    in document order and shift each range right by the accumulated delta of the earlier edits
//!    that ended on the same line.
//!
//! The batch itself is applied atomically by the [`TextBuffer`], which resolves every range
//! against the pre-edit text; only the reported selections need manual bookkeeping.
//!
//! Overlapping input selections are not supported. A buffer that rejects overlapping edits (such
//! as [`crate::MemoryBuffer`]) makes the whole command fail without touching the text.
//!
//! # Example
//!
//! ```rust
//! use change_case_core::{
//!     MemoryBuffer, Range, Selection, TextBuffer, TransformRegistry, WordClass,
//!     apply_case_transform,
//! };
//!
//! let mut buffer = MemoryBuffer::new("fooBar bazQux");
//! let selections = vec![
//!     Selection::from_range(Range::from_coords(0, 0, 0, 6)),
//!     Selection::from_range(Range::from_coords(0, 7, 0, 13)),
//! ];
//! let registry = TransformRegistry::builtin();
//!
//! apply_case_transform(&mut buffer, &selections, "snake", &registry, WordClass::default())
//!     .unwrap();
//!
//! assert_eq!(buffer.text(), "foo_bar baz_qux");
//! assert_eq!(
//!     buffer.selections(),
//!     vec![
//!         Selection::from_range(Range::from_coords(0, 0, 0, 7)),
//!         Selection::from_range(Range::from_coords(0, 8, 0, 15)),
//!     ]
//! );
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use crate::buffer::{BufferEdit, BufferError, TextBuffer};
use crate::line_ending::split_lines;
use crate::position::{Range, Selection, compare_by_end};
use crate::registry::TransformRegistry;
use crate::word::{WordClass, word_range_with_class};

/// Errors from [`apply_case_transform`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseTransformError {
    /// No transform is registered under the requested label.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    /// Reading the text under a selection failed.
    #[error("cannot read selection: {0}")]
    InvalidSelection(BufferError),

    /// The buffer refused the edit batch; nothing was changed.
    #[error("edit rejected: {0}")]
    EditRejected(BufferError),
}

/// The planned replacement for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementAction {
    /// Text under `original_range` before the edit.
    pub original_text: String,
    /// Range that gets replaced.
    pub original_range: Range,
    /// Text that replaces `original_text`.
    pub replacement_text: String,
    /// Change in length of the range's last line, in characters.
    pub length_delta: isize,
    /// The selection after this edit alone, ignoring other edits on the same line.
    pub adjusted_range: Range,
}

impl ReplacementAction {
    /// Returns `true` if the replacement leaves the text unchanged.
    pub fn is_noop(&self) -> bool {
        self.replacement_text == self.original_text
    }
}

/// Result of a successful [`apply_case_transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTransformOutcome {
    /// One action per selection that resolved to text, in input order.
    pub actions: Vec<ReplacementAction>,
    /// Number of buffer edits actually applied (no-op actions are skipped).
    pub edits_applied: usize,
    /// Selections installed on the buffer, in document order. Empty when nothing resolved, in
    /// which case the buffer's selections were left as they were.
    pub selections: Vec<Selection>,
}

/// Resolve the text range a selection converts.
///
/// Carets expand to the word around them; `None` means there is no word at the caret.
pub fn resolve_text_range<B>(buffer: &B, selection: &Selection, class: WordClass) -> Option<Range>
where
    B: TextBuffer + ?Sized,
{
    if selection.is_cursor() {
        word_range_with_class(buffer, selection.active, class)
    } else {
        Some(selection.range())
    }
}

/// Phase one: compute the replacement for every selection.
///
/// Selections with no text (a caret away from any word) are skipped. Multi-line ranges are
/// split on any line terminator, converted line by line, and rejoined with the buffer's dominant
/// separator.
pub fn plan_replacements<B, F>(
    buffer: &B,
    selections: &[Selection],
    transform: F,
    class: WordClass,
) -> Result<Vec<ReplacementAction>, BufferError>
where
    B: TextBuffer + ?Sized,
    F: Fn(&str) -> String,
{
    let separator = buffer.line_ending().as_str();
    let mut actions = Vec::with_capacity(selections.len());

    for selection in selections {
        let Some(range) = resolve_text_range(buffer, selection, class) else {
            tracing::debug!(
                line = selection.active.line,
                column = selection.active.column,
                "no word at caret, skipping"
            );
            continue;
        };
        let text = buffer.get_text(range)?;

        let (replacement, length_delta) = if range.is_single_line() {
            let replacement = transform(&text);
            let delta = char_len(&replacement) - char_len(&text);
            (replacement, delta)
        } else {
            let lines = split_lines(&text);
            let converted: Vec<String> = lines.iter().map(|&line| transform(line)).collect();
            let last_before = lines.last().map_or(0, |l| char_len(l));
            let last_after = converted.last().map_or(0, |l| char_len(l));
            (converted.join(separator), last_after - last_before)
        };

        let adjusted_range = if range.is_empty() {
            range
        } else {
            Range {
                start: range.start,
                end: range.end.shifted(length_delta),
            }
        };

        actions.push(ReplacementAction {
            original_text: text,
            original_range: range,
            replacement_text: replacement,
            length_delta,
            adjusted_range,
        });
    }

    Ok(actions)
}

/// The edit batch for a set of actions, leaving out no-ops.
pub fn edit_batch(actions: &[ReplacementAction]) -> Vec<BufferEdit> {
    actions
        .iter()
        .filter(|a| !a.is_noop())
        .map(|a| BufferEdit {
            range: a.original_range,
            text: a.replacement_text.clone(),
        })
        .collect()
}

/// Phase two: the selections to install once every action has been applied.
///
/// Actions are visited in document order of their adjusted end. Each line keeps its own running
/// offset; a range is shifted by the offset of its end line and then adds its own delta to it.
pub fn remap_selections(actions: &[ReplacementAction]) -> Vec<Selection> {
    let mut sorted: Vec<&ReplacementAction> = actions.iter().collect();
    sorted.sort_by(|a, b| compare_by_end(&a.adjusted_range, &b.adjusted_range));

    let mut running_offsets: BTreeMap<usize, isize> = sorted
        .iter()
        .map(|a| (a.adjusted_range.end.line, 0))
        .collect();

    sorted
        .into_iter()
        .map(|action| {
            let line = action.adjusted_range.end.line;
            let offset = running_offsets.entry(line).or_insert(0);
            let range = action.adjusted_range.shifted(*offset);
            *offset += action.length_delta;
            Selection::from_range(range)
        })
        .collect()
}

/// Convert the text under `selections` with `transform`, then install remapped selections.
///
/// If no selection resolves to text the buffer is left alone. If the buffer rejects the batch,
/// its text and selections are unchanged.
pub fn transform_selections<B, F>(
    buffer: &mut B,
    selections: &[Selection],
    transform: F,
    class: WordClass,
) -> Result<CaseTransformOutcome, CaseTransformError>
where
    B: TextBuffer + ?Sized,
    F: Fn(&str) -> String,
{
    let actions = plan_replacements(&*buffer, selections, transform, class)
        .map_err(CaseTransformError::InvalidSelection)?;
    if actions.is_empty() {
        return Ok(CaseTransformOutcome {
            actions,
            edits_applied: 0,
            selections: Vec::new(),
        });
    }

    let edits = edit_batch(&actions);
    if !edits.is_empty() {
        if let Err(err) = buffer.apply_edits(&edits) {
            tracing::warn!(error = %err, edits = edits.len(), "case edit batch rejected");
            return Err(CaseTransformError::EditRejected(err));
        }
    }

    let remapped = remap_selections(&actions);
    buffer.set_selections(remapped.clone());

    tracing::debug!(
        selections = selections.len(),
        actions = actions.len(),
        edits = edits.len(),
        "case transform applied"
    );

    Ok(CaseTransformOutcome {
        actions,
        edits_applied: edits.len(),
        selections: remapped,
    })
}

/// Convert the text under `selections` with the transform registered as `transform_name`.
///
/// Unknown names fail with [`CaseTransformError::UnknownTransform`] before the buffer is read.
pub fn apply_case_transform<B>(
    buffer: &mut B,
    selections: &[Selection],
    transform_name: &str,
    registry: &TransformRegistry,
    class: WordClass,
) -> Result<CaseTransformOutcome, CaseTransformError>
where
    B: TextBuffer + ?Sized,
{
    let entry = registry
        .get(transform_name)
        .ok_or_else(|| CaseTransformError::UnknownTransform(transform_name.to_string()))?;
    transform_selections(buffer, selections, |s| entry.apply(s), class)
}

/// The word (or selected text) a single selection would convert, if any.
pub fn selected_text<B>(buffer: &B, selection: &Selection, class: WordClass) -> Option<String>
where
    B: TextBuffer + ?Sized,
{
    let range = resolve_text_range(buffer, selection, class)?;
    buffer.get_text(range).ok()
}

fn char_len(s: &str) -> isize {
    s.chars().count() as isize
}
