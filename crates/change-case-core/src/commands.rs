//! Command layer for hosts.
//!
//! [`CaseCommands`] bundles a [`TransformRegistry`] with the user's [`CaseConfig`] and exposes
//! what a host wires to its command palette: picker entries (with live previews), running a
//! conversion by label, and the file-rename flow.
//!
//! # Example
//!
//! ```rust
//! use change_case_core::{CaseCommands, MemoryBuffer, Position, Selection, TextBuffer};
//!
//! let commands = CaseCommands::default();
//! let mut buffer =
//!     MemoryBuffer::with_selections("let userName;", vec![Selection::cursor(Position::new(0, 6))]);
//!
//! let items = commands.items(&buffer);
//! let snake = items.iter().find(|i| i.label == "snake").unwrap();
//! assert_eq!(snake.description, "user_name");
//!
//! commands.run("constant", &mut buffer);
//! assert_eq!(buffer.text(), "let USER_NAME;");
//! ```

use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;
use crate::config::CaseConfig;
use crate::file_name::{RenameError, converted_file_name, rename_file, split_file_name};
use crate::registry::TransformRegistry;
use crate::transform::{
    CaseTransformError, CaseTransformOutcome, apply_case_transform, selected_text,
};

/// One picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// Transform label.
    pub label: String,
    /// Either the transform description or a preview of its result.
    pub description: String,
}

/// Case conversion commands over an injected registry.
#[derive(Debug, Clone)]
pub struct CaseCommands {
    registry: TransformRegistry,
    config: CaseConfig,
}

impl Default for CaseCommands {
    fn default() -> Self {
        Self::new(TransformRegistry::builtin(), CaseConfig::default())
    }
}

impl CaseCommands {
    /// Create commands from a registry and configuration.
    pub fn new(registry: TransformRegistry, config: CaseConfig) -> Self {
        Self { registry, config }
    }

    /// The transform registry.
    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Text of the only selection, if there is exactly one and it stays on one line.
    pub fn single_selected_text<B>(&self, buffer: &B) -> Option<String>
    where
        B: TextBuffer + ?Sized,
    {
        let selections = buffer.selections();
        let [selection] = selections.as_slice() else {
            return None;
        };
        if !selection.range().is_single_line() {
            return None;
        }
        selected_text(buffer, selection, self.config.word_class())
    }

    /// Picker entries. With a single one-line selection each entry previews its conversion.
    pub fn items<B>(&self, buffer: &B) -> Vec<CommandItem>
    where
        B: TextBuffer + ?Sized,
    {
        let preview = self.single_selected_text(buffer);
        self.registry
            .iter()
            .map(|entry| CommandItem {
                label: entry.label.clone(),
                description: match &preview {
                    Some(text) => entry.apply(text),
                    None => entry.description.clone(),
                },
            })
            .collect()
    }

    /// Convert the buffer's current selections with the transform `label`.
    ///
    /// Failures are logged and reported as `None`; the buffer is left unchanged in that case.
    pub fn run<B>(&self, label: &str, buffer: &mut B) -> Option<CaseTransformOutcome>
    where
        B: TextBuffer + ?Sized,
    {
        match self.try_run(label, buffer) {
            Ok(outcome) => Some(outcome),
            Err(CaseTransformError::UnknownTransform(label)) => {
                tracing::warn!(%label, "unknown case transform");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "case transform failed");
                None
            }
        }
    }

    /// Like [`CaseCommands::run`], returning the error instead of logging it.
    pub fn try_run<B>(
        &self,
        label: &str,
        buffer: &mut B,
    ) -> Result<CaseTransformOutcome, CaseTransformError>
    where
        B: TextBuffer + ?Sized,
    {
        let selections = buffer.selections();
        apply_case_transform(
            buffer,
            &selections,
            label,
            &self.registry,
            self.config.word_class(),
        )
    }

    /// Picker entries for renaming `file_name`; each description is the converted stem.
    pub fn rename_items(&self, file_name: &str) -> Vec<CommandItem> {
        let (stem, _) = split_file_name(file_name);
        self.registry
            .iter()
            .map(|entry| CommandItem {
                label: entry.label.clone(),
                description: entry.apply(stem),
            })
            .collect()
    }

    /// The new file name for `file_name` under `label`, if the label is known.
    pub fn renamed_file_name(&self, file_name: &str, label: &str) -> Option<String> {
        let entry = self.registry.get(label)?;
        Some(converted_file_name(file_name, entry))
    }

    /// Rename the file at `path` by converting its stem with `label`.
    pub fn rename_file(&self, path: &Path, label: &str) -> Result<PathBuf, RenameError> {
        rename_file(path, label, &self.registry)
    }
}
