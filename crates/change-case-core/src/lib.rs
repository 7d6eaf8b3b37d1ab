#![warn(missing_docs)]
//! Change Case Core - headless letter-case conversion for editor selections
//!
//! # Overview
//!
//! `change-case-core` converts the text under one or more editor selections between case
//! conventions (camelCase, snake_case, kebab-case, ...) and computes where the selections end up
//! afterwards. Conversions usually change the length of the text, so when several selections sit
//! on the same line every later selection has to be shifted by the deltas of the earlier ones.
//!
//! The crate does not own an editor. Hosts implement [`TextBuffer`]; [`MemoryBuffer`] is a
//! rope-backed implementation for tests and command-line use.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Commands (picker items, run, rename)       │  ← Host API
//! ├─────────────────────────────────────────────┤
//! │  Transformer & Remapper                     │  ← Plan / apply / remap
//! ├──────────────────────┬──────────────────────┤
//! │  Word Boundaries     │  Transform Registry  │
//! ├──────────────────────┴──────────────────────┤
//! │  TextBuffer (MemoryBuffer: rope line index) │  ← Text access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use change_case_core::{
//!     MemoryBuffer, Position, Range, Selection, TextBuffer, TransformRegistry, WordClass,
//!     apply_case_transform,
//! };
//!
//! // A caret inside `helloWorld` converts the whole word.
//! let mut buffer = MemoryBuffer::new("let helloWorld = 1;");
//! let selections = vec![Selection::cursor(Position::new(0, 7))];
//! let registry = TransformRegistry::builtin();
//!
//! let outcome =
//!     apply_case_transform(&mut buffer, &selections, "snake", &registry, WordClass::default())
//!         .unwrap();
//!
//! assert_eq!(buffer.text(), "let hello_world = 1;");
//! assert_eq!(outcome.selections[0].range(), Range::from_coords(0, 4, 0, 15));
//! ```
//!
//! # Module Description
//!
//! - [`position`] - positions, ranges and selections
//! - [`buffer`] - the [`TextBuffer`] seam and [`MemoryBuffer`]
//! - [`word`] - word-boundary detection around carets
//! - [`registry`] - named string transforms
//! - [`transform`] - the two-phase transform and selection remap
//! - [`commands`] - picker items, run by label, file rename
//! - [`config`] - user settings

pub mod buffer;
pub mod commands;
pub mod config;
pub mod file_name;
pub mod line_ending;
pub mod line_index;
pub mod position;
pub mod registry;
pub mod transform;
pub mod word;

pub use buffer::{BufferEdit, BufferError, MemoryBuffer, TextBuffer};
pub use commands::{CaseCommands, CommandItem};
pub use config::{CaseConfig, ConfigError};
pub use file_name::{RenameError, converted_file_name, rename_file, renamed_path, split_file_name};
pub use line_ending::LineEnding;
pub use line_index::LineIndex;
pub use position::{Position, Range, Selection, SelectionDirection};
pub use registry::{TransformEntry, TransformFn, TransformRegistry, labels};
pub use transform::{
    CaseTransformError, CaseTransformOutcome, ReplacementAction, apply_case_transform, edit_batch,
    plan_replacements, remap_selections, resolve_text_range, selected_text, transform_selections,
};
pub use word::{WordClass, word_range_at, word_range_with_class};
