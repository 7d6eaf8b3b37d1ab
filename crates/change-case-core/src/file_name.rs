//! Case conversion of file names.
//!
//! Only the stem is converted. Up to two extensions are kept verbatim, so `userProfile.test.ts`
//! becomes `user_profile.test.ts` under snake case.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::{TransformEntry, TransformRegistry};

/// Rename errors.
#[derive(Debug, Error)]
pub enum RenameError {
    /// No transform is registered under the requested label.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    /// The path has no usable file name.
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),

    /// The rename itself failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Split a file name into its stem and up to two trailing extensions.
///
/// A leading dot does not start an extension (`.gitignore` has none), and `..` has none either.
/// A trailing dot is an extension of its own (`notes.` keeps `.`).
pub fn split_file_name(name: &str) -> (&str, &str) {
    let mut stem_end = name.len();
    for _ in 0..2 {
        let stem = &name[..stem_end];
        match stem.rfind('.') {
            Some(dot) if dot > 0 && stem != ".." => stem_end = dot,
            _ => break,
        }
    }
    (&name[..stem_end], &name[stem_end..])
}

/// Apply `transform` to the stem of `name`, keeping its extensions.
pub fn converted_file_name(name: &str, transform: &TransformEntry) -> String {
    let (stem, ext) = split_file_name(name);
    format!("{}{}", transform.apply(stem), ext)
}

/// The path `path` would be renamed to under the transform `label`.
pub fn renamed_path(
    path: &Path,
    label: &str,
    registry: &TransformRegistry,
) -> Result<PathBuf, RenameError> {
    let entry = registry
        .get(label)
        .ok_or_else(|| RenameError::UnknownTransform(label.to_string()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| RenameError::NoFileName(path.to_path_buf()))?;
    Ok(path.with_file_name(converted_file_name(name, entry)))
}

/// Rename the file at `path` by converting its stem, returning the new path.
///
/// Renaming to the same name is a no-op.
pub fn rename_file(
    path: &Path,
    label: &str,
    registry: &TransformRegistry,
) -> Result<PathBuf, RenameError> {
    let target = renamed_path(path, label, registry)?;
    if target != path {
        std::fs::rename(path, &target)?;
        tracing::debug!(from = %path.display(), to = %target.display(), "renamed file");
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_two_extensions() {
        assert_eq!(split_file_name("file.test.ts"), ("file", ".test.ts"));
        assert_eq!(split_file_name("a.b.c.d"), ("a.b", ".c.d"));
        assert_eq!(split_file_name("README.md"), ("README", ".md"));
        assert_eq!(split_file_name("Makefile"), ("Makefile", ""));
    }

    #[test]
    fn test_split_leading_and_trailing_dots() {
        assert_eq!(split_file_name(".gitignore"), (".gitignore", ""));
        assert_eq!(split_file_name(".eslintrc.json"), (".eslintrc", ".json"));
        assert_eq!(split_file_name("weird."), ("weird", "."));
        assert_eq!(split_file_name("a.b."), ("a", ".b."));
        assert_eq!(split_file_name("..hidden"), (".", ".hidden"));
        assert_eq!(split_file_name("..."), ("..", "."));
    }

    #[test]
    fn test_converted_file_name() {
        let registry = TransformRegistry::builtin();
        let snake = registry.get("snake").unwrap();
        assert_eq!(
            converted_file_name("userProfile.test.ts", snake),
            "user_profile.test.ts"
        );
        assert_eq!(converted_file_name("myFile.", snake), "my_file.");
    }

    #[test]
    fn test_renamed_path_unknown_label() {
        let registry = TransformRegistry::builtin();
        let err = renamed_path(Path::new("a/fooBar.rs"), "nope", &registry).unwrap_err();
        assert!(matches!(err, RenameError::UnknownTransform(label) if label == "nope"));
    }
}
