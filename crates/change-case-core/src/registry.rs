//! Named case transforms.
//!
//! A transform is a pure `&str -> String` function. The registry maps a label (the name shown in
//! a picker and used on the command line) to the function and a one-line description. Hosts can
//! start from [`TransformRegistry::builtin`] or register their own conversions.

use std::fmt;
use std::sync::Arc;

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase,
};

/// A shareable string transform.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Labels of the built-in transforms.
pub mod labels {
    #![allow(missing_docs)]
    pub const CAMEL: &str = "camel";
    pub const CONSTANT: &str = "constant";
    pub const DOT: &str = "dot";
    pub const KEBAB: &str = "kebab";
    pub const LOWER: &str = "lower";
    pub const LOWER_FIRST: &str = "lowerFirst";
    pub const NO: &str = "no";
    pub const PARAM: &str = "param";
    pub const PASCAL: &str = "pascal";
    pub const PATH: &str = "path";
    pub const SENTENCE: &str = "sentence";
    pub const SNAKE: &str = "snake";
    pub const SNAKE_UPPER: &str = "snakeUpper";
    pub const SWAP: &str = "swap";
    pub const TITLE: &str = "title";
    pub const UPPER: &str = "upper";
    pub const UPPER_FIRST: &str = "upperFirst";
    pub const SPONGE: &str = "sPonGeCaSe";
}

/// A registered transform.
#[derive(Clone)]
pub struct TransformEntry {
    /// Label used to look the transform up.
    pub label: String,
    /// Human-readable description.
    pub description: String,
    func: TransformFn,
}

impl TransformEntry {
    /// Run the transform.
    pub fn apply(&self, text: &str) -> String {
        (self.func)(text)
    }
}

impl fmt::Debug for TransformEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformEntry")
            .field("label", &self.label)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// An ordered set of named transforms.
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    entries: Vec<TransformEntry>,
}

impl TransformRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` under `label`.
    ///
    /// Re-registering a label replaces the previous entry in place, keeping its position.
    pub fn register<F>(
        &mut self,
        label: impl Into<String>,
        description: impl Into<String>,
        func: F,
    ) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let entry = TransformEntry {
            label: label.into(),
            description: description.into(),
            func: Arc::new(func),
        };
        match self.entries.iter_mut().find(|e| e.label == entry.label) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Look up a transform by label.
    pub fn get(&self, label: &str) -> Option<&TransformEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Returns `true` if `label` is registered.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Apply the transform named `label`, or `None` if it is unknown.
    pub fn apply(&self, label: &str, text: &str) -> Option<String> {
        self.get(label).map(|e| e.apply(text))
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TransformEntry> {
        self.entries.iter()
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The standard set of case conversions.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(
                labels::CAMEL,
                "Convert to a string with the separators denoted by having the next letter capitalized",
                |s| s.to_lower_camel_case(),
            )
            .register(
                labels::CONSTANT,
                "Convert to an upper case, underscore separated string",
                |s| s.to_shouty_snake_case(),
            )
            .register(
                labels::DOT,
                "Convert to a lower case, period separated string",
                |s| join_lower_words(s, "."),
            )
            .register(
                labels::KEBAB,
                "Convert to a lower case, dash separated string (alias for param case)",
                |s| s.to_kebab_case(),
            )
            .register(labels::LOWER, "Convert to a string in lower case", |s| {
                s.to_lowercase()
            })
            .register(
                labels::LOWER_FIRST,
                "Convert to a string with the first character lower cased",
                lower_first,
            )
            .register(
                labels::NO,
                "Convert the string without any casing (lower case, space separated)",
                |s| join_lower_words(s, " "),
            )
            .register(
                labels::PARAM,
                "Convert to a lower case, dash separated string",
                |s| s.to_kebab_case(),
            )
            .register(
                labels::PASCAL,
                "Convert to a string denoted in the same fashion as camelCase, but with the first letter also capitalized",
                |s| s.to_upper_camel_case(),
            )
            .register(
                labels::PATH,
                "Convert to a lower case, slash separated string",
                |s| join_lower_words(s, "/"),
            )
            .register(
                labels::SENTENCE,
                "Convert to a lower case, space separated string",
                sentence,
            )
            .register(
                labels::SNAKE,
                "Convert to a lower case, underscore separated string",
                |s| s.to_snake_case(),
            )
            .register(
                labels::SNAKE_UPPER,
                "Convert to a underscore-separated string with the first character of every word upper cased",
                snake_upper,
            )
            .register(
                labels::SWAP,
                "Convert to a string with every character case reversed",
                swap,
            )
            .register(
                labels::TITLE,
                "Convert to a space separated string with the first character of every word upper cased",
                |s| s.to_title_case(),
            )
            .register(labels::UPPER, "Convert to a string in upper case", |s| {
                s.to_uppercase()
            })
            .register(
                labels::UPPER_FIRST,
                "Convert to a string with the first character upper cased",
                upper_first,
            )
            .register(
                labels::SPONGE,
                "Convert to a string with random capitalization applied",
                sponge,
            );
        registry
    }
}

fn join_lower_words(text: &str, separator: &str) -> String {
    text.to_snake_case().replace('_', separator)
}

fn sentence(text: &str) -> String {
    upper_first(&join_lower_words(text, " "))
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Snake case with the first letter of every word uppercased: `testThis` -> `Test_This`.
pub fn snake_upper(text: &str) -> String {
    let snake = text.to_snake_case();
    let mut out = String::with_capacity(snake.len());
    let mut capitalize = true;
    for ch in snake.chars() {
        if capitalize && (ch.is_alphanumeric() || ch == '_') {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        capitalize = ch == '_';
    }
    out
}

/// Reverse the case of every character.
pub fn swap(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Randomly capitalize each character.
pub fn sponge(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if rand::random::<bool>() {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_upper() {
        assert_eq!(snake_upper("testThis"), "Test_This");
        assert_eq!(snake_upper("TestThis"), "Test_This");
        assert_eq!(snake_upper("Test_This"), "Test_This");
        assert_eq!(snake_upper("Test-This"), "Test_This");
        assert_ne!(snake_upper("TESTTHIS"), "Test_This");
    }

    #[test]
    fn test_first_character_helpers() {
        assert_eq!(upper_first("fooBar"), "FooBar");
        assert_eq!(lower_first("FooBar"), "fooBar");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first("ÉCOLE"), "éCOLE");
    }

    #[test]
    fn test_swap() {
        assert_eq!(swap("Hello World_1"), "hELLO wORLD_1");
    }

    #[test]
    fn test_sponge_preserves_letters() {
        let out = sponge("hello-world");
        assert_eq!(out.to_lowercase(), "hello-world");
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = TransformRegistry::new();
        registry
            .register("a", "first", |s| s.to_string())
            .register("b", "second", |s| s.to_uppercase())
            .register("a", "replaced", |s| format!("<{s}>"));
        assert_eq!(registry.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(registry.apply("a", "x").as_deref(), Some("<x>"));
        assert_eq!(registry.get("a").unwrap().description, "replaced");
        assert_eq!(registry.apply("missing", "x"), None);
    }
}
