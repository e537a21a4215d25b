//! `inputs` option.
//!
//! ```toml
//! inputs = ["assets/**/*.{png,svg}", "public/generated/*.js", "!**/*.map"]
//! ```
//!
//! An entry starting with `!` excludes the files it matches from the whole
//! list.
//!
//! Only an array is accepted. A lone string is the most common mistake
//! (`inputs = "assets"`) and is rejected with a pointed message instead of
//! being silently wrapped.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, InputsError};

/// Ordered list of directory roots or glob patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputSpec(Vec<String>);

impl InputSpec {
    pub const FIELD: FieldPath = FieldPath::new("inputs");

    /// Prefix that turns an entry into an exclusion pattern.
    pub const EXCLUDE: char = '!';

    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Entries to expand, in order.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|entry| !entry.starts_with(Self::EXCLUDE))
    }

    /// Exclusion patterns, without their leading `!`.
    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|entry| entry.strip_prefix(Self::EXCLUDE))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check entries for obvious mistakes.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.includes().next().is_none() {
            diag.warn(Self::FIELD, "no inputs configured, nothing will be discovered");
        }

        for (i, entry) in self.0.iter().enumerate() {
            match entry.strip_prefix(Self::EXCLUDE) {
                Some(pattern) if pattern.trim().is_empty() => {
                    diag.error_with_hint(
                        Self::FIELD,
                        format!("[{i}] exclusion has no pattern"),
                        "write the files to leave out after `!`, e.g. \"!**/*.map\"",
                    );
                }
                None if entry.trim().is_empty() => {
                    diag.error(Self::FIELD, format!("[{i}] entry is empty"));
                }
                _ => {}
            }
        }
    }
}

impl<'de> Deserialize<'de> for InputSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputSpecVisitor;

        impl<'de> Visitor<'de> for InputSpecVisitor {
            type Value = InputSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of directory paths or glob patterns")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(entry) = seq.next_element::<String>()? {
                    entries.push(entry);
                }
                Ok(InputSpec(entries))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Err(E::custom(InputsError::SingleString(value.to_string())))
            }
        }

        deserializer.deserialize_any(InputSpecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        inputs: InputSpec,
    }

    #[test]
    fn test_inputs_from_toml_array() {
        let w: Wrapper = toml::from_str(r#"inputs = ["assets", "src/**/*.png"]"#).unwrap();
        assert_eq!(w.inputs.iter().collect::<Vec<_>>(), vec!["assets", "src/**/*.png"]);
    }

    #[test]
    fn test_inputs_single_string_rejected() {
        let err = toml::from_str::<Wrapper>(r#"inputs = "assets""#).unwrap_err();
        assert!(err.to_string().contains("must be an array"));

        let err = serde_json::from_value::<Wrapper>(json!({ "inputs": "assets" })).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn test_inputs_other_shapes_rejected() {
        let err = serde_json::from_value::<Wrapper>(json!({ "inputs": 3 })).unwrap_err();
        assert!(err.to_string().contains("an array of directory paths or glob patterns"));

        let err = serde_json::from_value::<Wrapper>(json!({ "inputs": [1, 2] })).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_validate_entries() {
        let mut diag = ConfigDiagnostics::new();
        InputSpec::new(["assets", " "]).validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].message.contains("[1]"));

        let mut diag = ConfigDiagnostics::new();
        InputSpec::default().validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_includes_and_excludes() {
        let inputs = InputSpec::new(["!src/*.map", "src/*", "assets"]);
        assert_eq!(inputs.includes().collect::<Vec<_>>(), ["src/*", "assets"]);
        assert_eq!(inputs.excludes().collect::<Vec<_>>(), ["src/*.map"]);
    }

    #[test]
    fn test_validate_exclusions() {
        let mut diag = ConfigDiagnostics::new();
        InputSpec::new(["src/*", "!"]).validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].message.contains("exclusion"));

        // Only exclusions: nothing to discover
        let mut diag = ConfigDiagnostics::new();
        InputSpec::new(["!src/*.map"]).validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
