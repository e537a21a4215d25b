//! Typed model of the host bundler's build configuration.
//!
//! Only the path this crate cares about is modelled:
//!
//! ```text
//! UserConfig
//! └── build: BuildOptions
//!     └── rollupOptions: RollupOptions
//!         ├── input: EntryTable   <- recognized
//!         └── ...                 <- carried through untouched
//! ```
//!
//! Everything else in the host config is the host's business. The patch
//! returned to the host contains only `build.rollupOptions`, which the host
//! shallow-merges into its own config.

mod merge;

pub use merge::{merge_config, merge_entries};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Entry-point name -> file path. Used both for discovered files and for
/// the table the caller already had.
pub type EntryTable = BTreeMap<String, String>;

/// The host's configuration, as far as this crate is concerned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_options: Option<RollupOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupOptions {
    /// Named entry points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<EntryTable>,

    /// Any other rollup option (`output`, `external`, ...), kept verbatim.
    #[serde(flatten)]
    pub rest: Map<String, JsonValue>,
}

impl UserConfig {
    /// Parse a host config from JSON.
    pub fn from_json(value: JsonValue) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// The rollup options, if the caller set any.
    pub fn rollup_options(&self) -> Option<&RollupOptions> {
        self.build.as_ref()?.rollup_options.as_ref()
    }

    /// The caller's existing entry table, if any.
    pub fn entries(&self) -> Option<&EntryTable> {
        self.rollup_options()?.input.as_ref()
    }
}

/// Partial config handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigPatch {
    pub build: PatchBuild,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchBuild {
    pub rollup_options: PatchRollupOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchRollupOptions {
    pub input: EntryTable,

    #[serde(flatten)]
    pub rest: Map<String, JsonValue>,
}

impl ConfigPatch {
    /// The merged entry table.
    pub fn input(&self) -> &EntryTable {
        &self.build.rollup_options.input
    }

    pub fn to_json(&self) -> JsonValue {
        // Only string maps and JSON values inside: serialization cannot fail
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_config_from_json() {
        let config = UserConfig::from_json(json!({
            "build": {
                "rollupOptions": {
                    "input": { "existing": "/path/to/existing.js" },
                    "external": ["react"]
                }
            }
        }))
        .unwrap();

        let entries = config.entries().unwrap();
        assert_eq!(entries["existing"], "/path/to/existing.js");
        assert_eq!(config.rollup_options().unwrap().rest["external"], json!(["react"]));
    }

    #[test]
    fn test_user_config_absent_sections() {
        for value in [json!({}), json!({ "build": {} }), json!({ "build": { "rollupOptions": {} } })] {
            let config = UserConfig::from_json(value).unwrap();
            assert!(config.entries().is_none());
        }
    }

    #[test]
    fn test_user_config_ignores_unrelated_host_options() {
        let config = UserConfig::from_json(json!({ "root": "web", "build": { "outDir": "dist" } }));
        assert!(config.is_ok());
    }

    #[test]
    fn test_patch_serializes_camel_case() {
        let patch = ConfigPatch {
            build: PatchBuild {
                rollup_options: PatchRollupOptions {
                    input: EntryTable::from([("a".to_string(), "src/a.txt".to_string())]),
                    rest: Map::new(),
                },
            },
        };

        assert_eq!(
            patch.to_json(),
            json!({ "build": { "rollupOptions": { "input": { "a": "src/a.txt" } } } })
        );
    }
}
