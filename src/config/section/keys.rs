//! `[keys]` section configuration.
//!
//! ```toml
//! [keys]
//! strategy = "stem"   # "path" (default) or "stem"
//! prefix = "assets/"  # prepended to every key
//! ```

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::keys::KeyStrategy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysSection {
    pub strategy: KeyStrategy,
    /// Prepended verbatim to every generated key.
    pub prefix: String,
}

impl KeysSection {
    pub const PREFIX: FieldPath = FieldPath::new("keys.prefix");

    /// Keys end up as output file names, so the prefix must stay relative.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.prefix.is_empty() {
            return;
        }

        if self.prefix.contains('\\') {
            diag.error_with_hint(
                Self::PREFIX,
                format!("'{}' contains a backslash", self.prefix),
                "keys are `/`-separated on every platform",
            );
        }

        for comp in Path::new(&self.prefix).components() {
            let reason = match comp {
                Component::ParentDir => "parent directory '..' not allowed",
                Component::Prefix(_) | Component::RootDir => "absolute prefix not allowed",
                _ => continue,
            };
            diag.error(Self::PREFIX, format!("'{}': {reason}", self.prefix));
        }
    }
}
