//! `[resolve]` section configuration.
//!
//! ```toml
//! [resolve]
//! mode = "walk"   # "glob" (default) or "walk"
//! dot = false     # let wildcards match dot files
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, InputSpec};
use crate::resolve::ResolveMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveSection {
    /// How each input entry is interpreted.
    pub mode: ResolveMode,
    /// Match dot-prefixed names with wildcards (glob mode only).
    pub dot: bool,
}

impl ResolveSection {
    pub const MODE: FieldPath = FieldPath::new("resolve.mode");
    pub const DOT: FieldPath = FieldPath::new("resolve.dot");

    /// Flag settings that contradict the chosen mode.
    pub fn validate(&self, inputs: &InputSpec, diag: &mut ConfigDiagnostics) {
        if self.mode != ResolveMode::Walk {
            return;
        }

        if self.dot && inputs.excludes().next().is_none() {
            diag.warn(Self::DOT, "has no effect in walk mode, every file is visited");
        }

        for entry in inputs.includes().filter(|e| e.contains(['*', '?', '[', '{'])) {
            diag.warn(
                Self::MODE,
                format!("'{entry}' looks like a glob pattern but mode is \"walk\""),
            );
        }
    }
}
