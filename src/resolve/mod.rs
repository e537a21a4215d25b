//! Input resolution: turn an [`InputSpec`] into existing files.
//!
//! Two strategies, picked by [`ResolveMode`]:
//!
//! | Mode   | Entry means      | Missing / empty entry        |
//! |--------|------------------|------------------------------|
//! | `glob` | glob pattern     | `NoMatches` warning          |
//! | `walk` | directory root   | `MissingRoot` warning        |
//!
//! Entries starting with `!` are exclusion patterns in either mode. The
//! result is deduplicated (first occurrence wins) and nothing on disk is
//! touched.

mod error;
mod pattern;
mod walk;

pub use error::ResolveError;

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::InputSpec;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::debug;
use crate::utils::path::absolutize;
use crate::utils::plural_count;

/// A file found on disk, plus the directory it was found from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// The file itself, as discovered (relative to the process or absolute).
    pub path: PathBuf,
    /// The walked directory, or the literal base of the matching pattern.
    pub root: PathBuf,
}

impl ResolvedFile {
    pub fn new(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: root.into(),
        }
    }
}

/// How input entries are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Each entry is a glob pattern.
    #[default]
    Glob,
    /// Each entry is a directory walked recursively.
    Walk,
}

/// Resolution settings for one configuration pass.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub mode: ResolveMode,
    /// Let wildcards match dot-prefixed names (glob mode only).
    pub dot: bool,
    /// Directory relative entries are anchored to. `None` means the
    /// process working directory.
    pub root: Option<PathBuf>,
}

impl ResolveOptions {
    /// Anchor a walk entry to the configured root, if any.
    fn anchor(&self, input: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(input),
            None => PathBuf::from(input),
        }
    }
}

/// Resolve every entry of `inputs`, in order.
///
/// Missing roots and empty patterns are reported to `sink` and contribute
/// nothing. `!` entries remove matching files from the whole result.
/// Pattern syntax errors and I/O failures abort the pass.
pub fn resolve_inputs(
    inputs: &InputSpec,
    options: &ResolveOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<ResolvedFile>, ResolveError> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let base = match &options.root {
        Some(root) => absolutize(root, &cwd),
        None => cwd.clone(),
    };
    let exclusions = pattern::Exclusions::new(inputs.excludes(), &base, options.dot)?;

    let mut seen = FxHashSet::default();
    let mut files = Vec::new();

    for input in inputs.includes() {
        let found = match options.mode {
            ResolveMode::Walk => match walk::walk_root(&options.anchor(input))? {
                Some(found) => found,
                None => {
                    sink.warn(Diagnostic::missing_root(input));
                    continue;
                }
            },
            ResolveMode::Glob => {
                let found = pattern::expand(input, options.root.as_deref(), options.dot)?;
                if found.is_empty() {
                    sink.warn(Diagnostic::no_matches(input));
                }
                found
            }
        };

        debug!("resolve"; "{} -> {}", input, plural_count(found.len(), "file"));

        for file in found {
            let key = dedup_key(&file.path, &cwd);
            if !exclusions.is_empty() && exclusions.excludes(&key) {
                debug!("resolve"; "excluded {}", file.path.display());
                continue;
            }
            if seen.insert(key) {
                files.push(file);
            }
        }
    }

    Ok(files)
}

/// Absolute, lexically cleaned form used to spot the same file twice.
fn dedup_key(path: &Path, cwd: &Path) -> PathBuf {
    absolutize(path, cwd)
}
