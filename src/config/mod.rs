//! Plugin options and `assethash.toml` handling.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # inputs, [resolve], [keys]
//! ├── types/         # ConfigError, InputsError, diagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # PluginOptions (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! inputs = ["assets/**/*"]
//! root = "web"
//!
//! [resolve]
//! mode = "glob"
//!
//! [keys]
//! strategy = "path"
//! prefix = ""
//! ```
//!
//! Hosts that hand over options as a dynamic object use
//! [`PluginOptions::from_json`]; the `inputs` contract is enforced there,
//! before anything on disk is looked at.

pub mod section;
pub mod types;
mod util;

pub use section::{InputSpec, KeysSection, ResolveSection};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, InputsError};
pub use util::find_config_file;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::cli::{Cli, ResolveArgs};
use crate::keys::KeyStrategy;
use crate::resolve::{ResolveMode, ResolveOptions};
use crate::{debug, log};

// ============================================================================
// root configuration
// ============================================================================

/// Everything one configuration pass needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawOptions")]
pub struct PluginOptions {
    /// Directories or glob patterns to discover.
    pub inputs: InputSpec,

    /// Project root. Relative inputs are resolved against it and `path`
    /// keys are relative to it. Defaults to the working directory.
    pub root: Option<PathBuf>,

    /// Resolution settings
    pub resolve: ResolveSection,

    /// Key derivation settings
    pub keys: KeysSection,
}

/// Wire shape of [`PluginOptions`], before the `inputs` contract is checked.
#[derive(Deserialize)]
struct RawOptions {
    inputs: Option<InputSpec>,
    #[serde(default)]
    root: Option<PathBuf>,
    #[serde(default)]
    resolve: ResolveSection,
    #[serde(default)]
    keys: KeysSection,
}

impl TryFrom<RawOptions> for PluginOptions {
    type Error = InputsError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        Ok(Self {
            inputs: raw.inputs.ok_or(InputsError::Missing)?,
            root: raw.root,
            resolve: raw.resolve,
            keys: raw.keys,
        })
    }
}

impl PluginOptions {
    pub const ROOT: FieldPath = FieldPath::new("root");

    pub fn new(inputs: InputSpec) -> Self {
        Self {
            inputs,
            root: None,
            resolve: ResolveSection::default(),
            keys: KeysSection::default(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.resolve.mode = mode;
        self
    }

    pub fn with_dot(mut self, dot: bool) -> Self {
        self.resolve.dot = dot;
        self
    }

    pub fn with_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.keys.strategy = strategy;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.keys.prefix = prefix.into();
        self
    }

    /// Parse options handed over by a host as a dynamic object.
    ///
    /// Fails if `inputs` is missing or is not an array.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let options = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((options, ignored))
    }

    /// Load options from a config file, warning about unknown fields.
    ///
    /// Relative paths in the file are taken relative to the file's directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut options, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        options.root = Some(match options.root.take() {
            Some(root) => dir.join(root),
            None => dir,
        });

        Ok(options)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Load options for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. Without one, `--input`
    /// flags alone are enough. CLI flags override file values.
    pub fn load(cli: &Cli, args: &ResolveArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut options = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?
            }
            None if !args.inputs.is_empty() => Self::new(InputSpec::default()),
            None => bail!(ConfigError::Validation(format!(
                "config file '{}' not found and no --input given",
                cli.config.display()
            ))),
        };

        options.apply_args(args);
        options.validate()?;
        Ok(options)
    }

    /// Apply CLI overrides.
    fn apply_args(&mut self, args: &ResolveArgs) {
        if !args.inputs.is_empty() {
            self.inputs = InputSpec::new(args.inputs.iter().cloned());
        }
        if args.root.is_some() {
            self.root.clone_from(&args.root);
        }
        Self::update_option(&mut self.resolve.mode, args.mode.as_ref());
        Self::update_option(&mut self.resolve.dot, args.dot.as_ref());
        Self::update_option(&mut self.keys.strategy, args.key.as_ref());
        Self::update_option(&mut self.keys.prefix, args.prefix.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, printing warnings and collecting errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.inputs.validate(&mut diag);
        self.resolve.validate(&self.inputs, &mut diag);
        self.keys.validate(&mut diag);

        if let Some(root) = &self.root {
            if !root.exists() {
                diag.error(
                    Self::ROOT,
                    format!("'{}' does not exist", root.display()),
                );
            } else if !root.is_dir() {
                diag.error(
                    Self::ROOT,
                    format!("'{}' must be a directory", root.display()),
                );
            }
        }

        diag
    }

    /// Settings for the resolver.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            mode: self.resolve.mode,
            dot: self.resolve.dot,
            root: self.root.clone(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_from_json_minimal() {
        let options = PluginOptions::from_json(json!({ "inputs": ["./src/**/*"] })).unwrap();
        assert_eq!(options, PluginOptions::new(InputSpec::new(["./src/**/*"])));
    }

    #[test]
    fn test_from_json_missing_inputs() {
        let err = PluginOptions::from_json(json!({})).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(format!("{err:#}").contains("Plugin options"));

        let ConfigError::Json(inner) = err else { unreachable!() };
        assert!(inner.to_string().contains("`inputs` option is required"));
    }

    #[test]
    fn test_from_json_single_string() {
        let err = PluginOptions::from_json(json!({ "inputs": "assets" })).unwrap_err();
        let ConfigError::Json(inner) = err else {
            panic!("expected a JSON error");
        };
        assert!(inner.to_string().contains("must be an array"));
    }

    #[test]
    fn test_from_json_full() {
        let options = PluginOptions::from_json(json!({
            "inputs": ["assets"],
            "root": "web",
            "resolve": { "mode": "walk" },
            "keys": { "strategy": "stem", "prefix": "img/" }
        }))
        .unwrap();

        assert_eq!(
            options,
            PluginOptions::new(InputSpec::new(["assets"]))
                .with_root("web")
                .with_mode(ResolveMode::Walk)
                .with_strategy(KeyStrategy::Stem)
                .with_prefix("img/")
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "inputs = [\"assets\"]\nhash = true\n[keys]\nstyle = \"x\"";
        let (options, ignored) = PluginOptions::parse_with_ignored(content).unwrap();

        assert_eq!(options.inputs.len(), 1);
        assert!(ignored.iter().any(|f| f == "hash"));
        assert!(ignored.iter().any(|f| f.contains("style")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "inputs = [\"assets\"]\n[resolve]\nmode = \"walk\"";
        let (_, ignored) = PluginOptions::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_anchors_root_to_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assethash.toml");

        fs::write(&path, "inputs = [\"assets\"]").unwrap();
        let options = PluginOptions::from_path(&path).unwrap();
        assert_eq!(options.root, Some(dir.path().to_path_buf()));

        fs::write(&path, "inputs = [\"assets\"]\nroot = \"web\"").unwrap();
        let options = PluginOptions::from_path(&path).unwrap();
        assert_eq!(options.root, Some(dir.path().join("web")));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = PluginOptions::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_validate_collects_errors() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let options = PluginOptions::new(InputSpec::new(["", "assets"]))
            .with_root(&file)
            .with_prefix("/abs/");

        let diag = options.diagnose();
        assert_eq!(diag.errors().len(), 3);
        assert!(matches!(options.validate(), Err(ConfigError::Diagnostics(_))));
    }

    #[test]
    fn test_validate_ok() {
        let dir = TempDir::new().unwrap();
        let options = PluginOptions::new(InputSpec::new(["assets/**/*"])).with_root(dir.path());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_resolve_options() {
        let options = PluginOptions::new(InputSpec::new(["assets"]))
            .with_mode(ResolveMode::Walk)
            .with_dot(true)
            .with_root("/srv/web");

        let resolve = options.resolve_options();
        assert_eq!(resolve.mode, ResolveMode::Walk);
        assert!(resolve.dot);
        assert_eq!(resolve.root, Some(PathBuf::from("/srv/web")));
    }
}
