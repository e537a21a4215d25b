//! Configuration-time entry point.
//!
//! ```text
//! inputs ──resolve──▶ files ──keys──▶ file map ──merge──▶ ConfigPatch
//! ```
//!
//! One call to [`AssetHashPlugin::config`] per build configuration pass.
//! Nothing is cached between calls and nothing is written to disk.

use std::path::PathBuf;

use crate::config::{ConfigError, PluginOptions};
use crate::diagnostics::DiagnosticSink;
use crate::host::{ConfigPatch, EntryTable, UserConfig, merge_config};
use crate::keys::KeyMapper;
use crate::resolve::{ResolveError, resolve_inputs};
use crate::utils::path::absolutize;
use crate::debug;
use crate::utils::plural_count;

/// Name the host shows for this plugin.
pub const PLUGIN_NAME: &str = "vite-plugin-assethash";

/// Discovers asset files and injects them as build entry points.
#[derive(Debug, Clone)]
pub struct AssetHashPlugin {
    options: PluginOptions,
}

impl AssetHashPlugin {
    pub fn new(options: PluginOptions) -> Self {
        Self { options }
    }

    /// Build the plugin from a host's dynamic options object.
    ///
    /// A missing or non-array `inputs` fails here, before any filesystem
    /// access.
    pub fn from_json(options: serde_json::Value) -> Result<Self, ConfigError> {
        PluginOptions::from_json(options).map(Self::new)
    }

    pub const fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Resolve the inputs and key every file found.
    pub fn discover(&self, sink: &mut dyn DiagnosticSink) -> Result<EntryTable, ResolveError> {
        let cwd = std::env::current_dir().map_err(|err| ResolveError::Io(PathBuf::from("."), err))?;
        let base = match &self.options.root {
            Some(root) => absolutize(root, &cwd),
            None => cwd.clone(),
        };

        let files = resolve_inputs(&self.options.inputs, &self.options.resolve_options(), sink)?;

        let keys = &self.options.keys;
        let mapper = KeyMapper::new(keys.strategy, keys.prefix.as_str(), base, cwd);
        let table = mapper.map(&files);

        debug!(
            "keys";
            "{} from {}",
            plural_count(table.len(), "entry point"),
            plural_count(files.len(), "file")
        );

        Ok(table)
    }

    /// The config hook: merge discovered entries into the caller's config.
    ///
    /// Returns only `build.rollupOptions`, for the host to shallow-merge.
    /// `user_config` is not modified.
    pub fn config(
        &self,
        user_config: &UserConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<ConfigPatch, ResolveError> {
        let generated = self.discover(sink)?;
        Ok(merge_config(user_config, generated))
    }
}
