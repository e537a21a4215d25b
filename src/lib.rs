//! Discover asset files and inject them as named entry points into a
//! bundler's build configuration.
//!
//! ```ignore
//! use assethash::{AssetHashPlugin, LogSink, UserConfig};
//!
//! let plugin = AssetHashPlugin::from_json(serde_json::json!({ "inputs": ["./src/**/*"] }))?;
//! let patch = plugin.config(&UserConfig::default(), &mut LogSink)?;
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod keys;
pub mod logger;
pub mod plugin;
pub mod resolve;
pub mod utils;

pub use config::{ConfigError, InputSpec, InputsError, PluginOptions};
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind, DiagnosticSink, LogSink};
pub use host::{ConfigPatch, EntryTable, UserConfig};
pub use keys::{KeyMapper, KeyStrategy};
pub use plugin::{AssetHashPlugin, PLUGIN_NAME};
pub use resolve::{ResolveError, ResolveMode, ResolveOptions, ResolvedFile, resolve_inputs};
