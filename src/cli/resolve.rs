//! `assethash resolve`: run the config hook and print the patch.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::PluginOptions;
use crate::diagnostics::LogSink;
use crate::host::{ConfigPatch, UserConfig};
use crate::log;
use crate::plugin::AssetHashPlugin;
use crate::utils::plural_count;

/// Output settings for the resolve command.
#[derive(Debug, Clone, Default)]
pub struct ResolveOutput {
    pub user_config: Option<PathBuf>,
    pub pretty: bool,
    pub output: Option<PathBuf>,
}

pub fn run_resolve(options: PluginOptions, out: &ResolveOutput) -> Result<()> {
    let user_config = match &out.user_config {
        Some(path) => read_user_config(path)?,
        None => UserConfig::default(),
    };

    let plugin = AssetHashPlugin::new(options);
    let patch = plugin.config(&user_config, &mut LogSink)?;

    let formatted = format_patch(&patch, out.pretty)?;

    if let Some(ref output_path) = out.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!(
            "resolve";
            "wrote {} to {}",
            plural_count(patch.input().len(), "entry point"),
            output_path.display()
        );
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn read_user_config(path: &Path) -> Result<UserConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    UserConfig::from_json(value).with_context(|| format!("Invalid host config in {}", path.display()))
}

fn format_patch(patch: &ConfigPatch, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(patch)?
    } else {
        serde_json::to_string(patch)?
    };
    Ok(formatted)
}
