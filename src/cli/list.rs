//! `assethash list`: show what would be injected.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::PluginOptions;
use crate::diagnostics::LogSink;
use crate::log;
use crate::plugin::AssetHashPlugin;
use crate::utils::plural_count;

pub fn run_list(options: PluginOptions) -> Result<()> {
    let plugin = AssetHashPlugin::new(options);
    let table = plugin.discover(&mut LogSink)?;

    if table.is_empty() {
        log!("resolve"; "no entry points found");
        return Ok(());
    }

    for (key, path) in &table {
        println!("{} {} {}", key.green(), "->".dimmed(), path);
    }
    log!("resolve"; "{}", plural_count(table.len(), "entry point"));

    Ok(())
}
