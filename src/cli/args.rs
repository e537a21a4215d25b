//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::keys::KeyStrategy;
use crate::resolve::ResolveMode;

/// Discover asset files and inject them as bundler entry points
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assethash.toml)
    #[arg(short = 'C', long, global = true, default_value = "assethash.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the config hook and print the resulting `build.rollupOptions` patch
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,

        /// Existing host config (JSON) to merge into
        #[arg(short = 'u', long = "user-config", value_hint = clap::ValueHint::FilePath)]
        user_config: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// List discovered entry points as `key -> path`
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Shared discovery arguments. Each one overrides the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Directory or glob pattern to discover (repeatable)
    #[arg(short = 'i', long = "input", value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Project root that inputs and keys are relative to
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// How inputs are expanded into files
    #[arg(short, long, value_enum)]
    pub mode: Option<ResolveMode>,

    /// How entry keys are derived
    #[arg(short, long, value_enum)]
    pub key: Option<KeyStrategy>,

    /// String prepended to every generated key
    #[arg(long)]
    pub prefix: Option<String>,

    /// Let glob wildcards match dot-files
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub dot: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Discovery arguments of whichever command was given.
    pub fn resolve_args(&self) -> &ResolveArgs {
        match &self.command {
            Commands::Resolve { args, .. } | Commands::List { args } => args,
        }
    }
}
