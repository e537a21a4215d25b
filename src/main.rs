//! assethash - discover asset files and inject them as bundler entry points.

use anyhow::Result;
use assethash::cli::{Cli, Commands, list, resolve};
use assethash::config::PluginOptions;
use assethash::logger::set_verbose;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let args = cli.resolve_args();
    set_verbose(args.verbose);

    let options = PluginOptions::load(&cli, args)?;

    match &cli.command {
        Commands::Resolve {
            user_config,
            pretty,
            output,
            ..
        } => resolve::run_resolve(
            options,
            &resolve::ResolveOutput {
                user_config: user_config.clone(),
                pretty: *pretty,
                output: output.clone(),
            },
        ),
        Commands::List { .. } => list::run_list(options),
    }
}
