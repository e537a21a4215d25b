//! Command-line interface module.

mod args;
pub mod list;
pub mod resolve;

pub use args::{Cli, Commands, ResolveArgs};
