use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `csstags` binary.
#[derive(Debug, Parser)]
#[command(
    name = "csstags",
    version,
    about = "csstags - selector, class and id tags for stylesheets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: ctags, json, jsonl (defaults to output.format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file layered over the user and project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}
