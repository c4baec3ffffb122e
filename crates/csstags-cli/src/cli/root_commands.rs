use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan stylesheets and print their tags.
    Scan(ScanArgs),
    /// List the tag kinds and whether each is enabled.
    Kinds,
    /// Print the JSON Schema of a tag record.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Files or directories to scan ("-" reads stdin)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Kind letters to emit, e.g. "ci" (overrides scan.kinds)
    #[arg(short, long)]
    pub kinds: Option<String>,

    /// Sort tags by name, then path and line
    #[arg(short, long)]
    pub sort: bool,

    /// Walk directories without honoring .gitignore, .ignore or hidden-file rules
    #[arg(long)]
    pub no_ignore: bool,

    /// Glob excluded from directory walks (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}
