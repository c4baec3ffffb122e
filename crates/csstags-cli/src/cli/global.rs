use std::path::PathBuf;

use clap::ValueEnum;
use csstags_config::TagFormat;

/// Output mode for tag listings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Ctags,
    Json,
    Jsonl,
}

impl From<TagFormat> for OutputFormat {
    fn from(format: TagFormat) -> Self {
        match format {
            TagFormat::Ctags => Self::Ctags,
            TagFormat::Json => Self::Json,
            TagFormat::Jsonl => Self::Jsonl,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl GlobalFlags {
    /// `--format` if given, otherwise the configured `output.format`.
    #[must_use]
    pub fn resolve_format(&self, configured: TagFormat) -> OutputFormat {
        self.format.unwrap_or_else(|| configured.into())
    }
}
