//! Output configuration.

use serde::{Deserialize, Serialize};

/// How tags are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagFormat {
    /// `name<TAB>path<TAB>line;"<TAB>kind` lines.
    #[default]
    Ctags,
    /// One pretty-printed JSON array.
    Json,
    /// One JSON object per line.
    Jsonl,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: TagFormat,

    /// Sort ctags output by name, as a tags file expects.
    #[serde(default)]
    pub sort: bool,
}
