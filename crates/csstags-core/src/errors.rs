//! Cross-cutting error types for csstags.
//!
//! Domain-specific errors (`ScanError`, `ConfigError`) are defined in their
//! respective crates. They converge into `anyhow` in `csstags-cli`.

use thiserror::Error;

/// Errors that can be raised by any csstags crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A kind letter or name did not match any known tag kind.
    #[error("Unknown tag kind: {0}")]
    UnknownKind(String),
}
