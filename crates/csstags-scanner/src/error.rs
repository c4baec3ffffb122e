//! Scanner error types for csstags-scanner.
//!
//! Malformed stylesheet input is never an error. Only the line source can fail.

/// Errors that can occur while driving a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
