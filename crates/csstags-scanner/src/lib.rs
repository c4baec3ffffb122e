//! # csstags-scanner
//!
//! Single-pass lexical tagger for stylesheets.
//!
//! Text is scanned character by character under a finite [`ParserState`]
//! carried from line to line. No syntax tree is built. Each selector, class
//! or id declaration becomes one [`Tag`](csstags_core::Tag), emitted to a
//! [`TagSink`] in source order.
//!
//! ```
//! use csstags_core::TagKind;
//!
//! let tags = csstags_scanner::scan_str("#bar, .baz { }").unwrap();
//! assert_eq!(tags[0].name, "bar");
//! assert_eq!(tags[0].kind, TagKind::Id);
//! assert_eq!(tags[1].name, "baz");
//! assert_eq!(tags[1].kind, TagKind::Class);
//! ```

pub mod cursor;
pub mod declaration;
pub mod definition;
pub mod error;
pub mod scanner;
pub mod sink;
pub mod source;
pub mod state;

use std::io::BufRead;

use csstags_core::Tag;

pub use definition::{ParserDefinition, STYLESHEET};
pub use error::ScanError;
pub use scanner::{ScanSummary, Scanner};
pub use sink::{KindFilter, TagSink};
pub use source::{LineSource, ReaderSource, StrSource};
pub use state::{ParserState, Step};

/// Scan every line of `source`, emitting tags into `sink`.
///
/// # Errors
/// Returns [`ScanError::Io`] if the line source fails.
pub fn run<S: LineSource, K: TagSink>(source: S, sink: K) -> Result<ScanSummary, ScanError> {
    Scanner::new(source, sink).run()
}

/// Scan an in-memory stylesheet.
///
/// # Errors
/// Never fails for in-memory text; the `Result` mirrors [`run`].
pub fn scan_str(text: &str) -> Result<Vec<Tag>, ScanError> {
    let mut tags = Vec::new();
    run(StrSource::new(text), &mut tags)?;
    Ok(tags)
}

/// Scan a stylesheet from a buffered reader.
///
/// # Errors
/// Returns [`ScanError::Io`] on read failure or invalid UTF-8.
pub fn scan_reader<R: BufRead>(reader: R) -> Result<Vec<Tag>, ScanError> {
    let mut tags = Vec::new();
    run(ReaderSource::new(reader), &mut tags)?;
    Ok(tags)
}
