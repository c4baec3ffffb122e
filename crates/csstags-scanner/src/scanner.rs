//! Line state machine and the driving loop.
//!
//! [`Scanner::advance`] consumes one line under an incoming [`ParserState`] and
//! returns the state for the next line. When a declaration begins it hands the
//! cursor to the declaration extractor, which may pull further lines from the
//! source before returning.

use csstags_core::Tag;

use crate::cursor::LineCursor;
use crate::error::ScanError;
use crate::sink::TagSink;
use crate::source::LineSource;
use crate::state::{ParserState, Step};

/// Totals for one completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: u32,
    pub tags: usize,
    pub final_state: ParserState,
}

/// One parse run. Owns its state exclusively; nothing is shared across runs.
#[derive(Debug)]
pub struct Scanner<S, K> {
    pub(crate) source: S,
    pub(crate) sink: K,
    pub(crate) cursor: LineCursor,
    pub(crate) line_number: u32,
    tags: usize,
}

impl<S: LineSource, K: TagSink> Scanner<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            cursor: LineCursor::default(),
            line_number: 0,
            tags: 0,
        }
    }

    /// Drive the scan until the source is exhausted or the state reaches
    /// [`ParserState::AtEnd`].
    ///
    /// # Errors
    /// Returns [`ScanError::Io`] if the line source fails.
    pub fn run(&mut self) -> Result<ScanSummary, ScanError> {
        let mut state = ParserState::Neutral;
        while let Some(line) = self.source.next_line()? {
            state = self.advance(&line, state)?;
            if state.is_at_end() {
                break;
            }
        }

        let summary = ScanSummary {
            lines: self.line_number,
            tags: self.tags,
            final_state: state,
        };
        tracing::debug!(
            lines = summary.lines,
            tags = summary.tags,
            final_state = %summary.final_state,
            "scan finished"
        );
        Ok(summary)
    }

    /// Scan one already-fetched line under `state`.
    ///
    /// # Errors
    /// Returns [`ScanError::Io`] if a multi-line declaration needs another
    /// line and the source fails.
    pub fn advance(&mut self, line: &str, state: ParserState) -> Result<ParserState, ScanError> {
        self.load(line);
        self.scan_cursor(state)
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    fn scan_cursor(&mut self, mut state: ParserState) -> Result<ParserState, ScanError> {
        loop {
            if state.is_at_end() {
                return Ok(state);
            }
            if state == ParserState::Neutral {
                self.cursor.skip_whitespace();
            }
            let Some(c) = self.cursor.peek() else {
                return Ok(state);
            };

            match state.step(c, self.cursor.prev()) {
                Step::Stay => {
                    self.cursor.bump();
                }
                Step::Enter(next) => {
                    self.cursor.bump();
                    state = next;
                }
                Step::Declaration(kind) => {
                    state = self.extract_declaration(kind)?;
                }
                Step::AtRule => {
                    self.cursor.bump();
                    state = self.read_at_rule();
                }
            }
        }
    }

    /// Read the identifier after `@` and pick the state it opens.
    fn read_at_rule(&mut self) -> ParserState {
        let keyword = self.cursor.take_until_whitespace();
        ParserState::from_at_keyword(&keyword).map_or(ParserState::Neutral, |state| {
            tracing::debug!(line = self.line_number, %keyword, %state, "entering at-rule");
            state
        })
    }

    pub(crate) fn load(&mut self, line: &str) {
        self.line_number += 1;
        self.cursor = LineCursor::new(line);
    }

    /// Replace the current line with the next one from the source.
    ///
    /// Returns `false` once the source is exhausted.
    pub(crate) fn load_next_line(&mut self) -> Result<bool, ScanError> {
        match self.source.next_line()? {
            Some(line) => {
                self.load(&line);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub(crate) fn emit(&mut self, tag: Tag) {
        tracing::trace!(name = %tag.name, kind = %tag.kind, line = tag.line, "tag");
        self.tags += 1;
        self.sink.emit(tag);
    }
}

#[cfg(test)]
mod tests;
