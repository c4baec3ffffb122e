//! Declaration extractor: accumulates one selector, class or id name.
//!
//! Scanning continues across line boundaries, so a joined selector split over
//! several lines is one declaration. `,` ends the declaration and returns to
//! neutral, `{` ends it and enters the definition body, and any character
//! outside the allowed set ends it early with the cursor left on that
//! character.

use csstags_core::{Tag, TagKind};

use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::sink::TagSink;
use crate::source::LineSource;
use crate::state::ParserState;

/// Whether `c` may appear in a declaration (terminators included).
#[must_use]
pub fn is_declaration_char(c: char) -> bool {
    c.is_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '_' | '-' | '+' | '>' | '.' | ',' | ':' | '*' | '#' | '{')
}

/// Name text of the declaration in progress.
#[derive(Debug)]
struct PendingName {
    kind: TagKind,
    text: String,
}

impl PendingName {
    const fn new(kind: TagKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Finish the name. Empty names produce no tag.
    fn finish(mut self, line: u32) -> Option<Tag> {
        if self.kind == TagKind::Class {
            self.text.truncate(self.text.trim_end().len());
        }
        if self.text.is_empty() {
            return None;
        }
        Some(Tag::new(self.text, self.kind, line))
    }
}

impl<S: LineSource, K: TagSink> Scanner<S, K> {
    /// Extract one declaration starting at the cursor.
    ///
    /// The cursor sits on the character that triggered the declaration. For
    /// classes and ids that is the `.` or `#` marker, which is not part of the
    /// name.
    pub(crate) fn extract_declaration(&mut self, kind: TagKind) -> Result<ParserState, ScanError> {
        if matches!(kind, TagKind::Class | TagKind::Id) {
            self.cursor.bump();
        }

        let mut pending = PendingName::new(kind);
        loop {
            let Some(c) = self.cursor.peek() else {
                if self.load_next_line()? {
                    continue;
                }
                self.finish(pending);
                return Ok(ParserState::AtEnd);
            };

            match c {
                ',' => {
                    self.cursor.bump();
                    self.finish(pending);
                    return Ok(ParserState::Neutral);
                }
                '{' => {
                    self.cursor.bump();
                    self.finish(pending);
                    return Ok(ParserState::InDefinition);
                }
                c if is_declaration_char(c) => {
                    pending.push(c);
                    self.cursor.bump();
                }
                _ => {
                    self.finish(pending);
                    return Ok(ParserState::Neutral);
                }
            }
        }
    }

    fn finish(&mut self, pending: PendingName) {
        if let Some(tag) = pending.finish(self.line_number) {
            self.emit(tag);
        }
    }
}
