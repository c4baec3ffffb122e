//! Character cursor over a single line of text.

/// Stand-in for the character before column zero.
///
/// Lookback at the start of a line sees the line terminator, never text from
/// the previous line.
pub const LINE_BOUNDARY: char = '\n';

#[derive(Debug, Clone, Default)]
pub struct LineCursor {
    chars: Vec<char>,
    pos: usize,
}

impl LineCursor {
    #[must_use]
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character immediately before the cursor, whitespace included.
    #[must_use]
    pub fn prev(&self) -> char {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
            .unwrap_or(LINE_BOUNDARY)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume characters up to (not including) the next whitespace or the end
    /// of the line.
    pub fn take_until_whitespace(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek().filter(|c| !c.is_whitespace()) {
            word.push(c);
            self.pos += 1;
        }
        word
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}
