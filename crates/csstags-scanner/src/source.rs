//! Line sources feeding the scanner.

use std::io::{self, BufRead};

/// A lazy, finite sequence of lines.
///
/// Lines are returned without their terminator. `Ok(None)` marks exhaustion;
/// a source is never restarted once exhausted.
pub trait LineSource {
    /// Fetch the next line.
    ///
    /// # Errors
    /// Returns the underlying read error, if any.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Lines of an in-memory string.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> StrSource<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl LineSource for StrSource<'_> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.next().map(str::to_owned))
    }
}

/// Lines read from any buffered reader. Strips `\n` and `\r\n`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(Some(std::mem::take(&mut self.buf)))
    }
}
