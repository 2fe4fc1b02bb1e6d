// src/input/tokens.rs
use std::io::{self, BufRead};

/// Upper bound on characters skipped after a malformed token.
pub const DISCARD_LIMIT: usize = 10_000;

/// Whitespace-delimited tokens over a line-buffered reader.
///
/// Tokens are taken from the current line until it runs out, so several
/// values may share a line. Bytes that are not UTF-8 are replaced and will
/// simply fail to parse as integers.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
    token_start: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new(), pos: 0, token_start: 0 }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(offset) = self.line[self.pos..].find(|c: char| !c.is_whitespace()) {
                let start = self.pos + offset;
                let len = self.line[start..]
                    .find(char::is_whitespace)
                    .unwrap_or(self.line.len() - start);
                self.token_start = start;
                self.pos = start + len;
                return Ok(Some(self.line[start..self.pos].to_owned()));
            }
            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    /// Skips from the start of the last token through the next newline, or
    /// [`DISCARD_LIMIT`] characters, whichever comes first.
    pub fn discard_line(&mut self) {
        self.pos = self.token_start;
        let rest = &self.line[self.pos..];
        let mut skipped = 0;
        for (offset, c) in rest.char_indices() {
            if skipped == DISCARD_LIMIT {
                self.pos += offset;
                self.token_start = self.pos;
                return;
            }
            skipped += 1;
            if c == '\n' {
                self.pos += offset + c.len_utf8();
                self.token_start = self.pos;
                return;
            }
        }
        // Last line without a trailing newline.
        self.pos = self.line.len();
        self.token_start = self.pos;
    }

    fn fill_line(&mut self) -> io::Result<bool> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        self.line = String::from_utf8_lossy(&buf).into_owned();
        self.pos = 0;
        self.token_start = 0;
        Ok(read > 0)
    }
}
