//! Byte cursor for scanning a single shorthand line

/// Cursor over the bytes of a line.
///
/// Every byte the scanner stops on is ASCII, so slices taken between two
/// cursor positions always fall on character boundaries.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds, returning how many bytes were consumed
    pub fn advance_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.advance();
        }
        self.pos - start
    }

    /// Skip spaces and tabs
    pub fn skip_whitespace(&mut self) -> usize {
        self.advance_while(|b| matches!(b, b' ' | b'\t'))
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Text from `start` up to the current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}
