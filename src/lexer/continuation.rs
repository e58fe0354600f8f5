use std::io::{BufRead, Lines};

use tracing::trace;

use crate::error::{Error, ErrorKind, Result};

/// A physical line ending with this character continues on the next line
pub const CONTINUATION_MARKER: char = '\\';

/// One shorthand line, possibly joined from several physical lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Number (1-based) of the last physical line that went into this one
    pub number: usize,
    pub text: String,
}

/// Iterator over the logical lines of a reader
pub struct LineReader<R> {
    lines: Lines<R>,
    line_number: usize,
    pending: String,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            pending: String::new(),
            finished: false,
        }
    }

    /// Number of physical lines read so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.line_number += 1;
                    if let Some(head) = line.strip_suffix(CONTINUATION_MARKER) {
                        trace!(line = self.line_number, "line continues");
                        self.pending.push_str(head);
                        continue;
                    }

                    let text = if self.pending.is_empty() {
                        line
                    } else {
                        let mut joined = std::mem::take(&mut self.pending);
                        joined.push_str(&line);
                        joined
                    };
                    return Some(Ok(LogicalLine {
                        number: self.line_number,
                        text,
                    }));
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(Error::from(e).with_line(self.line_number + 1)));
                }
                None => {
                    self.finished = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    return Some(Err(
                        Error::new(ErrorKind::TruncatedContinuation).with_line(self.line_number)
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Result<Vec<LogicalLine>> {
        LineReader::new(input.as_bytes()).collect()
    }

    #[test]
    fn test_plain_lines() -> Result<()> {
        let lines = collect("<root\n    text\n")?;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].number, 2);
        assert_eq!(lines[1].text, "    text");
        Ok(())
    }

    #[test]
    fn test_joins_continued_lines() -> Result<()> {
        let lines = collect("<a b \"1\" \\\nc \"2\" \\\nd \"3\"\n<e")?;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "<a b \"1\" c \"2\" d \"3\"");
        assert_eq!(lines[0].number, 3);
        assert_eq!(lines[1].number, 4);
        Ok(())
    }

    #[test]
    fn test_crlf_terminators() -> Result<()> {
        let lines = collect("<a \\\r\nb \"1\"\r\n")?;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "<a b \"1\"");
        Ok(())
    }

    #[test]
    fn test_empty_continuation_contributes_nothing() -> Result<()> {
        let lines = collect("\\\n<a\n")?;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "<a");
        assert_eq!(lines[0].number, 2);
        Ok(())
    }

    #[test]
    fn test_truncated_continuation_fails() {
        let err = collect("<a\n<b c \"1\" \\").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::TruncatedContinuation);
        assert_eq!(err.line(), Some(2));
    }
}
