//! Shorthand to XML conversion loop

mod stack;

pub use stack::{ElementStack, Frame};

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::{
    abbrev::AbbreviationTable,
    config::Options,
    error::Result,
    formatter::XmlFormatter,
    lexer::{split_indent, LineReader, LogicalLine},
    parser::{LineKind, TagLine},
};

/// Converts shorthand input to XML with a fixed set of options and
/// abbreviations.
///
/// A converter holds no per-run state, so one instance can drive any number
/// of conversions.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    options: &'a Options,
    abbreviations: &'a AbbreviationTable,
}

impl<'a> Converter<'a> {
    pub fn new(options: &'a Options, abbreviations: &'a AbbreviationTable) -> Self {
        Self {
            options,
            abbreviations,
        }
    }

    /// Read shorthand lines from `input` and write XML lines to `output`.
    ///
    /// The first error aborts the run. Lines already written stay written,
    /// but nothing belonging to the failing line is.
    pub fn convert<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let mut stack = ElementStack::new();
        let mut out = String::new();
        let mut lines = LineReader::new(input);

        for line in lines.by_ref() {
            let LogicalLine { number, text } = line?;
            out.clear();
            self.process_line(&text, &mut stack, &mut out)
                .map_err(|e| e.with_line(number))?;
            output.write_all(out.as_bytes())?;
        }

        out.clear();
        self.close_frames(stack.close_all(), &mut out)?;
        output.write_all(out.as_bytes())?;
        output.flush()?;

        debug!(lines = lines.line_number(), "conversion finished");
        Ok(())
    }

    /// Convert a whole shorthand document held in memory
    pub fn convert_str(&self, input: &str) -> Result<String> {
        let mut output = Vec::with_capacity(input.len() + input.len() / 2);
        self.convert(input.as_bytes(), &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    fn process_line(
        &self,
        text: &str,
        stack: &mut ElementStack,
        out: &mut String,
    ) -> Result<()> {
        let formatter = XmlFormatter::new(self.options);
        let (level, content) = split_indent(text, self.options.tab_spaces())?;
        let kind = LineKind::classify(content);
        trace!(level, ?kind, "classified line");

        match kind {
            LineKind::XsComment => {}
            LineKind::XmlComment => {
                self.close_frames(stack.close_down_to(level), out)?;
                formatter.verbatim(out, text);
            }
            LineKind::Preamble | LineKind::Declaration | LineKind::Text => {
                formatter.verbatim(out, text);
            }
            LineKind::Tag => {
                let tag = TagLine::parse(content)?;

                // expand everything before the stack changes
                let name = self.abbreviations.expand(&tag.name)?;
                let mut attributes = Vec::with_capacity(tag.attributes.len());
                for (attr, value) in &tag.attributes {
                    attributes.push((
                        self.abbreviations.expand(attr)?,
                        self.abbreviations.expand(value)?,
                    ));
                }

                self.close_frames(stack.close_down_to(level), out)?;
                formatter.open_tag(out, level, name, &attributes, tag.empty);
                if !tag.empty {
                    stack.push(level, tag.name);
                }
            }
        }
        Ok(())
    }

    fn close_frames(&self, frames: Vec<Frame>, out: &mut String) -> Result<()> {
        let formatter = XmlFormatter::new(self.options);
        for frame in frames {
            let name = self.abbreviations.expand(&frame.tag)?;
            formatter.close_tag(out, frame.level, name);
        }
        Ok(())
    }
}
