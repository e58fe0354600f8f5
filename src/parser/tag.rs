//! Tag line tokenizer
//!
//! Grammar of a tag line (after indentation):
//!
//! ```text
//! tag-line  = "<" name *attribute [ws "/"]
//! attribute = *ws name [ "=" / ws ] *ws DQUOTE *(not DQUOTE) DQUOTE *ws
//! name      = ( "$" / ALPHA / "_" / ":" ) 1*( ALPHA / DIGIT / "_" / ":" / "." )
//!           / [ "$" ] ALPHA
//! ```

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result};
use crate::lexer::Cursor;

/// Trailing character that marks an empty (self-closing) element
pub const EMPTY_TAG_MARKER: char = '/';

/// A tokenized tag line, before abbreviation expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub name: String,
    /// Attributes in order of first appearance; a repeated name keeps its
    /// first position and takes the last value
    pub attributes: IndexMap<String, String>,
    /// Self-closing element, never pushed on the element stack
    pub empty: bool,
}

impl TagLine {
    /// Tokenize the content of a line already classified as a tag line
    pub fn parse(content: &str) -> Result<Self> {
        let trimmed = content.trim_end_matches([' ', '\t']);
        let (body, empty) = match trimmed.strip_suffix(EMPTY_TAG_MARKER) {
            Some(head) => (head.trim_end_matches([' ', '\t']), true),
            None => (trimmed, false),
        };

        let mut cursor = Cursor::new(body);
        if !cursor.consume(b'<') {
            return Err(Error::new(ErrorKind::InvalidTagLine(content.to_string())));
        }
        let name = scan_name(&mut cursor)
            .ok_or_else(|| Error::new(ErrorKind::InvalidTagLine(content.to_string())))?;
        cursor.skip_whitespace();

        let mut attributes = IndexMap::new();
        while !cursor.is_eof() {
            let (attr_name, value) = scan_attribute(&mut cursor)
                .ok_or_else(|| Error::new(ErrorKind::InvalidAttributeLine(content.to_string())))?;
            attributes.insert(attr_name.to_string(), value.to_string());
        }

        Ok(Self {
            name: name.to_string(),
            attributes,
            empty,
        })
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'$' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b':' | b'.')
}

/// Tag or attribute name; a lone character must be a letter
fn scan_name<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos();
    let first = cursor.current().filter(|&b| is_name_start(b))?;
    cursor.advance();
    let rest = cursor.advance_while(is_name_char);
    if rest == 0 && !first.is_ascii_alphabetic() {
        return None;
    }
    Some(cursor.slice_from(start))
}

/// One `name "value"` pair, including surrounding whitespace
fn scan_attribute<'a>(cursor: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    cursor.skip_whitespace();
    let name = scan_name(cursor)?;

    if matches!(cursor.current(), Some(b'=' | b' ' | b'\t')) {
        cursor.advance();
    }
    cursor.skip_whitespace();

    if !cursor.consume(b'"') {
        return None;
    }
    let start = cursor.pos();
    cursor.advance_while(|b| b != b'"');
    let value = cursor.slice_from(start);
    if !cursor.consume(b'"') {
        return None;
    }
    cursor.skip_whitespace();

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(tag: &TagLine) -> Vec<(&str, &str)> {
        tag.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_bare_tag() -> Result<()> {
        let tag = TagLine::parse("<root")?;
        assert_eq!(tag.name, "root");
        assert!(tag.attributes.is_empty());
        assert!(!tag.empty);
        Ok(())
    }

    #[test]
    fn test_single_letter_tags() -> Result<()> {
        assert_eq!(TagLine::parse("<a")?.name, "a");
        assert_eq!(TagLine::parse("<$a")?.name, "$a");
        assert!(TagLine::parse("<_").is_err());
        assert!(TagLine::parse("<$").is_err());
        assert!(TagLine::parse("<1a").is_err());
        Ok(())
    }

    #[test]
    fn test_qualified_names() -> Result<()> {
        let tag = TagLine::parse("<xs:element name \"a.b\"")?;
        assert_eq!(tag.name, "xs:element");
        assert_eq!(attrs(&tag), vec![("name", "a.b")]);
        Ok(())
    }

    #[test]
    fn test_attribute_separators() -> Result<()> {
        let tag = TagLine::parse("<t a=\"1\" b \"2\" c= \"3\" d  \"4\" e\"5\"")?;
        assert_eq!(
            attrs(&tag),
            vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5")]
        );
        Ok(())
    }

    #[test]
    fn test_empty_value_and_spaces_in_value() -> Result<()> {
        let tag = TagLine::parse("<t a \"\" b \"two words\"")?;
        assert_eq!(attrs(&tag), vec![("a", ""), ("b", "two words")]);
        Ok(())
    }

    #[test]
    fn test_empty_tag_marker() -> Result<()> {
        let tag = TagLine::parse("<child /")?;
        assert_eq!(tag.name, "child");
        assert!(tag.empty);

        let tag = TagLine::parse("<child a \"1\"/  ")?;
        assert!(tag.empty);
        assert_eq!(attrs(&tag), vec![("a", "1")]);

        let tag = TagLine::parse("<child a \"x/\"")?;
        assert!(!tag.empty);
        assert_eq!(attrs(&tag), vec![("a", "x/")]);
        Ok(())
    }

    #[test]
    fn test_duplicate_attribute_keeps_first_position() -> Result<()> {
        let tag = TagLine::parse("<t a \"1\" b \"2\" a \"3\"")?;
        assert_eq!(attrs(&tag), vec![("a", "3"), ("b", "2")]);
        Ok(())
    }

    #[test]
    fn test_invalid_tag_line() {
        let err = TagLine::parse("< root").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidTagLine(_)));
        let err = TagLine::parse("</").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidTagLine(_)));
    }

    #[test]
    fn test_invalid_attribute_line() {
        for line in [
            "<t a",
            "<t a \"unterminated",
            "<t a = \"1\"",
            "<t junk b \"1\"",
            "<t a \"1\" ?",
        ] {
            let err = TagLine::parse(line).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::InvalidAttributeLine(_)),
                "{line}"
            );
        }
    }
}
