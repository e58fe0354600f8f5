//! Abbreviation table and `$` expansion
//!
//! Tag names, attribute names and attribute values starting with `$` are
//! looked up in an [`AbbreviationTable`] and replaced by their expansion.

use std::io::BufRead;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Marker that introduces an abbreviation
pub const ABBREVIATION_PREFIX: char = '$';

/// Built-in entries present in every new table
pub const BUILTIN_ABBREVIATIONS: [(&str, &str); 2] = [
    ("ns-xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("ns-xs", "http://www.w3.org/2001/XMLSchema"),
];

/// Mapping from abbreviation key (without `$`) to its expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: IndexMap<String, String>,
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        let entries = BUILTIN_ABBREVIATIONS
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Self { entries }
    }
}

impl AbbreviationTable {
    /// Table holding only the built-in XML Schema namespaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with no entries at all
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Define or redefine an abbreviation, returning the previous expansion
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Expand `token` if it starts with `$`, otherwise return it unchanged
    pub fn expand<'a>(&'a self, token: &'a str) -> Result<&'a str> {
        let Some(key) = token.strip_prefix(ABBREVIATION_PREFIX) else {
            return Ok(token);
        };
        if key.is_empty() {
            return Err(Error::new(ErrorKind::InvalidAbbreviation));
        }
        self.get(key)
            .ok_or_else(|| Error::new(ErrorKind::UndefinedAbbreviation(key.to_string())))
    }

    /// Read `key=value` entries into the table.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. The first
    /// `=` or `:` separates key from value; surrounding whitespace is trimmed.
    /// Later entries overwrite earlier ones.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut loaded = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.map_err(|e| Error::from(e).with_line(line_number))?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') || entry.starts_with('!') {
                continue;
            }

            let Some((key, value)) = entry.split_once(['=', ':']) else {
                return Err(
                    Error::new(ErrorKind::InvalidAbbreviationFile(entry.to_string()))
                        .with_line(line_number),
                );
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(
                    Error::new(ErrorKind::InvalidAbbreviationFile(entry.to_string()))
                        .with_line(line_number),
                );
            }

            debug!("abbreviation ${} -> {}", key, value.trim());
            self.insert(key, value.trim());
            loaded += 1;
        }
        Ok(loaded)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AbbreviationTable {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_namespaces() -> Result<()> {
        let table = AbbreviationTable::new();
        assert_eq!(
            table.expand("$ns-xsi")?,
            "http://www.w3.org/2001/XMLSchema-instance"
        );
        assert_eq!(table.expand("$ns-xs")?, "http://www.w3.org/2001/XMLSchema");
        Ok(())
    }

    #[test]
    fn test_plain_token_unchanged() -> Result<()> {
        let table = AbbreviationTable::empty();
        assert_eq!(table.expand("child")?, "child");
        assert_eq!(table.expand("a$b")?, "a$b");
        assert_eq!(table.expand("")?, "");
        Ok(())
    }

    #[test]
    fn test_bare_dollar_is_invalid() {
        let table = AbbreviationTable::new();
        let err = table.expand("$").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidAbbreviation);
    }

    #[test]
    fn test_undefined_abbreviation_names_key() {
        let table = AbbreviationTable::new();
        let err = table.expand("$missing").unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UndefinedAbbreviation("missing".to_string())
        );
    }

    #[test]
    fn test_later_insert_overwrites() -> Result<()> {
        let mut table = AbbreviationTable::empty();
        assert_eq!(table.insert("tag", "First"), None);
        assert_eq!(table.insert("tag", "Second"), Some("First".to_string()));
        assert_eq!(table.expand("$tag")?, "Second");
        Ok(())
    }

    #[test]
    fn test_load_properties() -> Result<()> {
        let input = "# schema shortcuts\n\
                     tag = RootTag\n\
                     \n\
                     ! legacy comment\n\
                     urn:urn:expanded\n\
                     tag=Replaced\n";
        let mut table = AbbreviationTable::empty();
        let loaded = table.load(input.as_bytes())?;

        assert_eq!(loaded, 3);
        assert_eq!(table.get("tag"), Some("Replaced"));
        assert_eq!(table.get("urn"), Some("urn:expanded"));
        Ok(())
    }

    #[test]
    fn test_load_rejects_entry_without_separator() {
        let mut table = AbbreviationTable::empty();
        let err = table.load("ok=1\nbroken\n".as_bytes()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::InvalidAbbreviationFile("broken".to_string())
        );
        assert_eq!(err.line(), Some(2));
    }
}
