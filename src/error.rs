//! Error handling types for the converter
//!
//! Every failure aborts the whole conversion run. Errors carry the 1-based
//! input line number where one is known.

use std::{fmt, io};
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub struct Error {
    /// The specific kind of error
    kind: ErrorKind,
    /// Input line (1-based) being processed when the error occurred
    line: Option<usize>,
    /// Underlying I/O failure, if any
    #[source]
    source: Option<io::Error>,
}

/// Error categories
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Indentation scan hit a character that is neither space nor tab
    MalformedIndentation,
    /// Tag line does not start with a valid tag name
    InvalidTagLine(String),
    /// Content after the tag name is not a sequence of attributes
    InvalidAttributeLine(String),
    /// A bare `$` with no key
    InvalidAbbreviation,
    /// A `$key` whose key is missing from the table
    UndefinedAbbreviation(String),
    /// Rejected option value
    InvalidConfiguration(String),
    /// Input ended while a continued line was still pending
    TruncatedContinuation,
    /// Abbreviation file entry without a `=` or `:` separator
    InvalidAbbreviationFile(String),
    /// Reading input or writing output failed
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedIndentation => {
                write!(f, "malformed indentation: only space or tab characters were expected")
            }
            Self::InvalidTagLine(line) => write!(f, "invalid tag line '{line}'"),
            Self::InvalidAttributeLine(line) => {
                write!(f, "invalid attribute in tag line '{line}'")
            }
            Self::InvalidAbbreviation => write!(f, "invalid abbreviation '$'"),
            Self::UndefinedAbbreviation(key) => write!(f, "abbreviation '{key}' not defined"),
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::TruncatedContinuation => {
                write!(f, "input ended inside a line continuation")
            }
            Self::InvalidAbbreviationFile(entry) => {
                write!(f, "invalid abbreviation entry '{entry}'")
            }
            Self::Io => write!(f, "I/O failure"),
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            line: None,
            source: None,
        }
    }

    /// Attach the input line number, keeping one that is already set
    pub fn with_line(mut self, line: usize) -> Self {
        self.line.get_or_insert(line);
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            line: None,
            source: Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(line) = self.line {
            write!(f, " at line {line}")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;
