//! xshorthand: XML Shorthand to XML converter
//!
//! Shorthand lines use indentation instead of closing tags:
//!
//! ```text
//! <root
//!     <child attribute "value"
//!     text
//!     <child /
//! ```
//!
//! becomes
//!
//! ```text
//! <root>
//!     <child attribute="value">
//!     text
//!     </child>
//!     <child />
//! </root>
//! ```
//!
//! Tag names, attribute names and attribute values starting with `$` are
//! expanded through an [`AbbreviationTable`]. A line ending in `\` continues
//! on the next line.
//!
//! # Examples
//! ```
//! use xshorthand::{convert_str, AbbreviationTable, Options, Result};
//!
//! fn example() -> Result<()> {
//!     let mut abbreviations = AbbreviationTable::new();
//!     abbreviations.insert("tag", "RootTag");
//!
//!     let xml = convert_str("<$tag\n", &Options::default(), &abbreviations)?;
//!     assert_eq!(xml, "<RootTag>\n</RootTag>\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use std::io::{BufRead, Write};

pub mod abbrev;
pub mod config;
pub mod converter;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod utils;

// Re-exports
pub use abbrev::AbbreviationTable;
pub use config::Options;
pub use converter::Converter;
pub use error::{Error, ErrorKind, Result};
pub use utils::{
    convert_file, has_xs_extension, load_abbreviations, update_file, xml_file_name, xml_path_for,
    Update,
};

/// Convert shorthand read from `input` into XML written to `output`
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: &Options,
    abbreviations: &AbbreviationTable,
) -> Result<()> {
    Converter::new(options, abbreviations).convert(input, output)
}

/// Convert a shorthand document held in memory
pub fn convert_str(
    input: &str,
    options: &Options,
    abbreviations: &AbbreviationTable,
) -> Result<String> {
    Converter::new(options, abbreviations).convert_str(input)
}
