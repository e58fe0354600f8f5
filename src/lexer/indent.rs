//! Indentation measurement
//!
//! A line's indent level is the number of leading tabs plus the number of
//! whole `tab_spaces` runs among its leading spaces. Only spaces and tabs
//! count as indentation.

use crate::error::{Error, ErrorKind, Result};

/// Indent count = tabs + spaces / tab_spaces, or just tabs when `tab_spaces` is 0
pub fn indent_count(tabs: usize, spaces: usize, tab_spaces: usize) -> usize {
    match spaces.checked_div(tab_spaces) {
        Some(levels) => tabs + levels,
        None => tabs,
    }
}

/// Indent level of `line`, from its leading run of spaces and tabs
pub fn indent_level(line: &str, tab_spaces: usize) -> usize {
    let mut spaces = 0;
    let mut tabs = 0;
    for c in line.chars() {
        match c {
            ' ' => spaces += 1,
            '\t' => tabs += 1,
            _ => break,
        }
    }
    indent_count(tabs, spaces, tab_spaces)
}

/// Byte offset just past the whitespace that makes up `level` indents
pub fn skip_indent(line: &str, level: usize, tab_spaces: usize) -> Result<usize> {
    if level == 0 {
        return Ok(0);
    }

    let mut spaces = 0;
    let mut tabs = 0;
    for (idx, c) in line.char_indices() {
        match c {
            ' ' => spaces += 1,
            '\t' => tabs += 1,
            _ => return Err(Error::new(ErrorKind::MalformedIndentation)),
        }
        if indent_count(tabs, spaces, tab_spaces) == level {
            return Ok(idx + 1);
        }
    }
    Err(Error::new(ErrorKind::MalformedIndentation))
}

/// Split `line` into its indent level and its content.
///
/// Whitespace left over after the last whole level is not part of the
/// content.
pub fn split_indent(line: &str, tab_spaces: usize) -> Result<(usize, &str)> {
    let level = indent_level(line, tab_spaces);
    let offset = skip_indent(line, level, tab_spaces)?;
    let content = line
        .get(offset..)
        .unwrap_or_default()
        .trim_start_matches([' ', '\t']);
    Ok((level, content))
}
