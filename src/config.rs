use crate::error::{Error, ErrorKind, Result};

/// Default number of spaces equivalent to one tab
pub const DEFAULT_TAB_SPACES: usize = 4;

/// Largest accepted number of spaces per tab
pub const MAX_TAB_SPACES: usize = 256;

/// Options read by the indentation calculator and the XML emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Spaces per indent level, both when reading and when writing
    tab_spaces: usize,
    /// Indent output with runs of spaces instead of tab characters
    pub indent_with_spaces: bool,
    /// Put every attribute after the first on its own line
    pub one_attribute_per_line: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_spaces: DEFAULT_TAB_SPACES,
            indent_with_spaces: true,
            one_attribute_per_line: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_spaces(&self) -> usize {
        self.tab_spaces
    }

    /// Set the number of spaces equivalent to a tab, from 0 to
    /// [`MAX_TAB_SPACES`]
    pub fn set_tab_spaces(&mut self, spaces: i64) -> Result<()> {
        self.tab_spaces = usize::try_from(spaces)
            .ok()
            .filter(|spaces| *spaces <= MAX_TAB_SPACES)
            .ok_or_else(|| {
                Error::new(ErrorKind::InvalidConfiguration(format!(
                    "the number of spaces equivalent to a tab cannot be {spaces}"
                )))
            })?;
        Ok(())
    }

    pub fn with_tab_spaces(mut self, spaces: i64) -> Result<Self> {
        self.set_tab_spaces(spaces)?;
        Ok(self)
    }

    pub fn with_indent_with_spaces(mut self, enabled: bool) -> Self {
        self.indent_with_spaces = enabled;
        self
    }

    pub fn with_one_attribute_per_line(mut self, enabled: bool) -> Self {
        self.one_attribute_per_line = enabled;
        self
    }
}
