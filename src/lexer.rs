//! Line-level lexing: physical line reassembly, indentation measurement and
//! a byte cursor for scanning tag lines.

mod continuation;
mod cursor;
mod indent;

pub use continuation::{LineReader, LogicalLine, CONTINUATION_MARKER};
pub use cursor::Cursor;
pub use indent::{indent_count, indent_level, skip_indent, split_indent};
