//! Shorthand line grammar: classification of logical lines and
//! tokenization of tag lines.

pub mod line;
pub mod tag;

pub use line::LineKind;
pub use tag::TagLine;
