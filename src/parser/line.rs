/// What a logical line is, decided by the prefix of its content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `//` shorthand comment, dropped from the output
    XsComment,
    /// `<?` processing instruction such as the XML declaration
    Preamble,
    /// `<!--` XML comment
    XmlComment,
    /// `<!` DTD declaration
    Declaration,
    /// `<` element in shorthand form
    Tag,
    /// Anything else, copied through
    Text,
}

impl LineKind {
    /// Classify the content of a line (indentation already removed).
    ///
    /// Prefixes are tested from most to least specific so that `<!--` is
    /// never taken for a declaration.
    pub fn classify(content: &str) -> Self {
        if content.starts_with("//") {
            Self::XsComment
        } else if content.starts_with("<?") {
            Self::Preamble
        } else if content.starts_with("<!--") {
            Self::XmlComment
        } else if content.starts_with("<!") {
            Self::Declaration
        } else if content.starts_with('<') {
            Self::Tag
        } else {
            Self::Text
        }
    }
}
