use crate::config::Options;

/// Renders XML lines into a string buffer according to the conversion options
#[derive(Debug, Clone, Copy)]
pub struct XmlFormatter<'a> {
    options: &'a Options,
}

impl<'a> XmlFormatter<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Indentation for `level`: `level * tab_spaces` spaces, or `level` tabs
    pub fn indent(&self, out: &mut String, level: usize) {
        if self.options.indent_with_spaces {
            out.push_str(&" ".repeat(level * self.options.tab_spaces()));
        } else {
            out.push_str(&"\t".repeat(level));
        }
    }

    /// Opening tag with its attributes, terminated by a newline
    pub fn open_tag(
        &self,
        out: &mut String,
        level: usize,
        name: &str,
        attributes: &[(&str, &str)],
        empty: bool,
    ) {
        self.indent(out, level);
        out.push('<');
        out.push_str(name);
        for (idx, (attr_name, value)) in attributes.iter().enumerate() {
            if self.options.one_attribute_per_line && idx > 0 {
                out.push('\n');
                self.indent(out, level + 1);
            } else {
                out.push(' ');
            }
            out.push_str(attr_name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        if empty {
            out.push_str(" /");
        }
        out.push_str(">\n");
    }

    pub fn close_tag(&self, out: &mut String, level: usize, name: &str) {
        self.indent(out, level);
        out.push_str("</");
        out.push_str(name);
        out.push_str(">\n");
    }

    /// A line copied through unchanged
    pub fn verbatim(&self, out: &mut String, line: &str) {
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(options: &Options, f: impl Fn(&XmlFormatter<'_>, &mut String)) -> String {
        let mut out = String::new();
        f(&XmlFormatter::new(options), &mut out);
        out
    }

    #[test]
    fn test_open_tag_with_attributes() {
        let options = Options::default();
        let out = render(&options, |fmt, out| {
            fmt.open_tag(out, 1, "child", &[("a", "1"), ("b", "")], false)
        });
        assert_eq!(out, "    <child a=\"1\" b=\"\">\n");
    }

    #[test]
    fn test_empty_tag() {
        let options = Options::default();
        let out = render(&options, |fmt, out| fmt.open_tag(out, 0, "br", &[], true));
        assert_eq!(out, "<br />\n");
    }

    #[test]
    fn test_tab_indentation() {
        let options = Options::default().with_indent_with_spaces(false);
        let out = render(&options, |fmt, out| fmt.close_tag(out, 2, "child"));
        assert_eq!(out, "\t\t</child>\n");
    }

    #[test]
    fn test_one_attribute_per_line() {
        let options = Options::default().with_one_attribute_per_line(true);
        let out = render(&options, |fmt, out| {
            fmt.open_tag(out, 1, "t", &[("a", "1"), ("b", "2"), ("c", "3")], true)
        });
        assert_eq!(
            out,
            "    <t a=\"1\"\n        b=\"2\"\n        c=\"3\" />\n"
        );
    }
}
