use crate::dom::{Element, Node};

/// Output formatting for serialised containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Put block children on their own indented lines.
    pub pretty_print: bool,
    /// Spaces per indentation level when pretty printing.
    pub indent_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent_size: 2,
        }
    }
}

/// Serialises nodes to HTML with escaping.
#[derive(Debug)]
pub struct HtmlWriter {
    buffer: String,
    indent_level: usize,
    config: WriterConfig,
}

impl HtmlWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            config,
        }
    }

    pub fn write_raw(&mut self, html: &str) {
        self.buffer.push_str(html);
    }

    pub fn write_text(&mut self, text: &str) {
        self.buffer.push_str(&escape_html(text));
    }

    /// Writes a top-level node; in pretty mode each one ends its own line.
    pub fn write_node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => {
                self.write_indent();
                self.write_text(text);
            }
            Node::Element(element) => {
                self.write_indent();
                self.write_element(element);
            }
        }
        self.write_newline_if_pretty();
    }

    fn write_element(&mut self, element: &Element) {
        self.write_opening_tag(element);

        if self.config.pretty_print && element.has_block_children() {
            self.buffer.push('\n');
            self.indent_level += 1;
            for child in &element.children {
                self.write_node(child);
            }
            self.indent_level -= 1;
            self.write_indent();
        } else {
            for child in &element.children {
                match child {
                    Node::Text(text) => self.write_text(text),
                    Node::Element(inner) => self.write_element(inner),
                }
            }
        }

        self.write_closing_tag(&element.tag);
    }

    fn write_opening_tag(&mut self, element: &Element) {
        self.buffer.push('<');
        self.buffer.push_str(&element.tag);
        for (key, value) in &element.attributes {
            self.buffer.push(' ');
            self.buffer.push_str(key);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape_html_attribute(value));
            self.buffer.push('"');
        }
        self.buffer.push('>');
    }

    fn write_closing_tag(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    fn write_indent(&mut self) {
        if self.config.pretty_print {
            let spaces = " ".repeat(self.indent_level * self.config.indent_size);
            self.buffer.push_str(&spaces);
        }
    }

    fn write_newline_if_pretty(&mut self) {
        if self.config.pretty_print {
            self.buffer.push('\n');
        }
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_html_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            c => escaped.push_str(&escape_html(c.encode_utf8(&mut [0; 4]))),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> Node {
        Element::new("ul")
            .with_child(Element::new("a").with_class("subtypes").with_text("a"))
            .with_child(
                Element::new("li")
                    .with_text("Title ")
                    .with_child(Element::new("a").with_text("T")),
            )
            .into()
    }

    #[test]
    fn compact_output_has_no_whitespace_between_nodes() {
        let mut writer = HtmlWriter::new(WriterConfig::default());
        writer.write_node(&list());
        assert_eq!(
            writer.output(),
            "<ul><a class=\"subtypes\">a</a><li>Title <a>T</a></li></ul>"
        );
    }

    #[test]
    fn pretty_output_indents_block_children() {
        let mut writer = HtmlWriter::new(WriterConfig {
            pretty_print: true,
            indent_size: 2,
        });
        writer.write_node(&list());
        assert_eq!(
            writer.output(),
            "<ul>\n  <a class=\"subtypes\">a</a>\n  <li>Title <a>T</a></li>\n</ul>\n"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#x27;&quot;");
        assert_eq!(escape_html_attribute("a\"b\nc"), "a&quot;b&#10;c");
    }
}
