use std::fmt;

use crate::dom::Node;
use crate::writer::{HtmlWriter, WriterConfig};

/// A caller-owned surface that rendered nodes are appended to.
pub trait Container {
    fn append(&mut self, node: Node);

    /// Nodes appended so far, oldest first.
    fn nodes(&self) -> &[Node];

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// Collects nodes and serialises them to HTML.
///
/// Markup that was already in the container is kept as an opaque prefix and
/// is written out verbatim ahead of the appended nodes.
#[derive(Debug, Clone, Default)]
pub struct HtmlContainer {
    prefix: String,
    nodes: Vec<Node>,
    config: WriterConfig,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_markup<S: Into<String>>(markup: S) -> Self {
        Self {
            prefix: markup.into(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn existing_markup(&self) -> &str {
        &self.prefix
    }

    pub fn to_html(&self) -> String {
        let mut writer = HtmlWriter::new(self.config.clone());
        writer.write_raw(&self.prefix);
        if self.config.pretty_print && !self.prefix.is_empty() && !self.prefix.ends_with('\n') {
            writer.write_raw("\n");
        }
        for node in &self.nodes {
            writer.write_node(node);
        }
        writer.into_output()
    }
}

impl Container for HtmlContainer {
    fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl fmt::Display for HtmlContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Collects nodes and serialises them as an indented plain-text outline.
///
/// Block elements print their inline text as a heading line and nest their
/// block children one level deeper. Inline nodes appended at the top level
/// are listed as `- item` lines under the preceding block.
#[derive(Debug, Clone)]
pub struct TextContainer {
    prefix: String,
    nodes: Vec<Node>,
    indent_size: usize,
}

impl Default for TextContainer {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            nodes: Vec::new(),
            indent_size: 2,
        }
    }
}

impl TextContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_text<S: Into<String>>(text: S) -> Self {
        Self {
            prefix: text.into(),
            ..Self::default()
        }
    }

    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        for node in &self.nodes {
            if node.is_block() {
                self.outline(node, 0, &mut lines);
            } else {
                let text = node.text_content();
                lines.push(format!("{}- {}", self.indent(1), text.trim()));
            }
        }

        let mut output = self.prefix.clone();
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn outline(&self, node: &Node, depth: usize, lines: &mut Vec<String>) {
        let Some(element) = node.as_element() else {
            return;
        };

        let heading = element
            .children
            .iter()
            .filter(|child| !child.is_block())
            .map(Node::text_content)
            .collect::<String>();
        let heading = heading.trim();
        let nested = if heading.is_empty() {
            depth
        } else {
            lines.push(format!("{}{heading}", self.indent(depth)));
            depth + 1
        };

        for child in element.children.iter().filter(|child| child.is_block()) {
            self.outline(child, nested, lines);
        }
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_size)
    }
}

impl Container for TextContainer {
    fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl fmt::Display for TextContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn block() -> Node {
        Element::new("ul")
            .with_child(Element::new("a").with_text("person"))
            .with_child(
                Element::new("li")
                    .with_text("Title ")
                    .with_child(Element::new("a").with_text("Person")),
            )
            .into()
    }

    #[test]
    fn html_container_keeps_existing_markup_first() {
        let mut container = HtmlContainer::with_existing_markup("<p>intro</p>");
        container.append(Element::new("a").with_text("x").into());
        assert_eq!(container.to_html(), "<p>intro</p><a>x</a>");
        assert_eq!(container.nodes().len(), 1);
    }

    #[test]
    fn empty_html_container_renders_nothing() {
        let container = HtmlContainer::new();
        assert!(container.is_empty());
        assert_eq!(container.to_string(), "");
    }

    #[test]
    fn text_container_outlines_blocks_and_lists_inline_nodes() {
        let mut container = TextContainer::new();
        container.append(block());
        container.append(Element::new("a").with_text("type").into());
        assert_eq!(container.to_text(), "person\n  Title Person\n  - type\n");
    }

    #[test]
    fn text_container_separates_prefix_with_newline() {
        let mut container = TextContainer::with_existing_text("header");
        container.append(Node::text("item"));
        assert_eq!(container.to_text(), "header\n  - item\n");
    }
}
