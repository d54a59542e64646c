/// A node appended to a container: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    pub fn is_block(&self) -> bool {
        self.as_element().is_some_and(Element::is_block)
    }
}

impl Element {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_class<S: Into<String>>(self, class: S) -> Self {
        self.with_attribute("class", class)
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.children.push(Node::text(text));
        self
    }

    pub fn with_child<N: Into<Node>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push<N: Into<Node>>(&mut self, child: N) {
        self.children.push(child.into());
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn class(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn is_block(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "div" | "dl" | "dt" | "dd" | "li" | "ol" | "p" | "section" | "table" | "ul"
        )
    }

    pub fn has_block_children(&self) -> bool {
        self.children.iter().any(Node::is_block)
    }

    /// Depth-first search over this element and its descendants.
    pub fn find_all<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
        out: &mut Vec<&'a Element>,
    ) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.find_all(predicate, out);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_replaces_existing_value() {
        let mut element = Element::new("a").with_class("first");
        element.set_attribute("class", "second");
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.class(), Some("second"));
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let element = Element::new("li")
            .with_text("Title ")
            .with_child(Element::new("a").with_text("Person"));
        assert_eq!(element.text_content(), "Title Person");
    }

    #[test]
    fn block_children_are_detected() {
        let list = Element::new("ul")
            .with_child(Element::new("a").with_text("x"))
            .with_child(Element::new("li"));
        assert!(list.has_block_children());
        assert!(!Element::new("li").with_text("x").has_block_children());
    }

    #[test]
    fn find_all_walks_nested_elements() {
        let list = Element::new("ul").with_child(
            Element::new("li").with_child(Element::new("a").with_class("field")),
        );
        let mut found = Vec::new();
        list.find_all(&|element| element.tag == "a", &mut found);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].class(), Some("field"));
    }
}
