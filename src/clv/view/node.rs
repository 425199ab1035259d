use crate::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    ListItem,
    Section,
    Heading,
    Paragraph,
    Span,
    Image,
}

/// A virtual view node. Hosts decide how to draw it; clicking it sends `on_click` back to the
/// controller when present.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub class: &'static str,
    pub text: Option<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<Command>,
}

impl Node {
    pub fn new(tag: Tag, class: &'static str) -> Self {
        return Self {
            tag,
            class,
            text: None,
            attributes: vec![],
            children: vec![],
            on_click: None,
        };
    }

    /// Empty text adds no text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();

        if !text.is_empty() {
            self.text = Some(text);
        }

        return self;
    }

    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        return self;
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children.extend(children);
        return self;
    }

    pub fn on_click(mut self, command: Command) -> Self {
        self.on_click = Some(command);
        return self;
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        return self
            .attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str());
    }

    /// Depth-first search for the first node with the given class, including self
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.class == class {
            return Some(self);
        }

        return self
            .children
            .iter()
            .find_map(|child| child.find_by_class(class));
    }

    /// Text of this node and all its descendants, concatenated in order
    pub fn text_content(&self) -> String {
        let mut content = self.text.clone().unwrap_or_default();

        for child in self.children.iter() {
            content.push_str(&child.text_content());
        }

        return content;
    }
}
