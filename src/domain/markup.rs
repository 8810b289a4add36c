//! Markup records exchanged with a parser/serializer.
//!
//! The codec only needs this shape: a tag, an attribute map, ordered child
//! items and text. Tokenizing and rendering live in the infrastructure layer.

use std::collections::BTreeMap;

/// One item of an element's child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(MarkupElement),
    Text(String),
}

impl MarkupNode {
    pub fn as_element(&self) -> Option<&MarkupElement> {
        match self {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, MarkupNode::Text(_))
    }
}

impl From<MarkupElement> for MarkupNode {
    fn from(element: MarkupElement) -> Self {
        MarkupNode::Element(element)
    }
}

/// A structural unit of a markup document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupElement {
    pub tag_name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<MarkupNode>,
}

impl MarkupElement {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder-style child appender.
    pub fn with_child(mut self, child: impl Into<MarkupNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style text appender.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::Text(text.into()));
        self
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn append_child(&mut self, child: impl Into<MarkupNode>) {
        self.children.push(child.into());
    }

    /// Child elements in document order, text items skipped.
    pub fn child_elements(&self) -> impl Iterator<Item = &MarkupElement> {
        self.children.iter().filter_map(MarkupNode::as_element)
    }

    /// True when at least one child is an element rather than text.
    pub fn has_element_children(&self) -> bool {
        self.child_elements().next().is_some()
    }

    /// Concatenated text of every descendant, in document order.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self.children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some(MarkupNode::Text(chunk)) => text.push_str(chunk),
                Some(MarkupNode::Element(element)) => stack.push(element.children.iter()),
                None => {
                    stack.pop();
                }
            }
        }
        text
    }
}
