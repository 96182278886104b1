//! XML element model
//!
//! A [`Node`] is the normalized form of a parsed element: local tag name,
//! direct text value, attributes in document order (namespace declarations
//! excluded), and element children. Serialization emits child elements
//! before the direct text value and never emits a prolog.

use std::fmt;

use crate::collection::TypedMap;
use crate::xml::attribute::Attribute;
use crate::xml::query::Selector;

/// A parsed or hand-built XML element
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Node {
    name: String,
    value: String,
    attributes: TypedMap<Attribute>,
    children: Vec<Node>,
}

impl Node {
    /// Creates an empty element with the given tag name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the direct text value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the attributes
    pub fn with_attributes(mut self, attributes: TypedMap<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the element children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Local tag name, without any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct text content only; text of child elements is excluded
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Attributes in document order, namespace declarations excluded
    pub fn attributes(&self) -> &TypedMap<Attribute> {
        &self.attributes
    }

    /// Immediate element children in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Filters children through a selector: a bare tag name, an absolute
    /// path (`/Root/Child`) resolved from this node, or a predicate
    /// (`Tag[@attr="value"]`). An unmatched selector yields an empty
    /// sequence, never an error.
    pub fn select(&self, selector: &str) -> Vec<&Node> {
        Selector::parse(selector).apply(self)
    }

    /// True when the element has no children and no non-blank text value
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.trim().is_empty()
    }

    /// Serialized markup form, same as [`fmt::Display`]
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attribute in self.attributes.values() {
            write!(f, " {attribute}")?;
        }
        if self.children.is_empty() && self.value.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "{}", escape_text(&self.value))?;
        write!(f, "</{}>", self.name)
    }
}

/// Escape character data for element content
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
