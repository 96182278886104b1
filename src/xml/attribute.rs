//! XML attribute accessors
//!
//! [`Attribute`] is the immutable name/value pair stored on an element.
//! [`OptionalAttribute`] describes an attribute that may be absent together
//! with its default; looking one up never errors.

use std::fmt;

use crate::collection::{Keyed, TypedMap};
use crate::error::{Error, ErrorKind, Result, Span};
use crate::xml::model::Node;

/// A single name/value attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Case-insensitive boolean coercion: `"true"` in any casing is true,
    /// anything else is false
    pub fn is_true(&self) -> bool {
        self.value.eq_ignore_ascii_case("true")
    }

    /// Views a node as an attribute. A node that is structurally an element
    /// (has children or attributes of its own) is refused.
    pub fn from_node(node: &Node) -> Result<Self> {
        if !node.children().is_empty() || !node.attributes().is_empty() {
            return Err(Error::with_message(
                ErrorKind::InvalidArgument,
                Span::empty(),
                "element given where attribute expected",
            ));
        }
        Ok(Self::new(node.name(), node.value()))
    }
}

impl Keyed for Attribute {
    fn key(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, escape_attribute(&self.value))
    }
}

/// Descriptor for an attribute that may be absent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionalAttribute {
    name: String,
    default: Option<String>,
}

impl OptionalAttribute {
    /// Describes an optional attribute whose default value is empty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Describes an optional attribute with an explicit default value
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TypedMap<Attribute> {
    /// Returns the stored attribute, or the descriptor's default when absent
    pub fn get_optional(&self, descriptor: &OptionalAttribute) -> Attribute {
        match self.get(&descriptor.name) {
            Some(attribute) => attribute.clone(),
            None => Attribute::new(
                descriptor.name.clone(),
                descriptor.default.clone().unwrap_or_default(),
            ),
        }
    }

    /// Optional boolean attribute: absent or blank yields `default`, a
    /// present value coerces case-insensitively
    pub fn bool_optional(&self, name: &str, default: bool) -> bool {
        self.get(name)
            .map(Attribute::value)
            .filter(|value| !value.is_empty())
            .map_or(default, |value| value.eq_ignore_ascii_case("true"))
    }
}

/// Escape character data for a quoted attribute value
pub(crate) fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
