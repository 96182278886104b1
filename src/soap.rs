//! SOAP/XSD element wrappers
//!
//! Typed schema elements and array-encoded sequences. Encoding styles and
//! XSD type tags are explicit enums, never loose string constants, so a
//! sequence can enforce element homogeneity by tag at construction.

use std::fmt;

use crate::collection::{Keyed, TypedMap};
use crate::error::Result;
use crate::xml::Node;

/// XSD primitive type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XsdType {
    String,
    Boolean,
    Integer,
    NonNegativeInteger,
}

impl XsdType {
    /// XSD type name as it appears in schemas
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::NonNegativeInteger => "nonNegativeInteger",
        }
    }
}

impl fmt::Display for XsdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// SOAP encoding style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoapEncoding {
    Array,
}

/// A named, typed schema element with its rendered value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XsdElement {
    ty: XsdType,
    name: String,
    namespace: Option<String>,
    value: String,
}

impl XsdElement {
    pub fn string(name: impl Into<String>, namespace: Option<String>, data: impl Into<String>) -> Self {
        Self {
            ty: XsdType::String,
            name: name.into(),
            namespace,
            value: data.into(),
        }
    }

    pub fn boolean(name: impl Into<String>, namespace: Option<String>, data: bool) -> Self {
        Self {
            ty: XsdType::Boolean,
            name: name.into(),
            namespace,
            value: data.to_string(),
        }
    }

    pub fn integer(name: impl Into<String>, namespace: Option<String>, data: i64) -> Self {
        Self {
            ty: XsdType::Integer,
            name: name.into(),
            namespace,
            value: data.to_string(),
        }
    }

    /// Non-negativity is carried by the parameter type
    pub fn non_negative_integer(
        name: impl Into<String>,
        namespace: Option<String>,
        data: u64,
    ) -> Self {
        Self {
            ty: XsdType::NonNegativeInteger,
            name: name.into(),
            namespace,
            value: data.to_string(),
        }
    }

    pub fn ty(&self) -> XsdType {
        self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders the element into the XML model
    pub fn to_node(&self) -> Node {
        Node::new(self.name.clone()).with_value(self.value.clone())
    }
}

impl Keyed for XsdElement {
    fn key(&self) -> String {
        self.name.clone()
    }
}

/// Array-encoded sequence type descriptor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceType {
    name: String,
    namespace: String,
}

impl SequenceType {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub const fn encoding(&self) -> SoapEncoding {
        SoapEncoding::Array
    }
}

/// A homogeneous, array-encoded sequence of schema elements
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    ty: SequenceType,
    element_ty: XsdType,
    elements: Vec<XsdElement>,
}

impl Sequence {
    /// Every element must carry `element_ty`; the first mismatch aborts
    /// construction naming the offending index
    pub fn new(ty: SequenceType, element_ty: XsdType, elements: Vec<XsdElement>) -> Result<Self> {
        let validated = TypedMap::validated(elements, element_ty.name(), |element: XsdElement| {
            if element.ty() == element_ty {
                Ok(element)
            } else {
                Err(element.ty().name().to_string())
            }
        })?;
        Ok(Self {
            ty,
            element_ty,
            elements: validated.values().cloned().collect(),
        })
    }

    pub fn ty(&self) -> &SequenceType {
        &self.ty
    }

    pub fn element_ty(&self) -> XsdType {
        self.element_ty
    }

    pub fn elements(&self) -> &[XsdElement] {
        &self.elements
    }

    /// Renders the sequence into the XML model
    pub fn to_node(&self) -> Node {
        Node::new(self.ty.name().to_string())
            .with_children(self.elements.iter().map(XsdElement::to_node).collect())
    }
}
