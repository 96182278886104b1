//! xutil - typed utility primitives
//!
//! Strictly-typed collections, an XML element model with a small selector
//! grammar, and typed HTTP/OAuth2/SOAP value objects.
//!
//! # Quick Start
//!
//! ```
//! use xutil::parse_xml;
//! # fn main() -> Result<(), xutil::Error> {
//! let node = parse_xml(r#"<Test name="test"><Child>Value</Child></Test>"#)?;
//! let value = node
//!     .select("Child")
//!     .first()
//!     .map(|child| child.value().to_string())
//!     .unwrap_or_default();
//! assert_eq!(value, "Value");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod cursor;
pub use cursor::Cursor;

pub mod collection;
pub use collection::{KeySelector, Keyed, TypedMap, TypedSet};

pub mod xml;
pub use xml::{Attribute, Node, OptionalAttribute, Selector};

pub mod encoding;
pub mod http;
pub mod oauth2;
pub mod pattern;
pub mod soap;

/// Parse an XML element from a string
pub fn parse_xml(s: &str) -> Result<Node> {
    let mut parser = xml::Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse an XML element from bytes
pub fn parse_xml_bytes(bytes: &[u8]) -> Result<Node> {
    let mut parser = xml::Parser::new(bytes);
    parser.parse()
}

/// Convenience re-exports
pub use http::{Body, Header, Method, Request};
pub use oauth2::AccessToken;
pub use pattern::Pattern;
