//! Message body flavors
//!
//! A body is rendered to its wire form on demand; the query flavor applies
//! `application/x-www-form-urlencoded` percent encoding at render time.

use std::fmt;

#[cfg(feature = "serde")]
use crate::error::{Error, ErrorKind, Result, Span};

/// Message body
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Body {
    #[default]
    Empty,
    Text(String),
    Query(Vec<(String, String)>),
}

impl Body {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Form-encoded body from name/value pairs, in order
    pub fn query(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self::Query(pairs.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(content) => content.is_empty(),
            Self::Query(pairs) => pairs.is_empty(),
        }
    }

    /// Rendered wire form
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(content) => content.clone(),
            Self::Query(pairs) => pairs
                .iter()
                .map(|(name, value)| format!("{}={}", form_encode(name), form_encode(value)))
                .collect::<Vec<_>>()
                .join("&"),
        }
    }
}

#[cfg(feature = "serde")]
impl Body {
    /// Decodes the rendered body as JSON; an empty body is `Null`
    pub fn json(&self) -> Result<serde_json::Value> {
        let content = self.render();
        if content.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::with_message(ErrorKind::MalformedJson, Span::empty(), e.to_string())
        })
    }

    /// Renders a JSON value into a text body
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// application/x-www-form-urlencoded percent encoding
fn form_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                encoded.push(char::from(byte));
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
