//! HTTP request value objects
//!
//! Pure message modeling, no transport: a request is a method, a URL,
//! unique-by-name headers and a body.

pub mod body;

pub use body::Body;

use std::fmt;

use crate::collection::{Keyed, TypedSet};

/// Request method
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single header line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
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
}

impl Keyed for Header {
    fn key(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// An HTTP request
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: Method,
    url: String,
    headers: TypedSet<Header>,
    body: Body,
}

impl Request {
    /// A request with no headers and an empty body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: TypedSet::new(),
            body: Body::Empty,
        }
    }

    pub fn with_headers(mut self, headers: TypedSet<Header>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &TypedSet<Header> {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}
