//! Error types for xutil

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An element failed the homogeneity check at collection construction.
    TypeMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    /// A named key selector could not be applied to an element.
    MissingCapability { accessor: String },
    /// Two set elements derived the same key.
    DuplicateKey { key: String },
    /// Input text is not well-formed markup.
    MalformedMarkup,
    /// A contract violation, e.g. an element passed where an attribute is
    /// expected.
    InvalidArgument,
    /// A base64 payload failed to decode.
    InvalidEncoding,
    /// A JSON body failed to parse.
    MalformedJson,
    /// A regular expression failed to compile.
    InvalidPattern,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "all elements must be {expected}; element {index} of type {actual} given"
                )
            }
            Self::MissingCapability { accessor } => {
                write!(f, "accessor {accessor}() is not defined for the element type")
            }
            Self::DuplicateKey { key } => write!(f, "duplicate key: {key}"),
            Self::MalformedMarkup => write!(f, "malformed markup"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::InvalidEncoding => write!(f, "invalid base64 input"),
            Self::MalformedJson => write!(f, "malformed json"),
            Self::InvalidPattern => write!(f, "invalid pattern"),
        }
    }
}

/// Main error type for xutil
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for xutil
pub type Result<T> = std::result::Result<T, Error>;
