//! Cursor-based XML parser
//!
//! Normalizes while parsing: the prolog, comments, DOCTYPE and namespace
//! declarations are dropped, tag names lose their namespace prefix, and
//! direct text runs are concatenated into the element value in document
//! order. A `<![CDATA[...]]>` run contributes its content to the value
//! verbatim. Every failure is a [`ErrorKind::MalformedMarkup`] with a span.

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result, Span};
use crate::collection::TypedMap;
use crate::xml::attribute::Attribute;
use crate::xml::model::Node;

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over raw markup bytes
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse a single document: one root element, nothing after it
    pub fn parse(&mut self) -> Result<Node> {
        self.cursor.skip_whitespace();
        let root = self.parse_element()?;
        self.cursor.skip_whitespace();

        if !self.cursor.is_eof() {
            return Err(self.error_here("trailing content after document root"));
        }

        Ok(root)
    }

    fn parse_element(&mut self) -> Result<Node> {
        self.expect_byte(b'<')?;

        if self.cursor.current() == Some(b'?') {
            self.skip_processing_instruction()?;
            self.cursor.skip_whitespace();
            return self.parse_element();
        }

        if self.cursor.current() == Some(b'!') {
            self.skip_declaration_or_comment()?;
            self.cursor.skip_whitespace();
            return self.parse_element();
        }

        if self.cursor.current() == Some(b'/') {
            return Err(self.error_here("unexpected closing tag"));
        }

        let raw_name = self.parse_name()?;
        let name = local_name(&raw_name);
        let attributes = self.parse_attributes()?;

        if self.cursor.current() == Some(b'/') {
            self.cursor.advance();
            self.expect_byte(b'>')?;
            return Ok(Node::new(name).with_attributes(attributes));
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        let mut value = String::new();
        loop {
            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'/') {
                self.cursor.advance_by(2);
                // Compare against the raw name so mismatched prefixes are
                // caught before localization.
                let close_name = self.parse_name()?;
                if close_name != raw_name {
                    return Err(self.error_here("mismatched closing tag"));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'!') {
                if self.cursor.peek_bytes(9) == Some(b"<![CDATA[") {
                    self.cursor.advance_by(9);
                    value.push_str(&self.parse_cdata()?);
                } else {
                    self.cursor.advance();
                    self.skip_declaration_or_comment()?;
                }
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                children.push(self.parse_element()?);
                continue;
            }

            if self.cursor.is_eof() {
                return Err(self.error_here("unterminated element"));
            }

            if let Some(text) = self.parse_text()? {
                value.push_str(&text);
            }
        }

        Ok(Node::new(name)
            .with_value(value)
            .with_attributes(attributes)
            .with_children(children))
    }

    fn parse_attributes(&mut self) -> Result<TypedMap<Attribute>> {
        let mut attributes: Vec<Attribute> = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => return Err(self.error_here("unexpected end of input")),
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if is_namespace_declaration(&name) {
                continue;
            }
            if attributes.iter().any(|existing| existing.name() == name) {
                return Err(self.error_here("duplicate attribute"));
            }
            attributes.push(Attribute::new(name, value));
        }

        Ok(TypedMap::keyed(attributes))
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => return Err(self.error_here("expected quoted attribute value")),
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = bytes_to_string(raw)?;
                return decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_here("unterminated attribute value"))
    }

    fn parse_text(&mut self) -> Result<Option<String>> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = bytes_to_string(raw)?;
        let text = decode_entities(&text)?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    /// Raw character data, taken verbatim (no entity decoding) up to the
    /// closing `]]>`
    fn parse_cdata(&mut self) -> Result<String> {
        let start = self.cursor.pos();
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(3) == Some(b"]]>") {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance_by(3);
                return bytes_to_string(raw);
            }
            self.cursor.advance();
        }
        Err(self.error_here("unterminated character data section"))
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        let Some(first) = self.cursor.current() else {
            return Err(self.error_here("expected name"));
        };
        if !is_name_start(first) {
            return Err(self.error_here("invalid name"));
        }

        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        bytes_to_string(self.cursor.slice_from(start))
    }

    fn skip_declaration_or_comment(&mut self) -> Result<()> {
        // cursor currently at '!'
        if self.cursor.peek_bytes(3) == Some(b"!--") {
            self.cursor.advance_by(3);
            self.skip_until(b"-->")?;
            return Ok(());
        }

        if self.cursor.peek_bytes(3) == Some(b"![C") {
            self.cursor.advance_by(2);
            self.skip_until(b"]]>")?;
            return Ok(());
        }

        self.skip_until(b">")
    }

    fn skip_processing_instruction(&mut self) -> Result<()> {
        // cursor currently at '?'
        self.cursor.advance();
        self.skip_until(b"?>")
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(pattern.len()) == Some(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_here("unterminated markup"))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else {
            Err(self.error_here("unexpected token"))
        }
    }

    fn error_here(&self, message: &str) -> Error {
        let pos = self.cursor.position();
        Error::with_message(
            ErrorKind::MalformedMarkup,
            Span::new(pos, pos),
            message.to_string(),
        )
    }
}

fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(|s| s.to_string())
        .map_err(|_| {
            Error::with_message(ErrorKind::MalformedMarkup, Span::empty(), "invalid utf-8")
        })
}

/// Tag name without its namespace prefix
fn local_name(name: &str) -> String {
    match name.split_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.to_string(),
    }
}

fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:")
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_entities(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            result.push(ch);
            continue;
        }

        let mut entity = String::new();
        for next in chars.by_ref() {
            if next == ';' {
                break;
            }
            entity.push(next);
        }

        let decoded = match entity.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => decode_numeric_entity(&entity),
        };

        match decoded {
            Some(ch) => result.push(ch),
            None => {
                return Err(Error::with_message(
                    ErrorKind::MalformedMarkup,
                    Span::empty(),
                    "invalid xml entity",
                ));
            }
        }
    }

    Ok(result)
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
