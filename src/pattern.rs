//! Regular-expression helpers
//!
//! Thin typed view over `regex::Regex`: group access by name or number,
//! offset-carrying captures, and replacement.

use std::fmt;

use regex::Regex;

use crate::error::{Error, ErrorKind, Result, Span};

/// A captured group: matched text and its byte offset in the subject
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub text: String,
    pub offset: usize,
}

/// A compiled pattern
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            Error::with_message(ErrorKind::InvalidPattern, Span::empty(), e.to_string())
        })?;
        Ok(Self { regex })
    }

    /// The pattern source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Value of a group in the first match, by name or by number
    pub fn group(&self, text: &str, group: &str) -> Option<String> {
        let captures = self.regex.captures(text)?;
        let matched = match group.parse::<usize>() {
            Ok(index) => captures.get(index),
            Err(_) => captures.name(group),
        };
        matched.map(|m| m.as_str().to_string())
    }

    /// Positional captures of the first match; unmatched groups are `None`
    pub fn captures(&self, text: &str) -> Option<Vec<Option<Group>>> {
        self.regex.captures(text).map(|c| collect_groups(&c))
    }

    /// Captures of every match, in match order
    pub fn captures_all(&self, text: &str) -> Vec<Vec<Option<Group>>> {
        self.regex
            .captures_iter(text)
            .map(|c| collect_groups(&c))
            .collect()
    }

    /// Replaces every match, expanding `$name` / `$1` references
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        self.regex.replace_all(text, replacement).into_owned()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.regex.as_str())
    }
}

fn collect_groups(captures: &regex::Captures<'_>) -> Vec<Option<Group>> {
    (0..captures.len())
        .map(|index| {
            captures.get(index).map(|m| Group {
                text: m.as_str().to_string(),
                offset: m.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // EC2-like cloud IPv4 domains, e.g. ec2-255-249-199-99.compute-1.amazonaws.com
    fn cloud_domain() -> Result<Pattern> {
        Pattern::new(
            r"(?x)
            (?:(\w+)-)?                                          # prefix
            (?P<ip>
              (?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9])?-){3}   # first 3 parts of IP
              (?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9])            # last part of IP
            )
            \.(.*)                                               # base domain
            ",
        )
    }

    const DOMAIN: &str = "ec2-255-249-199-99.compute-1.amazonaws.com";

    #[test]
    fn test_group_by_name_and_number() -> Result<()> {
        let pattern = cloud_domain()?;
        assert_eq!(pattern.group(DOMAIN, "ip").as_deref(), Some("255-249-199-99"));
        assert_eq!(
            pattern.group(DOMAIN, "3").as_deref(),
            Some("compute-1.amazonaws.com")
        );
        assert_eq!(pattern.group(DOMAIN, "missing"), None);
        Ok(())
    }

    #[test]
    fn test_captures_carry_offsets() -> Result<()> {
        let pattern = cloud_domain()?;
        let groups = pattern.captures(DOMAIN).unwrap_or_default();
        assert_eq!(
            groups.first().cloned().flatten(),
            Some(Group {
                text: DOMAIN.to_string(),
                offset: 0
            })
        );
        assert_eq!(
            groups.get(2).cloned().flatten(),
            Some(Group {
                text: "255-249-199-99".to_string(),
                offset: 4
            })
        );
        Ok(())
    }

    #[test]
    fn test_captures_all() -> Result<()> {
        let pattern = Pattern::new(r"\d+")?;
        let all = pattern.captures_all("a1 b22 c333");
        assert_eq!(all.len(), 3);
        Ok(())
    }

    #[test]
    fn test_replace_all() -> Result<()> {
        let pattern = cloud_domain()?;
        assert_eq!(
            pattern.replace_all(DOMAIN, "$ip.example.com"),
            "255-249-199-99.example.com"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_pattern_errors() {
        let err = Pattern::new("(unclosed").expect_err("unbalanced group");
        assert_eq!(err.kind(), &ErrorKind::InvalidPattern);
    }
}
