//! OAuth2 client token structs
//!
//! Value objects only; obtaining and refreshing tokens is the caller's
//! business.

use time::{Duration, OffsetDateTime};

#[cfg(feature = "serde")]
use serde::Deserialize;

#[cfg(feature = "serde")]
use crate::error::{Error, ErrorKind, Result, Span};

/// An issued access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    token_type: String,
    expires_at: OffsetDateTime,
    refresh: Option<String>,
}

impl AccessToken {
    pub fn new(
        value: impl Into<String>,
        token_type: impl Into<String>,
        expires_at: OffsetDateTime,
        refresh: Option<String>,
    ) -> Self {
        Self {
            value: value.into(),
            token_type: token_type.into(),
            expires_at,
            refresh,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expires_at(&self) -> OffsetDateTime {
        self.expires_at
    }

    pub fn refresh(&self) -> Option<&str> {
        self.refresh.as_deref()
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

/// RFC 6749 token response wire form
#[cfg(feature = "serde")]
#[derive(Debug, Deserialize)]
struct WireToken {
    access_token: String,
    token_type: String,
    expires_in: i64,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[cfg(feature = "serde")]
impl AccessToken {
    /// Decodes a token response, resolving the relative `expires_in`
    /// against `issued_at`
    pub fn from_json(content: &str, issued_at: OffsetDateTime) -> Result<Self> {
        let wire: WireToken = serde_json::from_str(content).map_err(|e| {
            Error::with_message(ErrorKind::MalformedJson, Span::empty(), e.to_string())
        })?;
        let expires_at = issued_at
            .checked_add(Duration::seconds(wire.expires_in))
            .ok_or_else(|| {
                Error::with_message(
                    ErrorKind::MalformedJson,
                    Span::empty(),
                    "expires_in out of range",
                )
            })?;
        Ok(Self {
            value: wire.access_token,
            token_type: wire.token_type,
            expires_at,
            refresh: wire.refresh_token,
        })
    }
}
