//! Base64 codec helpers
//!
//! Standard-alphabet base64 over the `base64` crate. A payload that does
//! not decode is an error, never an empty string.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, ErrorKind, Result, Span};

/// Encode bytes as standard-alphabet base64
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard-alphabet base64
pub fn base64_decode(encoded: &str) -> Result<Vec<u8>> {
    STANDARD.decode(encoded.trim()).map_err(|e| {
        Error::with_message(ErrorKind::InvalidEncoding, Span::empty(), e.to_string())
    })
}

/// Decode base64 that must carry UTF-8 text
pub fn base64_decode_utf8(encoded: &str) -> Result<String> {
    let bytes = base64_decode(encoded)?;
    String::from_utf8(bytes).map_err(|_| {
        Error::with_message(
            ErrorKind::InvalidEncoding,
            Span::empty(),
            "decoded payload is not utf-8",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() -> Result<()> {
        let encoded = base64_encode(b"lorem ipsum");
        assert_eq!(encoded, "bG9yZW0gaXBzdW0=");
        assert_eq!(base64_decode_utf8(&encoded)?, "lorem ipsum");
        Ok(())
    }

    #[test]
    fn test_decode_trims_whitespace() -> Result<()> {
        assert_eq!(base64_decode_utf8(" dGVzdA==\n")?, "test");
        Ok(())
    }

    #[test]
    fn test_invalid_input_errors() {
        let err = base64_decode("not base64!").expect_err("invalid alphabet");
        assert_eq!(err.kind(), &ErrorKind::InvalidEncoding);
    }

    #[test]
    fn test_non_utf8_payload_errors() {
        let encoded = base64_encode(&[0xff, 0xfe]);
        let err = base64_decode_utf8(&encoded).expect_err("not utf-8");
        assert_eq!(err.kind(), &ErrorKind::InvalidEncoding);
    }
}
