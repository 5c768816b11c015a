//! Signature header parsing.
//!
//! Header shape: `s:<id>:<timestamp>:<signature>`, where `signature` is url-safe
//! base64 of the raw Ed25519 signature. Only the shape and the scheme tag are
//! checked at parse time; `id` and `timestamp` are carried through as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encoding::decode_base64url;
use crate::errors::{DecodeError, FormatError};

/// Scheme tag that must open every header (matched case-insensitively).
pub const SCHEME_TAG: &str = "s";

const FIELD_COUNT: usize = 4;

/// Parsed signature header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHeader {
    /// Delivery identifier; opaque, not covered by the signature.
    pub id: String,
    /// Timestamp exactly as sent; its UTF-8 bytes prefix the signed message.
    pub timestamp: String,
    /// Url-safe base64 signature, still encoded.
    pub signature: String,
}

impl SignatureHeader {
    /// Parses a header string.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = text.split(':').collect();
        if fields.len() != FIELD_COUNT {
            return Err(FormatError::FieldCount {
                found: fields.len(),
            });
        }

        if !fields[0].eq_ignore_ascii_case(SCHEME_TAG) {
            return Err(FormatError::SchemeTag {
                found: fields[0].to_string(),
            });
        }

        Ok(Self {
            id: fields[1].to_string(),
            timestamp: fields[2].to_string(),
            signature: fields[3].to_string(),
        })
    }

    /// Decodes the signature field into raw bytes.
    pub fn signature_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        decode_base64url(&self.signature)
    }
}

impl FromStr for SignatureHeader {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SignatureHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            SCHEME_TAG, self.id, self.timestamp, self.signature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_header() {
        let header = SignatureHeader::parse("s:abc-123:1700000000:AAAA").unwrap();
        assert_eq!(header.id, "abc-123");
        assert_eq!(header.timestamp, "1700000000");
        assert_eq!(header.signature, "AAAA");
    }

    #[test]
    fn scheme_tag_is_case_insensitive() {
        assert!(SignatureHeader::parse("S:abc:1700000000:AAAA").is_ok());
    }

    #[test]
    fn rejects_wrong_scheme_tag() {
        assert_eq!(
            SignatureHeader::parse("x:abc:1700000000:AAAA"),
            Err(FormatError::SchemeTag {
                found: "x".to_string()
            })
        );
        assert!(SignatureHeader::parse("sig:abc:1700000000:AAAA").is_err());
    }

    #[test]
    fn rejects_wrong_field_count() {
        for (input, found) in [
            ("", 1),
            ("s", 1),
            ("s:abc:1700000000", 3),
            ("s:abc:1700000000:AAAA:extra", 5),
            ("s:a:b:c:d:e", 6),
        ] {
            assert_eq!(
                SignatureHeader::parse(input),
                Err(FormatError::FieldCount { found })
            );
        }
    }

    #[test]
    fn timestamp_is_not_validated() {
        let header = SignatureHeader::parse("s::not-a-number:AAAA").unwrap();
        assert_eq!(header.id, "");
        assert_eq!(header.timestamp, "not-a-number");
    }

    #[test]
    fn display_uses_lowercase_tag() {
        let header: SignatureHeader = "S:id:42:AAAA".parse().unwrap();
        assert_eq!(header.to_string(), "s:id:42:AAAA");
    }

    #[test]
    fn signature_bytes_decodes_base64url() {
        let header = SignatureHeader::parse("s:id:1:AQID_w").unwrap();
        assert_eq!(header.signature_bytes().unwrap(), vec![1, 2, 3, 0xff]);

        let bad = SignatureHeader::parse("s:id:1:not base64!").unwrap();
        assert!(matches!(
            bad.signature_bytes(),
            Err(DecodeError::InvalidBase64(_))
        ));
    }
}
