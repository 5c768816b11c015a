use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::encoding::{decode_base64url, decode_hex};
use crate::errors::DecodeError;

/// Encodings accepted for public keys (and signing seeds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// Hex digits, either case.
    Hex,
    /// Url-safe base64, padding optional. Tagged `base64` on the wire.
    #[serde(rename = "base64")]
    Base64Url,
}

impl KeyEncoding {
    /// Tag used on the command line and in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyEncoding::Hex => "hex",
            KeyEncoding::Base64Url => "base64",
        }
    }
}

impl FromStr for KeyEncoding {
    type Err = DecodeError;

    /// Parses `hex` or `base64`, ignoring ASCII case. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hex") {
            Ok(KeyEncoding::Hex)
        } else if s.eq_ignore_ascii_case("base64") {
            Ok(KeyEncoding::Base64Url)
        } else {
            Err(DecodeError::UnknownEncoding(s.to_string()))
        }
    }
}

impl fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A public key as supplied by the caller: encoding tag plus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKey {
    /// How `text` is encoded.
    pub encoding: KeyEncoding,
    /// Encoded key material.
    pub text: String,
}

impl EncodedKey {
    /// Pairs an encoding with its key text.
    pub fn new(encoding: KeyEncoding, text: impl Into<String>) -> Self {
        Self {
            encoding,
            text: text.into(),
        }
    }

    /// Builds a key from an encoding tag string such as `"HEX"` or `"base64"`.
    pub fn parse(encoding: &str, text: impl Into<String>) -> Result<Self, DecodeError> {
        Ok(Self::new(encoding.parse()?, text))
    }

    /// Decodes the key text into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DecodeError> {
        decode_key(self.encoding, &self.text)
    }
}

/// Decodes key text under the given encoding.
///
/// The byte length is not checked here; the verifier rejects keys that are
/// not exactly 32 bytes.
pub fn decode_key(encoding: KeyEncoding, text: &str) -> Result<Vec<u8>, DecodeError> {
    match encoding {
        KeyEncoding::Hex => decode_hex(text),
        KeyEncoding::Base64Url => decode_base64url(text),
    }
}

/// Lowercase hex SHA-256 of raw key bytes.
pub fn key_fingerprint(raw_key: &[u8]) -> String {
    hex::encode(Sha256::digest(raw_key))
}
