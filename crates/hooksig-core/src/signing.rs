//! Producer-side signing.
//!
//! Mirrors the verification path so fixtures and tooling can create
//! deliveries that any conforming receiver accepts.

use ed25519_dalek::{Signer, SigningKey, SECRET_KEY_LENGTH};

use crate::encoding::{encode_base64url, encode_hex};
use crate::errors::{HookSigError, VerifyError};
use crate::header::SignatureHeader;
use crate::key::{decode_key, KeyEncoding};
use crate::message::signed_message;

/// Signs `timestamp || payload` and returns the matching header.
pub fn sign_delivery(
    signing_key: &SigningKey,
    id: &str,
    timestamp: &str,
    payload: &[u8],
) -> SignatureHeader {
    let signature = signing_key.sign(&signed_message(timestamp, payload));
    SignatureHeader {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        signature: encode_base64url(&signature.to_bytes()),
    }
}

/// Decodes a 32-byte Ed25519 secret seed.
pub fn decode_signing_key(encoding: KeyEncoding, text: &str) -> Result<SigningKey, HookSigError> {
    let raw = decode_key(encoding, text)?;
    let seed: [u8; SECRET_KEY_LENGTH] =
        raw.as_slice().try_into().map_err(|_| VerifyError::KeyLength {
            expected: SECRET_KEY_LENGTH,
            actual: raw.len(),
        })?;
    Ok(SigningKey::from_bytes(&seed))
}

/// Renders key bytes as lowercase hex or unpadded url-safe base64.
pub fn encode_key(encoding: KeyEncoding, bytes: &[u8]) -> String {
    match encoding {
        KeyEncoding::Hex => encode_hex(bytes),
        KeyEncoding::Base64Url => encode_base64url(bytes),
    }
}
