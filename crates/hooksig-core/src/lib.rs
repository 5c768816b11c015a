//! Ed25519 signature verification for webhook deliveries.
//!
//! A delivery carries a signature header of the form `s:<id>:<timestamp>:<sig>`.
//! The signed message is the UTF-8 timestamp immediately followed by the raw
//! payload bytes, with no separator and no length prefix. Verification
//! rebuilds those bytes and checks them against one caller-supplied public key.
//!
//! This crate provides:
//! - Key decoding from hex or url-safe base64
//! - Signature header parsing
//! - Signed-message reconstruction and Ed25519 verification
//! - Payload loading with size limits
//! - Producer-side signing, used for fixtures and tooling
//!
//! ## Quick Start
//!
//! ```rust
//! use hooksig_core::{sign_delivery, verify_delivery, EncodedKey, KeyEncoding};
//! use ed25519_dalek::SigningKey;
//!
//! let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! let payload = br#"{"event":"ping"}"#;
//! let header = sign_delivery(&signing_key, "delivery-1", "1700000000", payload);
//!
//! let public_key = hex::encode(signing_key.verifying_key().to_bytes());
//! let key = EncodedKey::new(KeyEncoding::Hex, public_key);
//! assert!(verify_delivery(&key, &header.to_string(), payload)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Core invariants:
//! - A signature mismatch is `Ok(false)`, never an error
//! - Structural problems (bad encodings, bad header shape, wrong lengths,
//!   keys that are not curve points) are errors raised before any
//!   cryptographic work
//! - Verification is stateless and never logs
//!
#![deny(missing_docs)]

/// Url-safe base64 and hex primitives.
pub mod encoding;
/// Error types for decoding, parsing, payload loading and verification.
pub mod errors;
/// Signature header parsing.
pub mod header;
/// Public key encodings and decoding.
pub mod key;
/// Signed-message reconstruction.
pub mod message;
/// Payload loading.
pub mod payload;
/// Producer-side signing.
pub mod signing;
/// Verification primitive and delivery verifier.
pub mod verification;

pub use errors::{DecodeError, FormatError, HookSigError, PayloadError, VerifyError};
pub use header::{SignatureHeader, SCHEME_TAG};
pub use key::{decode_key, key_fingerprint, EncodedKey, KeyEncoding};
pub use message::signed_message;
pub use payload::{read_payload, PayloadSource};
pub use signing::{decode_signing_key, encode_key, sign_delivery};
pub use verification::{
    verify, verify_delivery, DeliveryVerifier, HeaderSignature, PUBLIC_KEY_LENGTH,
    SIGNATURE_LENGTH,
};
