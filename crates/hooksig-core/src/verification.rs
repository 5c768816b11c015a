use ed25519_dalek::{Signature, VerifyingKey};

use crate::errors::{HookSigError, VerifyError};
use crate::header::SignatureHeader;
use crate::key::{key_fingerprint, EncodedKey};
use crate::message::signed_message;

/// Raw Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Raw Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Verifies `signature` over `timestamp || payload` under `public_key`.
///
/// Returns `Ok(false)` when the signature does not validate. Errors are
/// reserved for inputs the primitive cannot accept: a key that is not 32
/// bytes, a signature that is not 64 bytes, or key bytes that do not
/// decompress to a curve point. Those checks run before any verification
/// arithmetic.
///
/// Small-order keys and small-order `R` components never verify, so a
/// weak key such as all zeros yields `Ok(false)` for every signature.
pub fn verify(
    public_key: &[u8],
    signature: &[u8],
    timestamp: &str,
    payload: &[u8],
) -> Result<bool, VerifyError> {
    let key = parse_verifying_key(public_key)?;
    let signature = parse_signature(signature)?;
    Ok(check(&key, &signature, timestamp, payload))
}

/// Decodes `key`, parses `header` and verifies it against `payload`.
///
/// Any decode or format problem aborts before the signature is checked.
pub fn verify_delivery(
    key: &EncodedKey,
    header: &str,
    payload: &[u8],
) -> Result<bool, HookSigError> {
    DeliveryVerifier::from_encoded(key)?.verify(header, payload)
}

fn parse_verifying_key(public_key: &[u8]) -> Result<VerifyingKey, VerifyError> {
    let bytes: &[u8; PUBLIC_KEY_LENGTH] =
        public_key.try_into().map_err(|_| VerifyError::KeyLength {
            expected: PUBLIC_KEY_LENGTH,
            actual: public_key.len(),
        })?;
    VerifyingKey::from_bytes(bytes).map_err(|e| VerifyError::InvalidKey(e.to_string()))
}

fn parse_signature(signature: &[u8]) -> Result<Signature, VerifyError> {
    let bytes: &[u8; SIGNATURE_LENGTH] =
        signature.try_into().map_err(|_| VerifyError::SignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        })?;
    Ok(Signature::from_bytes(bytes))
}

fn check(key: &VerifyingKey, signature: &Signature, timestamp: &str, payload: &[u8]) -> bool {
    key.verify_strict(&signed_message(timestamp, payload), signature)
        .is_ok()
}

/// Signature taken from a header, decoded and length-checked.
///
/// Building one up front surfaces encoding and length errors before the
/// payload is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSignature {
    timestamp: String,
    signature: Signature,
}

impl HeaderSignature {
    /// Decodes the signature field of `header`.
    pub fn from_header(header: &SignatureHeader) -> Result<Self, HookSigError> {
        let signature = parse_signature(&header.signature_bytes()?)?;
        Ok(Self {
            timestamp: header.timestamp.clone(),
            signature,
        })
    }

    /// Timestamp the signature covers.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Verifier bound to a single decoded public key.
///
/// Holds no mutable state; one instance can serve many deliveries, including
/// from several threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryVerifier {
    key: VerifyingKey,
}

impl DeliveryVerifier {
    /// Creates a verifier from raw public key bytes.
    pub fn new(public_key: &[u8]) -> Result<Self, VerifyError> {
        Ok(Self {
            key: parse_verifying_key(public_key)?,
        })
    }

    /// Creates a verifier from an encoded key.
    pub fn from_encoded(key: &EncodedKey) -> Result<Self, HookSigError> {
        let raw = key.decode()?;
        Ok(Self::new(&raw)?)
    }

    /// Raw public key bytes.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.key.to_bytes()
    }

    /// SHA-256 fingerprint of the public key, lowercase hex.
    pub fn fingerprint(&self) -> String {
        key_fingerprint(self.key.as_bytes())
    }

    /// Verifies a raw header string against `payload`.
    pub fn verify(&self, header: &str, payload: &[u8]) -> Result<bool, HookSigError> {
        let header = SignatureHeader::parse(header)?;
        self.verify_header(&header, payload)
    }

    /// Verifies an already-parsed header against `payload`.
    pub fn verify_header(
        &self,
        header: &SignatureHeader,
        payload: &[u8],
    ) -> Result<bool, HookSigError> {
        let signature = HeaderSignature::from_header(header)?;
        Ok(self.verify_signature(&signature, payload))
    }

    /// Verifies a pre-decoded header signature against `payload`.
    pub fn verify_signature(&self, signature: &HeaderSignature, payload: &[u8]) -> bool {
        check(&self.key, &signature.signature, &signature.timestamp, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn test_key() -> SigningKey {
        SigningKey::from_bytes(&[7u8; 32])
    }

    #[test]
    fn accepts_valid_signature() {
        let key = test_key();
        let sig = key.sign(b"42hello");
        let public = key.verifying_key().to_bytes();
        assert!(verify(&public, &sig.to_bytes(), "42", b"hello").unwrap());
    }

    #[test]
    fn split_point_does_not_matter() {
        let key = test_key();
        let sig = key.sign(b"42hello");
        let public = key.verifying_key().to_bytes();
        assert!(verify(&public, &sig.to_bytes(), "42h", b"ello").unwrap());
    }

    #[test]
    fn rejects_short_key_before_signature() {
        assert_eq!(
            verify(&[0u8; 31], &[0u8; 10], "1", b""),
            Err(VerifyError::KeyLength {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn rejects_wrong_signature_length() {
        let public = test_key().verifying_key().to_bytes();
        assert_eq!(
            verify(&public, &[0u8; 65], "1", b""),
            Err(VerifyError::SignatureLength {
                expected: 64,
                actual: 65
            })
        );
    }

    #[test]
    fn verifier_exposes_key_and_fingerprint() {
        let public = test_key().verifying_key().to_bytes();
        let verifier = DeliveryVerifier::new(&public).unwrap();
        assert_eq!(verifier.public_key(), public);
        assert_eq!(verifier.fingerprint(), key_fingerprint(&public));
    }

    #[test]
    fn header_signature_checks_length_without_payload() {
        let header = SignatureHeader::parse("s:abc:1700000000:AAAA").unwrap();
        assert!(matches!(
            HeaderSignature::from_header(&header),
            Err(HookSigError::Verify(VerifyError::SignatureLength {
                expected: 64,
                actual: 3
            }))
        ));
    }

    #[test]
    fn header_signature_verifies_like_header() {
        let key = test_key();
        let header = crate::sign_delivery(&key, "evt", "42", b"hello");
        let signature = HeaderSignature::from_header(&header).unwrap();
        assert_eq!(signature.timestamp(), "42");

        let verifier = DeliveryVerifier::new(&key.verifying_key().to_bytes()).unwrap();
        assert!(verifier.verify_signature(&signature, b"hello"));
        assert!(!verifier.verify_signature(&signature, b"hellO"));
    }
}
