use thiserror::Error;

/// Malformed key or signature encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Encoding tag outside the supported set.
    #[error("unsupported key encoding '{0}' (expected 'hex' or 'base64')")]
    UnknownEncoding(String),
    /// Hex input with an odd number of digits.
    #[error("hex input cannot have an odd number of digits: {len}")]
    OddLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// Non-hex character in hex input.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter {
        /// Offending character.
        character: char,
        /// Character index in the input.
        index: usize,
    },
    /// Invalid url-safe base64 input.
    #[error("invalid base64url input: {0}")]
    InvalidBase64(String),
}

/// Signature header that does not match `s:<id>:<timestamp>:<signature>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Wrong number of colon-separated fields.
    #[error("signature header must have 4 colon-separated fields, found {found}")]
    FieldCount {
        /// Number of fields present.
        found: usize,
    },
    /// First field is not the scheme tag.
    #[error("signature header scheme tag must be 's', found '{found}'")]
    SchemeTag {
        /// The rejected tag.
        found: String,
    },
}

/// Structurally invalid input to the verification primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Public key of the wrong length.
    #[error("public key must be {expected} bytes, got {actual}")]
    KeyLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// Signature of the wrong length.
    #[error("signature must be {expected} bytes, got {actual}")]
    SignatureLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// Key bytes that do not encode a valid curve point.
    #[error("public key is not a valid Ed25519 point: {0}")]
    InvalidKey(String),
}

/// Errors while loading a payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// I/O error while reading the payload.
    #[error("failed to read payload from {source_name}: {error}")]
    Io {
        /// Human-readable payload source.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },
    /// Payload exceeds the configured ceiling.
    #[error("payload size {size} exceeds maximum {max}")]
    TooLarge {
        /// Observed size (at least this many bytes).
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },
}

/// Any failure raised while verifying a delivery.
#[derive(Error, Debug)]
pub enum HookSigError {
    /// Key or signature encoding failed to decode.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    /// Signature header has the wrong shape.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// Key or signature bytes are structurally invalid.
    #[error("verification input error: {0}")]
    Verify(#[from] VerifyError),
    /// Payload could not be loaded.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
}
