//! Url-safe base64 and hex primitives shared by keys and signatures.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::errors::DecodeError;

/// Url-safe base64 that emits no padding and accepts input with or without it.
///
/// Unused low bits in the final symbol are discarded rather than rejected.
pub const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes url-safe base64 (`-`/`_` alphabet, padding optional).
pub fn decode_base64url(text: &str) -> Result<Vec<u8>, DecodeError> {
    BASE64URL
        .decode(text)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Encodes bytes as unpadded url-safe base64.
pub fn encode_base64url(bytes: &[u8]) -> String {
    BASE64URL.encode(bytes)
}

/// Decodes hex digits (either case), two characters per byte, high nibble first.
///
/// Positions and lengths in errors count characters, not UTF-8 bytes.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, DecodeError> {
    if let Some((index, character)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(DecodeError::InvalidHexCharacter { character, index });
    }
    // Only ASCII remains, so byte length equals character count.
    hex::decode(text).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => DecodeError::InvalidHexCharacter {
            character: c,
            index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            DecodeError::OddLength { len: text.len() }
        }
    })
}

/// Encodes bytes as lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_mixed_case() {
        assert_eq!(decode_hex("0aFf").unwrap(), vec![0x0a, 0xff]);
    }

    #[test]
    fn hex_rejects_odd_length() {
        assert_eq!(decode_hex("abc"), Err(DecodeError::OddLength { len: 3 }));
    }

    #[test]
    fn hex_reports_offending_character() {
        assert_eq!(
            decode_hex("00zz"),
            Err(DecodeError::InvalidHexCharacter {
                character: 'z',
                index: 2
            })
        );
    }

    #[test]
    fn hex_counts_characters_not_bytes() {
        assert_eq!(
            decode_hex("é0"),
            Err(DecodeError::InvalidHexCharacter {
                character: 'é',
                index: 0
            })
        );
        assert_eq!(
            decode_hex("00é0"),
            Err(DecodeError::InvalidHexCharacter {
                character: 'é',
                index: 2
            })
        );
        assert_eq!(
            decode_hex("0z0"),
            Err(DecodeError::InvalidHexCharacter {
                character: 'z',
                index: 1
            })
        );
    }

    #[test]
    fn hex_decode_encode_is_case_normalized() {
        for input in ["", "00", "DEADbeef", "0123456789abcdefABCDEF00"] {
            let bytes = decode_hex(input).unwrap();
            assert_eq!(encode_hex(&bytes), input.to_ascii_lowercase());
        }
    }

    #[test]
    fn base64url_ignores_padding() {
        let unpadded = decode_base64url("AQID_w").unwrap();
        let padded = decode_base64url("AQID_w==").unwrap();
        assert_eq!(unpadded, vec![0x01, 0x02, 0x03, 0xff]);
        assert_eq!(unpadded, padded);
    }

    #[test]
    fn base64url_rejects_standard_alphabet() {
        assert!(matches!(
            decode_base64url("AQID/w"),
            Err(DecodeError::InvalidBase64(_))
        ));
        assert!(decode_base64url("AQID+w").is_err());
    }

    #[test]
    fn base64url_rejects_impossible_length() {
        assert!(decode_base64url("A").is_err());
    }

    #[test]
    fn base64url_discards_trailing_bits() {
        // 43 symbols carry 258 bits; the last two bits of the final symbol are unused.
        let canonical = decode_base64url("11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo").unwrap();
        let loose = decode_base64url("11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURp").unwrap();
        assert_eq!(canonical.len(), 32);
        assert_eq!(canonical, loose);
        assert_eq!(decode_base64url("AQI").unwrap(), decode_base64url("AQL").unwrap());
    }

    #[test]
    fn base64url_encodes_without_padding() {
        assert_eq!(encode_base64url(&[0x01, 0x02, 0x03, 0xff]), "AQID_w");
    }
}
