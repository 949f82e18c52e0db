use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// Encode bytes as an unpadded base64url segment.
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
///
/// Strict: padding characters, characters outside the URL-safe alphabet, and
/// non-canonical trailing bits are all rejected, so every decoded value
/// re-encodes to exactly the input segment.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, Error> {
    Ok(URL_SAFE_NO_PAD.decode(segment)?)
}

/// Serialize a value to JSON bytes.
pub fn serialize_json<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(value)?)
}

/// Parse JSON bytes into a value.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_has_no_padding() {
        // "hello" is 5 bytes, so standard base64 would carry a '=' pad.
        assert_eq!(encode_segment(b"hello"), "aGVsbG8");
        assert_eq!(encode_segment(b""), "");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        let encoded = encode_segment(&[0xfb, 0xff, 0xbf]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(decode_segment(&encoded).unwrap(), vec![0xfb, 0xff, 0xbf]);
    }

    #[test]
    fn test_decode_round_trip() {
        let data: Vec<u8> = (0u8..=255).collect();
        let encoded = encode_segment(&data);
        assert_eq!(decode_segment(&encoded).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_padding() {
        assert!(matches!(
            decode_segment("aGVsbG8="),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        assert!(matches!(
            decode_segment("a+b/c"),
            Err(Error::MalformedEncoding(_))
        ));
        assert!(matches!(
            decode_segment("not base64!"),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_canonical_trailing_bits() {
        // "aGVsbG9" decodes, but "aGVsbG9x" truncated to "aGVsbG9"+junk in the
        // final quantum must not silently round down: "QQ" is canonical for
        // [0x41], "QR" carries spare bits and is not.
        assert_eq!(decode_segment("QQ").unwrap(), vec![0x41]);
        assert!(matches!(
            decode_segment("QR"),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let value = serde_json::json!({"alg": "RS256", "kid": "key-1"});
        let bytes = serialize_json(&value).unwrap();
        let parsed: serde_json::Value = parse_json(&bytes).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        let result: Result<serde_json::Value, _> = parse_json(b"{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
