//! Compact JWS serialization: the sign and verify flows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::algorithm::Algorithm;
use crate::codec;
use crate::crypto;
use crate::error::Error;
use crate::key::{PrivateKey, PublicKey};

/// A JWS protected header.
///
/// `alg` is the only parameter the engine interprets. Everything else is
/// carried verbatim through serde and round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Header {
    /// The signing algorithm token, e.g. `"RS256"`.
    pub alg: String,
    /// Additional header parameters, preserved but not interpreted.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Header {
    /// Header containing only the given algorithm.
    pub fn new(alg: Algorithm) -> Self {
        Header {
            alg: alg.token().to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add an additional header parameter.
    pub fn with_param(mut self, name: &str, value: Value) -> Self {
        self.extra.insert(name.to_string(), value);
        self
    }
}

/// The outcome of [`verify`].
///
/// A cryptographically invalid signature is a normal value, not an error:
/// structural problems with the input (wrong segment count, bad base64url,
/// unknown algorithm) surface as [`Error`] from [`verify`] instead.
#[derive(Debug)]
pub enum Verification {
    /// The signature checked out; header and payload may now be trusted.
    Valid(Token),
    /// Structurally sound, cryptographically rejected. Nothing is exposed.
    Invalid,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid(_))
    }

    /// The verified token, if the signature checked out.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Verification::Valid(token) => Some(token),
            Verification::Invalid => None,
        }
    }

    pub fn into_token(self) -> Option<Token> {
        match self {
            Verification::Valid(token) => Some(token),
            Verification::Invalid => None,
        }
    }
}

/// A verified JWS: the raw header and payload, with parsed forms on demand.
///
/// The unparsed forms are exactly the bytes that were signed — callers doing
/// cross-implementation comparisons must use these, since independent
/// implementations may disagree on JSON whitespace and key order.
#[derive(Debug, Clone)]
pub struct Token {
    header: String,
    payload: Vec<u8>,
}

impl Token {
    /// The header JSON exactly as it appeared in the message.
    pub fn header_raw(&self) -> &str {
        &self.header
    }

    /// The payload bytes exactly as they appeared in the message.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload as UTF-8 text, if it is valid UTF-8.
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }

    /// Parse the header into a [`Header`].
    pub fn parsed_header(&self) -> Result<Header, Error> {
        codec::parse_json(self.header.as_bytes())
    }

    /// Interpret the payload as JSON. Optional: payloads are opaque bytes
    /// and need not be JSON at all.
    pub fn parsed_payload(&self) -> Result<Value, Error> {
        codec::parse_json(&self.payload)
    }
}

/// Sign a payload under the given header, producing a compact JWS.
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`] if the header's `alg` is outside
/// the registry, or [`Error::Crypto`] if signing itself fails.
pub fn sign(header: &Header, payload: &[u8], key: &PrivateKey) -> Result<String, Error> {
    let header_json = serde_json::to_string(header)?;
    sign_serialized(&header_json, payload, key)
}

/// Sign with a pre-serialized header, carried byte-for-byte.
///
/// The given header text becomes the first segment verbatim, so a verifier's
/// unparsed header compares equal to exactly this string. `alg` is still
/// resolved out of it through the registry.
pub fn sign_serialized(header_json: &str, payload: &[u8], key: &PrivateKey) -> Result<String, Error> {
    let alg = resolve_alg(header_json.as_bytes())?;

    // The signing input is the two encoded segments joined by '.', as ASCII.
    // Never the decoded forms.
    let mut compact = codec::encode_segment(header_json.as_bytes());
    compact.push('.');
    compact.push_str(&codec::encode_segment(payload));

    let signature = crypto::sign(alg, compact.as_bytes(), key)?;

    compact.push('.');
    compact.push_str(&codec::encode_segment(&signature));
    Ok(compact)
}

/// Verify a compact JWS against a public key.
///
/// # Errors
///
/// * [`Error::MalformedJws`] - not exactly three `.`-separated segments.
/// * [`Error::MalformedEncoding`] - a segment is not valid base64url.
/// * [`Error::Json`] - the header does not decode to JSON.
/// * [`Error::UnsupportedAlgorithm`] - `alg` missing or outside the registry.
///
/// A structurally valid message whose signature does not check out is
/// `Ok(Verification::Invalid)`, never an error.
pub fn verify(compact: &str, key: &PublicKey) -> Result<Verification, Error> {
    let segments: Vec<&str> = compact.split('.').collect();
    let [encoded_header, encoded_payload, encoded_signature] = segments[..] else {
        return Err(Error::MalformedJws(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    let header_bytes = codec::decode_segment(encoded_header)?;
    let alg = resolve_alg(&header_bytes)?;
    let payload = codec::decode_segment(encoded_payload)?;
    let signature = codec::decode_segment(encoded_signature)?;

    // Recompute the signing input from the original, undecoded segments.
    let signing_input_len = encoded_header.len() + 1 + encoded_payload.len();
    let signing_input = &compact.as_bytes()[..signing_input_len];

    if !crypto::verify(alg, signing_input, &signature, key) {
        return Ok(Verification::Invalid);
    }

    let header = String::from_utf8(header_bytes)
        .map_err(|_| Error::MalformedJws("header is not valid UTF-8".to_string()))?;
    Ok(Verification::Valid(Token { header, payload }))
}

/// Pull `alg` out of decoded header JSON and resolve it.
fn resolve_alg(header_bytes: &[u8]) -> Result<Algorithm, Error> {
    let header: Value = codec::parse_json(header_bytes)?;
    let token = header
        .get("alg")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::UnsupportedAlgorithm("missing \"alg\" header parameter".to_string()))?;
    Algorithm::from_token(token)
}
