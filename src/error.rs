use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Cryptographic rejection of a structurally valid signature is deliberately
/// *not* represented here: it is reported as a value
/// ([`Verification::Invalid`](crate::jws::Verification::Invalid), or a
/// `false` return from [`crypto::verify`](crate::crypto::verify)), so callers
/// can treat "not verified" as routine control flow rather than a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// A segment is not valid unpadded base64url.
    #[error("malformed base64url segment: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),

    /// A compact JWS did not have the expected three-segment shape.
    #[error("malformed JWS: {0}")]
    MalformedJws(String),

    /// Unparsable PEM/DER key material, or a key of the wrong type.
    #[error("key format error: {0}")]
    KeyFormat(String),

    /// Key generation parameters were invalid or unsafe.
    #[error("key generation error: {0}")]
    KeyGeneration(String),

    /// An `alg` token outside the closed RS256/RS512/PS256/PS512 registry.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Header or payload bytes could not be handled as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal RSA failure during signing.
    #[error("crypto error: {0}")]
    Crypto(String),
}

impl From<rsa::pkcs8::Error> for Error {
    fn from(err: rsa::pkcs8::Error) -> Self {
        Error::KeyFormat(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for Error {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        Error::KeyFormat(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for Error {
    fn from(err: rsa::pkcs1::Error) -> Self {
        Error::KeyFormat(err.to_string())
    }
}
