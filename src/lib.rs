//! # rsjws
//!
//! JSON Web Signature (JWS) compact signing and verification with RSA.
//!
//! rsjws implements the compact JWS serialization for the four RSA-based
//! JOSE algorithms — RS256, RS512 (RSASSA-PKCS1-v1_5) and PS256, PS512
//! (RSASSA-PSS) — with a wire format that interoperates byte-for-byte with
//! independent implementations such as WebCrypto.
//!
//! ## Features
//!
//! - **Compact serialization**: `header.payload.signature` with unpadded
//!   base64url segments
//! - **Closed algorithm registry**: `alg` tokens resolve through an
//!   exhaustive enum, rejecting anything outside RS256/RS512/PS256/PS512
//! - **Opaque payloads**: payload bytes round-trip untouched; JSON
//!   interpretation is an explicit, caller-invoked convenience
//! - **PEM key material**: PKCS#8/PKCS#1 private keys,
//!   SubjectPublicKeyInfo/PKCS#1 public keys, plus RSA key generation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rsjws::{generate_key_pair, jws, Algorithm, Header};
//!
//! // Generate a new 2048-bit key pair
//! let pair = generate_key_pair(2048, 65537).unwrap();
//!
//! // Sign a payload
//! let header = Header::new(Algorithm::Rs256);
//! let compact = jws::sign(&header, b"hello", &pair.private).unwrap();
//!
//! // Verify it
//! let verification = jws::verify(&compact, &pair.public).unwrap();
//! let token = verification.token().unwrap();
//! assert_eq!(token.payload(), b"hello");
//! ```
//!
//! ## Security
//!
//! - PSS signatures draw a fresh digest-length salt from the OS RNG on
//!   every call; PKCS#1 v1.5 signatures are deterministic
//! - Key generation refuses moduli under 2048 bits and invalid exponents
//! - The algorithm registry is the single chokepoint against algorithm
//!   confusion: unknown `alg` tokens fail resolution before any
//!   cryptography runs
//!
//! ## Error Handling
//!
//! Structural problems (bad base64url, wrong segment count, unparsable
//! keys, unknown algorithms) surface as specific [`Error`] kinds. A
//! structurally valid but cryptographically wrong signature is *not* an
//! error: [`jws::verify`] returns [`jws::Verification::Invalid`] and
//! callers treat it as ordinary control flow.

pub mod algorithm;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod jws;
pub mod key;

pub use algorithm::{Algorithm, Padding};
pub use error::Error;
pub use jws::{Header, Token, Verification};
pub use key::{generate_key_pair, KeyPair, PrivateKey, PublicKey};
