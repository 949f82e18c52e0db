//! The closed registry of supported JWS algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A supported JWS signing algorithm.
///
/// The set is fixed at compile time. Resolving an `alg` token goes through
/// [`Algorithm::from_token`], which rejects everything outside this enum —
/// the single chokepoint against algorithm-confusion attacks, where an
/// attacker-controlled header smuggles in a weaker or mismatched scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rs256,
    /// RSASSA-PKCS1-v1_5 with SHA-512.
    Rs512,
    /// RSASSA-PSS with SHA-256 and MGF1/SHA-256.
    Ps256,
    /// RSASSA-PSS with SHA-512 and MGF1/SHA-512.
    Ps512,
}

/// RSA signature padding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Deterministic PKCS#1 v1.5 padding.
    Pkcs1v15,
    /// Probabilistic (salted) PSS padding.
    Pss,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Rs256,
        Algorithm::Rs512,
        Algorithm::Ps256,
        Algorithm::Ps512,
    ];

    /// Resolve a JOSE `alg` token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] for any token outside
    /// `RS256`, `RS512`, `PS256`, `PS512` (match is exact, case-sensitive).
    pub fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "RS256" => Ok(Algorithm::Rs256),
            "RS512" => Ok(Algorithm::Rs512),
            "PS256" => Ok(Algorithm::Ps256),
            "PS512" => Ok(Algorithm::Ps512),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// The JOSE `alg` token for this algorithm.
    pub fn token(self) -> &'static str {
        match self {
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs512 => "RS512",
            Algorithm::Ps256 => "PS256",
            Algorithm::Ps512 => "PS512",
        }
    }

    /// The padding scheme this algorithm uses.
    pub fn padding(self) -> Padding {
        match self {
            Algorithm::Rs256 | Algorithm::Rs512 => Padding::Pkcs1v15,
            Algorithm::Ps256 | Algorithm::Ps512 => Padding::Pss,
        }
    }

    /// Output size of the digest in bytes (also the PSS salt length).
    pub fn digest_size(self) -> usize {
        match self {
            Algorithm::Rs256 | Algorithm::Ps256 => 32,
            Algorithm::Rs512 | Algorithm::Ps512 => 64,
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_token(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
