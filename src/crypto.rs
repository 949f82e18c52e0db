//! Raw RSA signature primitive: PKCS#1 v1.5 and PSS over SHA-256/SHA-512.

use rand::rngs::OsRng;
use rsa::signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier};
use rsa::{pkcs1v15, pss};
use sha2::{Sha256, Sha512};

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::key::{PrivateKey, PublicKey};

/// Sign a message with the given algorithm and private key.
///
/// The message is digested internally with the algorithm's hash function.
/// PKCS#1 v1.5 signatures (RS256/RS512) are deterministic; PSS signatures
/// (PS256/PS512) draw a fresh digest-length salt from the OS RNG on every
/// call, so repeated signs of the same input differ while all verifying.
///
/// # Errors
///
/// Returns [`Error::Crypto`] if the underlying RSA operation fails.
pub fn sign(alg: Algorithm, message: &[u8], key: &PrivateKey) -> Result<Vec<u8>, Error> {
    let key = key.inner().clone();
    let signature = match alg {
        Algorithm::Rs256 => pkcs1v15::SigningKey::<Sha256>::new(key)
            .try_sign(message)
            .map_err(|e| Error::Crypto(e.to_string()))?
            .to_vec(),
        Algorithm::Rs512 => pkcs1v15::SigningKey::<Sha512>::new(key)
            .try_sign(message)
            .map_err(|e| Error::Crypto(e.to_string()))?
            .to_vec(),
        Algorithm::Ps256 => pss::SigningKey::<Sha256>::new(key)
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| Error::Crypto(e.to_string()))?
            .to_vec(),
        Algorithm::Ps512 => pss::SigningKey::<Sha512>::new(key)
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| Error::Crypto(e.to_string()))?
            .to_vec(),
    };
    Ok(signature)
}

/// Verify a signature over a message with the given algorithm and public key.
///
/// Returns `false` — never an error — for anything wrong with the signature
/// itself: wrong length for the modulus, padding structure mismatch, or
/// digest mismatch. The key is already parsed, so there is no failure mode
/// left that is not simply "not verified".
pub fn verify(alg: Algorithm, message: &[u8], signature: &[u8], key: &PublicKey) -> bool {
    let key = key.inner().clone();
    match alg {
        Algorithm::Rs256 => match pkcs1v15::Signature::try_from(signature) {
            Ok(sig) => pkcs1v15::VerifyingKey::<Sha256>::new(key)
                .verify(message, &sig)
                .is_ok(),
            Err(_) => false,
        },
        Algorithm::Rs512 => match pkcs1v15::Signature::try_from(signature) {
            Ok(sig) => pkcs1v15::VerifyingKey::<Sha512>::new(key)
                .verify(message, &sig)
                .is_ok(),
            Err(_) => false,
        },
        Algorithm::Ps256 => match pss::Signature::try_from(signature) {
            Ok(sig) => pss::VerifyingKey::<Sha256>::new(key)
                .verify(message, &sig)
                .is_ok(),
            Err(_) => false,
        },
        Algorithm::Ps512 => match pss::Signature::try_from(signature) {
            Ok(sig) => pss::VerifyingKey::<Sha512>::new(key)
                .verify(message, &sig)
                .is_ok(),
            Err(_) => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::test_keys::{other_public_key, private_key, public_key};

    #[test]
    fn test_sign_and_verify_all_algorithms() {
        let private = private_key();
        let public = public_key();
        let message = b"The quick brown fox jumps over the lazy dog";

        for alg in Algorithm::ALL {
            let signature = sign(alg, message, &private).unwrap();
            assert_eq!(signature.len(), public.modulus_len(), "{alg}");
            assert!(verify(alg, message, &signature, &public), "{alg}");
            assert!(!verify(alg, b"different message", &signature, &public), "{alg}");
        }
    }

    #[test]
    fn test_pkcs1v15_is_deterministic() {
        let private = private_key();
        let message = b"determinism";
        let first = sign(Algorithm::Rs256, message, &private).unwrap();
        let second = sign(Algorithm::Rs256, message, &private).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pss_is_randomized() {
        let private = private_key();
        let public = public_key();
        let message = b"salted";
        let first = sign(Algorithm::Ps256, message, &private).unwrap();
        let second = sign(Algorithm::Ps256, message, &private).unwrap();
        assert_ne!(first, second);
        assert!(verify(Algorithm::Ps256, message, &first, &public));
        assert!(verify(Algorithm::Ps256, message, &second, &public));
    }

    #[test]
    fn test_verify_wrong_key_is_false() {
        let signature = sign(Algorithm::Rs512, b"msg", &private_key()).unwrap();
        assert!(!verify(Algorithm::Rs512, b"msg", &signature, &other_public_key()));
    }

    #[test]
    fn test_verify_wrong_algorithm_is_false() {
        let private = private_key();
        let public = public_key();
        let signature = sign(Algorithm::Rs256, b"msg", &private).unwrap();
        // Same key type, different padding or hash: must reject, not error.
        assert!(!verify(Algorithm::Ps256, b"msg", &signature, &public));
        assert!(!verify(Algorithm::Rs512, b"msg", &signature, &public));
    }

    #[test]
    fn test_verify_wrong_length_is_false() {
        let public = public_key();
        let signature = sign(Algorithm::Rs256, b"msg", &private_key()).unwrap();
        assert!(!verify(Algorithm::Rs256, b"msg", &signature[..255], &public));
        assert!(!verify(Algorithm::Rs256, b"msg", &[], &public));
        let mut extended = signature.clone();
        extended.push(0);
        assert!(!verify(Algorithm::Rs256, b"msg", &extended, &public));
    }

    #[test]
    fn test_verify_flipped_bit_is_false() {
        let public = public_key();
        let mut signature = sign(Algorithm::Ps512, b"msg", &private_key()).unwrap();
        signature[0] ^= 0x01;
        assert!(!verify(Algorithm::Ps512, b"msg", &signature, &public));
    }
}
