//! Token encoding and decoding over NaCl secretbox.
//!
//! **Algorithm choice:** XSalsa20Poly1305 ("secretbox") is an authenticated
//! cipher — the Poly1305 tag is verified in constant time before any
//! plaintext is released, so tampered or forged tokens are rejected rather
//! than decoded into garbage.
//!
//! **Do NOT substitute a bare stream cipher.** Without the authentication
//! tag, API consumers could flip ciphertext bits and feed the server
//! attacker-controlled pagination state.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use crypto_secretbox::{
    aead::{Aead, KeyInit, OsRng},
    Nonce, XSalsa20Poly1305,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::DecodeError;
use crate::key::Key;

/// Byte length of a secretbox nonce (24 bytes = 192 bits).
pub const NONCE_LEN: usize = 24;

/// Encode `value` as an encrypted, URL-safe token under `key`.
///
/// The token is `base64url(nonce || ciphertext)` with padding retained. A
/// fresh random nonce is drawn from the OS CSPRNG per call, so encoding the
/// same key and value twice produces different tokens — consumers cannot
/// compare tokens for equality to infer anything about the state inside.
///
/// # Panics
///
/// Panics if `value` cannot be JSON-encoded, or if the OS random source
/// fails. Both indicate a bug or an unusable environment, not a condition
/// callers should branch on: keep your pagination-state type within the
/// serde-serializable subset.
pub fn encode<T: Serialize>(key: &Key, value: &T) -> String {
    // Use OsRng for a cryptographically secure random nonce.
    use crypto_secretbox::aead::rand_core::RngCore;
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    encode_with_nonce(key, nonce, value)
}

fn encode_with_nonce<T: Serialize>(key: &Key, nonce_bytes: [u8; NONCE_LEN], value: &T) -> String {
    let plaintext = serde_json::to_vec(value)
        .unwrap_or_else(|err| panic!("pagination state is not JSON-serializable: {err}"));

    let cipher = XSalsa20Poly1305::new(key.bytes().into());
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_ref())
        .expect("secretbox seal failed");

    let mut raw = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    raw.extend_from_slice(&nonce_bytes);
    raw.extend_from_slice(&ciphertext);
    URL_SAFE.encode(raw)
}

/// Decrypt `token` under `key` and store the decoded value in `out`.
///
/// If `token` is the empty string — the reserved "no state / first page"
/// sentinel — `out` is left untouched and `Ok(())` is returned, so callers
/// need no branch at the call site.
///
/// Decoding is a pure function of `(key, token)`: the same token may be
/// decoded any number of times.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if the token is not valid base64url or
/// decodes to fewer than [`NONCE_LEN`] bytes,
/// [`DecodeError::AuthenticationFailed`] if the ciphertext fails its
/// integrity check (wrong key or tampering), and
/// [`DecodeError::Deserialization`] if the decrypted payload does not match
/// the shape of `T`. Never panics on untrusted input.
pub fn decode<T: DeserializeOwned>(key: &Key, token: &str, out: &mut T) -> Result<(), DecodeError> {
    if token.is_empty() {
        return Ok(());
    }

    let raw = URL_SAFE.decode(token).map_err(|_| DecodeError::Malformed)?;
    if raw.len() < NONCE_LEN {
        return Err(DecodeError::Malformed);
    }
    let (nonce, ciphertext) = raw.split_at(NONCE_LEN);

    let cipher = XSalsa20Poly1305::new(key.bytes().into());
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| DecodeError::AuthenticationFailed)?;

    *out = serde_json::from_slice(&plaintext).map_err(|_| DecodeError::Deserialization)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KEY_LEN;

    fn random_key() -> Key {
        use crypto_secretbox::aead::rand_core::RngCore;
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Key::new(bytes)
    }

    // Randomized key, fixed so the recorded token below stays valid.
    // Do not use it in production.
    const TESTKEY: [u8; KEY_LEN] = [
        24, 12, 15, 90, 143, 133, 171, 28, 34, 75, 185, 194, 102, 93, 165, 183, 235, 96, 135, 135,
        165, 1, 129, 91, 32, 7, 139, 135, 130, 2, 241, 168,
    ];

    // Token produced for payload `123` under TESTKEY with an all-zero nonce.
    // Pins the wire format: any compatible codec must reproduce it exactly.
    const FIXED_TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAULRUMRVA4GIqe5Y8N_z8B4J7hw==";

    #[test]
    fn encode_decode_round_trip() {
        let key = random_key();
        let mut out = 0u64;
        decode(&key, &encode(&key, &42u64), &mut out).unwrap();
        assert_eq!(out, 42);
    }

    #[test]
    fn encode_is_randomized() {
        let key = random_key();
        assert_ne!(encode(&key, &42u64), encode(&key, &42u64));
    }

    #[test]
    fn fixed_nonce_reproduces_recorded_token() {
        let token = encode_with_nonce(&Key::new(TESTKEY), [0u8; NONCE_LEN], &123i32);
        assert_eq!(token, FIXED_TOKEN);
    }

    #[test]
    fn recorded_token_decodes() {
        let mut out = 0i32;
        decode(&Key::new(TESTKEY), FIXED_TOKEN, &mut out).unwrap();
        assert_eq!(out, 123);
    }

    #[test]
    fn empty_token_is_a_no_op() {
        let mut out = 123i32;
        decode(&random_key(), "", &mut out).unwrap();
        assert_eq!(out, 123);
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let token = encode(&random_key(), &42u64);
        let mut out = 0u64;
        assert_eq!(
            decode(&random_key(), &token, &mut out),
            Err(DecodeError::AuthenticationFailed)
        );
    }

    #[test]
    fn tampered_ciphertext_fails_authentication() {
        let key = random_key();
        let mut raw = URL_SAFE.decode(encode(&key, &42u64)).unwrap();
        // Flip a byte past the nonce region to simulate tampering.
        *raw.last_mut().unwrap() ^= 0x01;
        let mut out = 0u64;
        assert_eq!(
            decode(&key, &URL_SAFE.encode(raw), &mut out),
            Err(DecodeError::AuthenticationFailed)
        );
    }

    #[test]
    fn invalid_base64_is_malformed() {
        let mut out = 0u64;
        assert_eq!(
            decode(&random_key(), "not!base64", &mut out),
            Err(DecodeError::Malformed)
        );
    }

    #[test]
    fn short_payload_is_malformed() {
        // Valid base64, but fewer than NONCE_LEN decoded bytes.
        let token = URL_SAFE.encode([0u8; NONCE_LEN - 1]);
        let mut out = 0u64;
        assert_eq!(
            decode(&random_key(), &token, &mut out),
            Err(DecodeError::Malformed)
        );
    }

    #[test]
    fn shape_mismatch_is_a_deserialization_error() {
        let key = random_key();
        let token = encode(&key, &"a string, not a number");
        let mut out = 0u64;
        assert_eq!(
            decode(&key, &token, &mut out),
            Err(DecodeError::Deserialization)
        );
    }
}
