//! Decode-side error types.
//!
//! Tokens arrive from outside the process, so every decode failure is a
//! recoverable error value. The variants are deliberately coarse and carry no
//! inner detail: a caller probing with forged tokens learns nothing beyond
//! which of the three stages rejected the input, and all three should be
//! handled the same way ("invalid token, reject the request").
//!
//! Encode-side failures are a different regime entirely — they come from the
//! calling program's own values and environment, and [`crate::encode`] panics
//! on them instead of returning an error callers might swallow.

use thiserror::Error;

/// The reason a token was rejected during [`crate::decode`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The token is not base64url-with-padding, or decodes to fewer bytes
    /// than the nonce length.
    #[error("malformed token")]
    Malformed,

    /// The ciphertext failed authentication — wrong key, tampered nonce or
    /// ciphertext, or a token not produced by this codec.
    #[error("token authentication failed")]
    AuthenticationFailed,

    /// The decrypted payload does not match the shape of the requested type.
    #[error("token payload does not match the expected shape")]
    Deserialization,
}
