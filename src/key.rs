//! The shared secret key that makes tokens opaque.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte length of a token key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// A 32-byte secret key for encoding and decoding tokens.
///
/// Tokens are only opaque to parties who do not hold this key. Do not publish
/// it to your API consumers.
///
/// The codec borrows the key per call and never retains it. Key material is
/// zeroed when the value is dropped, and the [`Debug`] impl redacts the bytes
/// so the key cannot leak through generic formatting paths.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Wrap raw key bytes.
    #[must_use]
    pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Wrap a byte slice, returning `None` unless it is exactly
    /// [`KEY_LEN`] bytes long.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; KEY_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw key bytes, for handing to the cipher.
    pub(crate) fn bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}
