//! Opaque, tamper-proof pagination tokens.
//!
//! APIs that paginate leak implementation details through their cursors:
//! consumers parse offsets out of "opaque" strings, depend on them, and break
//! when the internals change (Hyrum's Law). This crate encrypts the
//! continuation state so the token is opaque in the cryptographic sense —
//! holders without the key cannot read it, forge it, or meaningfully compare
//! two tokens.
//!
//! Token opacity is implemented with NaCl secretbox (XSalsa20Poly1305).
//! Tokens are only opaque to parties who do not hold the key; do not publish
//! the key to your API consumers.
//!
//! # Token format
//!
//! ```text
//! base64url-with-padding( nonce(24) || poly1305-tag(16) || ciphertext )
//! ```
//!
//! A fresh random nonce is drawn per [`encode`] call, so the same state never
//! encodes to the same token twice. The empty string is reserved as the
//! "no state / first page" sentinel: it is never produced by [`encode`] and
//! [`decode`] treats it as a successful no-op.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use pagetoken::Key;
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Cursor {
//!     offset: u64,
//!     query: String,
//! }
//!
//! let key = Key::new([0x2a; 32]);
//!
//! let token = pagetoken::encode(&key, &Cursor { offset: 40, query: "tea".into() });
//!
//! let mut cursor = Cursor::default();
//! pagetoken::decode(&key, &token, &mut cursor)?;
//! assert_eq!(cursor.offset, 40);
//!
//! // An empty token means "first page" and leaves the cursor untouched.
//! pagetoken::decode(&key, "", &mut cursor)?;
//! assert_eq!(cursor.offset, 40);
//! # Ok::<(), pagetoken::DecodeError>(())
//! ```
//!
//! Both operations are synchronous and stateless; any number of calls may run
//! concurrently with no coordination.

mod codec;
mod error;
mod key;

pub use codec::{decode, encode, NONCE_LEN};
pub use error::DecodeError;
pub use key::{Key, KEY_LEN};
