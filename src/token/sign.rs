//! Keyed-hash signature computation.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use tracing::instrument;

use crate::token::algorithm::Algorithm;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Computes the raw signature bytes for a message.
///
/// Applies the keyed hash (HMAC) mapped to by `algorithm` over `message`
/// using `key`, and returns the raw digest bytes, non-encoded. The key is
/// an opaque byte string; it is used for this one computation and never
/// retained. Same inputs always produce the same output, and each call
/// builds a fresh HMAC state, so concurrent calls never interact.
///
/// # Examples
///
/// ```
/// use hmac_jwt::{sign, Algorithm};
///
/// let tag = sign(b"header.payload", b"secret", Algorithm::Hs256);
/// assert_eq!(tag.len(), Algorithm::Hs256.signature_len());
/// ```
#[must_use]
#[instrument(skip(message, key), fields(algorithm = %algorithm, message_len = message.len()))]
pub fn sign(message: &[u8], key: &[u8], algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Hs256 => {
            let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Hs384 => {
            let mut mac = HmacSha384::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Hs512 => {
            let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
    }
}
