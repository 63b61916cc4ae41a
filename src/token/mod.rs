//! Signed compact token codec.
//!
//! This module implements the three-segment token format of
//! [RFC 7519](https://www.rfc-editor.org/rfc/rfc7519.html) (JSON Web Token)
//! restricted to the symmetric HMAC family of
//! [RFC 7515](https://www.rfc-editor.org/rfc/rfc7515.html) (JSON Web
//! Signature). A producer attaches a keyed-hash authentication tag to a set
//! of claims; a consumer decodes and authenticates that tag before trusting
//! the claims.
//!
//! # Wire Format
//!
//! A token is three base64url segments (no padding) joined by `.`:
//!
//! ```text
//! base64url(JSON(header)) "." base64url(JSON(payload)) "." base64url(signature)
//!
//! header = {"typ":"JWT","alg":<algorithm-id>}
//! ```
//!
//! The **signing input** is the header and payload segments joined by `.` —
//! the exact byte string that gets authenticated. The signature is the raw
//! HMAC digest of the signing input under the caller's key.
//!
//! # Key Components
//!
//! - [`encode()`]: serialize, sign, and join the three segments
//! - [`decode()`]: reverse the encoding and authenticate the signature
//! - [`decode_unverified()`]: reverse the encoding only, by explicit request
//! - [`decode_header()`]: expose the header segment for key selection
//! - [`sign()`]: the raw keyed-hash primitive the above are built on
//! - [`Algorithm`]: the fixed identifier-to-hash-function table
//!
//! # Validation Sequence
//!
//! Decoding applies its checks in a fixed order, each failure
//! short-circuiting the rest: segment count, header decoding, payload
//! decoding, signature decoding, algorithm presence, signature match. See
//! [`decode()`] for the error each step raises.
//!
//! # Security Considerations
//!
//! - **Keys are opaque and never stored**: every call takes the key as an
//!   argument and forgets it on return. Key distribution and rotation live
//!   outside this crate.
//! - **Constant-time comparison**: the signature match does not leak where
//!   the first differing byte is.
//! - **No claim semantics**: expiry (`exp`), audience, and similar claims
//!   are returned to the caller uninterpreted. Enforcing them is the
//!   consumer's job.
//! - **Algorithm is attacker-controlled on decode**: the header's `alg`
//!   field comes from the token. Only identifiers in the fixed table are
//!   accepted, and the symmetric key is applied solely through that table;
//!   there is no `none` algorithm and no cross-family confusion surface.
//!
//! # Examples
//!
//! ```
//! use hmac_jwt::{decode, encode, Algorithm};
//! use serde_json::json;
//!
//! let payload = json!({"sub": "1234567890", "name": "John Doe"});
//! let token = encode(&payload, b"secret", Algorithm::Hs256).unwrap();
//!
//! let decoded = decode(&token, b"secret").unwrap();
//! assert_eq!(decoded, payload);
//! ```

pub mod algorithm;
mod base64url;
pub mod decode;
pub mod encode;
mod json;
pub mod sign;

pub use algorithm::Algorithm;
pub use decode::{decode, decode_header, decode_unverified};
pub use encode::encode;
pub use sign::sign;
