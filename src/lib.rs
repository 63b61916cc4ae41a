//! HMAC-JWT: Compact Signed Token Codec
//!
//! A Rust library for producing and consuming signed, self-contained tokens
//! in the three-segment compact format of [RFC 7519](https://www.rfc-editor.org/rfc/rfc7519.html)
//! (JSON Web Token), restricted to the symmetric HMAC signature family
//! (`HS256`, `HS384`, `HS512`).
//!
//! # What is hmac-jwt?
//!
//! This library solves one narrow problem well: attaching a cryptographic
//! authentication tag to a set of claims so a consumer can later verify,
//! with a shared secret, that the claims were not forged or altered.
//!
//! - **Stateless codec**: every operation is a pure function of its
//!   arguments; no instance state, no I/O, no shared mutable buffers
//! - **Strict validation sequence**: segment count, segment decoding,
//!   algorithm presence, and signature match are checked in a fixed order
//!   with a distinct error for each failure
//! - **Hardened comparison**: signature equality is checked in constant
//!   time
//! - **Opaque payloads**: claims go in as any `serde`-serializable value
//!   and come back verbatim as JSON; the codec never interprets them
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   encode    ┌─────────────────────────────────────┐
//! │   Producer   │────────────▶│ base64url(header) . base64url(pay-  │
//! │ (claims+key) │             │ load) . base64url(HMAC(input, key)) │
//! └──────────────┘             └───────────────────┬─────────────────┘
//!                                                  │ token string
//!                              ┌───────────────────▼─────────────────┐
//!                              │   decode: split, decode segments,   │
//!                              │   recompute HMAC, constant-time     │
//!                              │   compare, return payload           │
//!                              └───────────────────┬─────────────────┘
//!                                                  │ claims (verbatim)
//!                                         ┌────────▼───────┐
//!                                         │    Consumer    │
//!                                         └────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Encode and verify a token
//!
//! ```
//! use hmac_jwt::{decode, encode, Algorithm};
//! use serde_json::json;
//!
//! let payload = json!({"sub": "1234567890", "name": "John Doe"});
//!
//! // Producer side: sign the claims with a shared secret.
//! let token = encode(&payload, b"secret", Algorithm::Hs256).unwrap();
//!
//! // Consumer side: authenticate before trusting anything.
//! let claims = decode(&token, b"secret").unwrap();
//! assert_eq!(claims["name"], "John Doe");
//! ```
//!
//! ## Typed payloads
//!
//! Anything implementing [`serde::Serialize`] can be a payload:
//!
//! ```
//! use hmac_jwt::{decode, encode, Algorithm};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Claims {
//!     sub: String,
//!     admin: bool,
//! }
//!
//! let claims = Claims { sub: "user-1".to_owned(), admin: false };
//! let token = encode(&claims, b"secret", Algorithm::Hs512).unwrap();
//!
//! let decoded = decode(&token, b"secret").unwrap();
//! assert_eq!(decoded["sub"], "user-1");
//! assert_eq!(decoded["admin"], false);
//! ```
//!
//! ## Inspect a header before verifying
//!
//! ```
//! use hmac_jwt::{decode_header, encode, Algorithm};
//! use serde_json::json;
//!
//! let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs384).unwrap();
//!
//! let header = decode_header(&token).unwrap();
//! assert_eq!(header["alg"], "HS384");
//! ```
//!
//! # Module Organization
//!
//! - [`token`]: the codec itself (encode, decode, sign, algorithm table)
//! - [`error`]: error taxonomy with one kind per failure mode
//!
//! # Security Considerations
//!
//! ## Key Management
//!
//! - **Never hardcode keys**: load secrets from the environment or a key
//!   store; the `b"secret"` literals in these examples are examples
//! - **Keys are never stored**: the codec uses the key for one computation
//!   and forgets it; rotation and distribution are the caller's concern
//!
//! ## Verification
//!
//! - **Always verify before trusting**: [`decode`] authenticates;
//!   [`decode_unverified`] and [`decode_header`] do not, and say so
//! - **No claim semantics**: expiry, audience, and issuer claims come back
//!   uninterpreted; enforce them in the consumer
//! - **Fixed algorithm table**: only `HS256`/`HS384`/`HS512` exist here.
//!   There is no `none` algorithm and no asymmetric family to confuse a
//!   symmetric key with
//!
//! # Error Handling
//!
//! All operations return [`Result<T, TokenError>`](error::Result), with a
//! distinct kind per failure mode:
//!
//! ```
//! use hmac_jwt::{decode, TokenError};
//!
//! match decode("not-a-token", b"secret") {
//!     Ok(claims) => println!("claims: {claims}"),
//!     Err(TokenError::Malformed(reason)) => eprintln!("rejected: {reason}"),
//!     Err(TokenError::SignatureMismatch) => eprintln!("rejected: forged or altered"),
//!     Err(e) => eprintln!("rejected: {e}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod token;

pub use error::{JsonErrorKind, Result, TokenError};
pub use token::{decode, decode_header, decode_unverified, encode, sign, Algorithm};
