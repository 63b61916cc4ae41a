//! Error types for token encoding, decoding, and verification.
//!
//! This module defines all error types that can occur while producing or
//! consuming signed tokens. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Token structure** ([`TokenError::Malformed`]): the token string does
//!   not have the expected three-segment shape, or a segment cannot be
//!   decoded into a usable value
//! - **JSON faults** ([`TokenError::JsonDecode`], [`TokenError::JsonEncode`]):
//!   the underlying JSON parser or serializer reported a fault
//! - **Algorithm selection** ([`TokenError::InvalidAlgorithm`],
//!   [`TokenError::UnsupportedAlgorithm`]): the token header declares no
//!   algorithm, or declares one outside the supported set
//! - **Authentication** ([`TokenError::SignatureMismatch`]): the recomputed
//!   signature does not match the one carried by the token
//!
//! # Examples
//!
//! ```
//! use hmac_jwt::{Result, TokenError};
//!
//! fn check_segments(token: &str) -> Result<()> {
//!     if token.split('.').count() != 3 {
//!         return Err(TokenError::Malformed("wrong number of segments".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias for token operations.
///
/// This is a convenience type that uses [`TokenError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors that can occur while encoding, decoding, or verifying tokens.
///
/// Every failure aborts the operation with no side effect and no partially
/// constructed output; there is no retry or recovery inside the codec.
///
/// # Error Handling
///
/// On the decode side every variant means the same thing to a consumer:
/// reject the token. On the encode side,
/// [`UnsupportedAlgorithm`](Self::UnsupportedAlgorithm) and
/// [`JsonEncode`](Self::JsonEncode) indicate a programming or configuration
/// error rather than attacker-controlled input.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token string is structurally invalid.
    ///
    /// Raised when splitting on `.` does not yield exactly three segments,
    /// when a segment is not valid base64url, or when a JSON segment decodes
    /// to no usable value. The message names which check failed.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The JSON parser reported a fault.
    ///
    /// Carries a [`JsonErrorKind`] describing the parser's own
    /// classification of the fault.
    #[error("JSON decoding failed: {0}")]
    JsonDecode(JsonErrorKind),

    /// The JSON serializer reported a fault.
    ///
    /// This indicates a payload that cannot be represented as JSON (for
    /// example, a map with non-string keys). Fix the payload type; the
    /// error is not input-dependent.
    #[error("JSON encoding failed: {0}")]
    JsonEncode(String),

    /// The token header declares no signing algorithm.
    ///
    /// Raised during verification when the header's `alg` field is missing,
    /// empty, or not a string. A token without an algorithm cannot be
    /// authenticated.
    #[error("token header declares no algorithm")]
    InvalidAlgorithm,

    /// The requested or declared algorithm is not in the supported set.
    ///
    /// Carries the offending identifier. Supported identifiers are `HS256`,
    /// `HS384`, and `HS512`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmac_jwt::{Algorithm, TokenError};
    ///
    /// let err = Algorithm::from_name("HS128").unwrap_err();
    /// assert!(matches!(err, TokenError::UnsupportedAlgorithm(name) if name == "HS128"));
    /// ```
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The recomputed signature differs from the token's signature.
    ///
    /// The token was signed with a different key, a different algorithm, or
    /// its contents were altered after signing. The comparison is
    /// byte-for-byte over the raw signature bytes.
    #[error("token signature does not match its contents")]
    SignatureMismatch,
}

/// Classification of a JSON parse fault, derived from the parser's own
/// error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonErrorKind {
    /// The input nests deeper than the parser's recursion limit.
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,

    /// A raw control character appeared inside a string literal.
    #[error("raw control character in string")]
    ControlCharacter,

    /// The input is not syntactically valid JSON.
    #[error("syntax error at line {line}, column {column}")]
    Syntax {
        /// One-based line of the fault.
        line: usize,
        /// One-based column of the fault.
        column: usize,
    },

    /// The input ended before a complete JSON value was read.
    #[error("unexpected end of input")]
    Eof,

    /// Any other fault, carrying the parser's description.
    #[error("{0}")]
    Unknown(String),
}
