//! Signing algorithm identifiers and their hash-function mapping.

use std::{fmt, str::FromStr};

use crate::error::{Result, TokenError};

/// A supported signing algorithm.
///
/// Each variant is a keyed-hash (HMAC) construction over a fixed hash
/// function. The mapping from identifier to hash function is constant and
/// shared read-only by every call:
///
/// | Identifier | Hash function | Signature length |
/// |------------|---------------|------------------|
/// | `HS256`    | SHA-256       | 32 bytes         |
/// | `HS384`    | SHA-384       | 48 bytes         |
/// | `HS512`    | SHA-512       | 64 bytes         |
///
/// Identifier strings appear in the token header's `alg` field; the enum is
/// what the rest of the crate dispatches on. [`Algorithm::from_name`] is the
/// single point where untrusted identifier strings enter, and it rejects
/// anything outside the table.
///
/// # Examples
///
/// ```
/// use hmac_jwt::Algorithm;
///
/// let alg = Algorithm::from_name("HS384").unwrap();
/// assert_eq!(alg, Algorithm::Hs384);
/// assert_eq!(alg.name(), "HS384");
/// assert_eq!(alg.hash_name(), "SHA-384");
/// assert!(Algorithm::from_name("HS128").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC over SHA-256.
    Hs256,
    /// HMAC over SHA-384.
    Hs384,
    /// HMAC over SHA-512.
    Hs512,
}

impl Algorithm {
    /// All supported algorithms, in identifier order.
    pub const ALL: [Self; 3] = [Self::Hs256, Self::Hs384, Self::Hs512];

    /// Returns the identifier carried in the token header's `alg` field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }

    /// Returns the name of the hash function the identifier maps to.
    #[must_use]
    pub const fn hash_name(&self) -> &'static str {
        match self {
            Self::Hs256 => "SHA-256",
            Self::Hs384 => "SHA-384",
            Self::Hs512 => "SHA-512",
        }
    }

    /// Returns the length in bytes of signatures this algorithm produces.
    #[must_use]
    pub const fn signature_len(&self) -> usize {
        match self {
            Self::Hs256 => 32,
            Self::Hs384 => 48,
            Self::Hs512 => 64,
        }
    }

    /// Looks up an identifier in the algorithm table.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnsupportedAlgorithm`] carrying the offending
    /// identifier when it is not in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmac_jwt::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_name("HS256").unwrap(), Algorithm::Hs256);
    /// assert!(Algorithm::from_name("none").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "HS256" => Ok(Self::Hs256),
            "HS384" => Ok(Self::Hs384),
            "HS512" => Ok(Self::Hs512),
            other => Err(TokenError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}

impl Default for Algorithm {
    /// `HS256`, the conventional default for symmetric tokens.
    fn default() -> Self {
        Self::Hs256
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
