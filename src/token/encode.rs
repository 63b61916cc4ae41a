//! Token assembly: serialize, encode, sign, join.

use serde::Serialize;
use tracing::instrument;

use crate::{
    error::{Result, TokenError},
    token::{
        algorithm::Algorithm,
        base64url::urlsafe_encode,
        json::json_encode,
        sign::sign,
    },
};

/// Encodes a payload into a signed three-segment token.
///
/// Builds the header `{"typ":"JWT","alg":<algorithm>}`, serializes header
/// and payload to JSON, base64url-encodes each without padding, signs the
/// joined header and payload segments, and returns
/// `header.payload.signature`.
///
/// The payload is opaque to the codec: it is serialized here and handed
/// back verbatim by [`decode`](crate::token::decode::decode), never
/// interpreted. Encoding is deterministic given identical payload, key,
/// and algorithm, and has no side effects.
///
/// # Errors
///
/// Returns [`TokenError::JsonEncode`] if the payload cannot be serialized
/// to JSON.
///
/// # Examples
///
/// ```
/// use hmac_jwt::{encode, Algorithm};
/// use serde_json::json;
///
/// let payload = json!({"sub": "1234567890", "name": "John Doe"});
/// let token = encode(&payload, b"secret", Algorithm::Hs256).unwrap();
///
/// let parts: Vec<&str> = token.split('.').collect();
/// assert_eq!(parts.len(), 3);
/// assert!(token.starts_with("eyJ")); // base64url of a JSON header
/// ```
#[instrument(skip(payload, key), fields(algorithm = %algorithm))]
pub fn encode<T: Serialize>(payload: &T, key: &[u8], algorithm: Algorithm) -> Result<String> {
    // 1. Header names the constant type and the signing algorithm.
    let header = serde_json::json!({ "typ": "JWT", "alg": algorithm.name() });
    let header_json = json_encode(&header)?;

    // 2. The payload serializes through a JSON value so the null guard in
    //    `json_encode` applies to it as well.
    let payload_value =
        serde_json::to_value(payload).map_err(|e| TokenError::JsonEncode(e.to_string()))?;
    let payload_json = json_encode(&payload_value)?;

    // 3. The signing input is the exact byte string that gets authenticated.
    let signing_input = format!(
        "{}.{}",
        urlsafe_encode(header_json.as_bytes()),
        urlsafe_encode(payload_json.as_bytes())
    );

    // 4. Sign and append the encoded tag.
    let signature = sign(signing_input.as_bytes(), key, algorithm);
    Ok(format!("{signing_input}.{}", urlsafe_encode(&signature)))
}
