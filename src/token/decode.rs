//! Token parsing and the verification sequence.

use serde_json::Value;
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, warn};

use crate::{
    error::{Result, TokenError},
    token::{algorithm::Algorithm, base64url::urlsafe_decode, json::json_decode, sign::sign},
};

/// Decodes a token and authenticates its signature.
///
/// The validation sequence runs in order, each failure short-circuiting
/// the rest:
///
/// 1. Split on `.`; exactly three segments, or [`TokenError::Malformed`].
/// 2. Base64url-decode and JSON-decode the header segment.
/// 3. Base64url-decode and JSON-decode the payload segment.
/// 4. Base64url-decode the signature segment (opaque binary, no JSON step).
/// 5. Check the header's `alg` field ([`TokenError::InvalidAlgorithm`] when
///    missing or empty, [`TokenError::UnsupportedAlgorithm`] when outside
///    the table), recompute the signature over `header.payload` with `key`,
///    and compare in constant time ([`TokenError::SignatureMismatch`] on
///    any difference).
///
/// On success the decoded payload value is returned verbatim. The call
/// never mutates external state and is safe to invoke concurrently with
/// the same or different tokens.
///
/// # Errors
///
/// Any step of the sequence above failing aborts the call with the named
/// error. Every error means the token must be rejected.
///
/// # Examples
///
/// ```
/// use hmac_jwt::{decode, encode, Algorithm};
/// use serde_json::json;
///
/// let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs256).unwrap();
///
/// let payload = decode(&token, b"secret").unwrap();
/// assert_eq!(payload["sub"], "user-1");
///
/// assert!(decode(&token, b"wrong-key").is_err());
/// ```
#[instrument(skip(token, key), fields(token_len = token.len()))]
pub fn decode(token: &str, key: &[u8]) -> Result<Value> {
    decode_inner(token, Some(key))
}

/// Decodes a token without authenticating its signature.
///
/// Runs the structural half of the validation sequence (segment count,
/// segment decoding) and returns the payload even when the signature is
/// wrong for the contents. The signature segment must still be valid
/// base64url. Use only when the token's authenticity is established by
/// other means, or to inspect untrusted claims explicitly.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] for structural faults; never
/// [`TokenError::SignatureMismatch`].
///
/// # Examples
///
/// ```
/// use hmac_jwt::{decode_unverified, encode, Algorithm};
/// use serde_json::json;
///
/// let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs256).unwrap();
/// let payload = decode_unverified(&token).unwrap();
/// assert_eq!(payload["sub"], "user-1");
/// ```
#[instrument(skip(token), fields(token_len = token.len()))]
pub fn decode_unverified(token: &str) -> Result<Value> {
    decode_inner(token, None)
}

/// Decodes only the header segment of a token.
///
/// Useful for inspecting `alg` and `typ` before choosing a verification
/// key. Performs no authentication; trust nothing in the result until the
/// token is verified.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] when the token does not have three
/// segments or the header segment cannot be decoded.
///
/// # Examples
///
/// ```
/// use hmac_jwt::{decode_header, encode, Algorithm};
/// use serde_json::json;
///
/// let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs384).unwrap();
/// let header = decode_header(&token).unwrap();
/// assert_eq!(header["alg"], "HS384");
/// assert_eq!(header["typ"], "JWT");
/// ```
pub fn decode_header(token: &str) -> Result<Value> {
    let segments = split_segments(token)?;
    decode_json_segment(segments[0])
}

fn decode_inner(token: &str, verify_key: Option<&[u8]>) -> Result<Value> {
    // 1. Exactly three segments.
    let segments = split_segments(token)?;
    let (header_segment, payload_segment, signature_segment) =
        (segments[0], segments[1], segments[2]);

    // 2.-3. Header and payload are JSON; 4. the signature is opaque binary.
    let header = decode_json_segment(header_segment)?;
    let payload = decode_json_segment(payload_segment)?;
    let signature = urlsafe_decode(signature_segment)?;

    // 5. Authenticate, unless the caller opted out.
    if let Some(key) = verify_key {
        // A non-string `alg` reads the same as an absent one.
        let alg_name = header.get("alg").and_then(Value::as_str).unwrap_or_default();
        if alg_name.is_empty() {
            return Err(TokenError::InvalidAlgorithm);
        }
        let algorithm = Algorithm::from_name(alg_name)?;

        let signing_input = format!("{header_segment}.{payload_segment}");
        let expected = sign(signing_input.as_bytes(), key, algorithm);

        if !bool::from(expected.as_slice().ct_eq(&signature)) {
            warn!(algorithm = %algorithm, "token signature mismatch");
            return Err(TokenError::SignatureMismatch);
        }
        debug!(algorithm = %algorithm, "token signature verified");
    }

    // 6. The payload goes back verbatim.
    Ok(payload)
}

fn split_segments(token: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed(format!(
            "wrong number of segments: expected 3, found {}",
            segments.len()
        )));
    }
    Ok(segments)
}

/// Decodes one base64url segment and parses it as JSON.
///
/// A segment either yields a usable value or the token is malformed; the
/// parser's own fault description is preserved in the message.
fn decode_json_segment(segment: &str) -> Result<Value> {
    let bytes = urlsafe_decode(segment)?;
    let text = std::str::from_utf8(&bytes).map_err(|_| {
        TokenError::Malformed("invalid segment encoding: segment is not UTF-8".to_owned())
    })?;
    json_decode(text)
        .map_err(|e| TokenError::Malformed(format!("invalid segment encoding: {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::token::{base64url::urlsafe_encode, encode::encode};

    /// Builds a token from raw header/payload JSON text, signing with `key`.
    fn forge_token(header_json: &str, payload_json: &str, key: &[u8], alg: Algorithm) -> String {
        let signing_input = format!(
            "{}.{}",
            urlsafe_encode(header_json.as_bytes()),
            urlsafe_encode(payload_json.as_bytes())
        );
        let signature = sign(signing_input.as_bytes(), key, alg);
        format!("{signing_input}.{}", urlsafe_encode(&signature))
    }

    #[test]
    fn test_decode_round_trip_all_algorithms() {
        let payload = json!({"sub": "1234567890", "name": "John Doe"});
        for alg in Algorithm::ALL {
            let token = encode(&payload, b"secret", alg).unwrap();
            assert_eq!(decode(&token, b"secret").unwrap(), payload, "round trip failed for {alg}");
        }
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        for token in ["a.b", "a.b.c.d", "", "a"] {
            let result = decode(token, b"secret");
            assert!(
                matches!(result, Err(TokenError::Malformed(ref m)) if m.contains("segments")),
                "{token:?} must be rejected for segment count"
            );
        }
    }

    #[test]
    fn test_decode_rejects_undecodable_header() {
        // Signature over garbage segments still gets past the length check;
        // the header decode must fail first.
        let token = "!!!.e30.c2ln";
        let result = decode(token, b"secret");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let header = r#"{"typ":"JWT","alg":"HS256"}"#;
        let token = format!(
            "{}.{}.{}",
            urlsafe_encode(header.as_bytes()),
            urlsafe_encode(b"not json"),
            urlsafe_encode(b"sig")
        );
        let result = decode(&token, b"secret");
        assert!(
            matches!(result, Err(TokenError::Malformed(ref m)) if m.contains("invalid segment encoding"))
        );
    }

    #[test]
    fn test_decode_rejects_invalid_signature_encoding_even_unverified() {
        let token = encode(&json!({"k": "v"}), b"secret", Algorithm::Hs256).unwrap();
        let (signing_input, _) = token.rsplit_once('.').unwrap();
        let broken = format!("{signing_input}.@@@");
        assert!(matches!(decode_unverified(&broken), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_key() {
        let token = encode(&json!({"sub": "user-1"}), b"key-one", Algorithm::Hs256).unwrap();
        let result = decode(&token, b"key-two");
        assert!(matches!(result, Err(TokenError::SignatureMismatch)));
    }

    #[test]
    fn test_decode_rejects_tampered_payload() {
        let token = encode(&json!({"role": "user"}), b"secret", Algorithm::Hs256).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = urlsafe_encode(br#"{"role":"admin"}"#);
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
        assert!(matches!(decode(&tampered, b"secret"), Err(TokenError::SignatureMismatch)));
    }

    #[test]
    fn test_decode_rejects_flipped_signature_byte() {
        let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs256).unwrap();
        let (signing_input, signature_segment) = token.rsplit_once('.').unwrap();
        let mut signature = urlsafe_decode(signature_segment).unwrap();
        for i in 0..signature.len() {
            signature[i] ^= 0x01;
            let tampered = format!("{signing_input}.{}", urlsafe_encode(&signature));
            assert!(
                matches!(decode(&tampered, b"secret"), Err(TokenError::SignatureMismatch)),
                "flip at byte {i} must be detected"
            );
            signature[i] ^= 0x01;
        }
    }

    #[test]
    fn test_decode_rejects_missing_algorithm() {
        let token = forge_token(r#"{"typ":"JWT"}"#, r#"{"k":"v"}"#, b"secret", Algorithm::Hs256);
        assert!(matches!(decode(&token, b"secret"), Err(TokenError::InvalidAlgorithm)));
    }

    #[test]
    fn test_decode_rejects_empty_algorithm() {
        let token =
            forge_token(r#"{"typ":"JWT","alg":""}"#, r#"{"k":"v"}"#, b"secret", Algorithm::Hs256);
        assert!(matches!(decode(&token, b"secret"), Err(TokenError::InvalidAlgorithm)));
    }

    #[test]
    fn test_decode_rejects_non_string_algorithm() {
        let token =
            forge_token(r#"{"typ":"JWT","alg":42}"#, r#"{"k":"v"}"#, b"secret", Algorithm::Hs256);
        assert!(matches!(decode(&token, b"secret"), Err(TokenError::InvalidAlgorithm)));
    }

    #[test]
    fn test_decode_rejects_unsupported_algorithm() {
        let token = forge_token(
            r#"{"typ":"JWT","alg":"HS128"}"#,
            r#"{"k":"v"}"#,
            b"secret",
            Algorithm::Hs256,
        );
        let result = decode(&token, b"secret");
        assert!(
            matches!(result, Err(TokenError::UnsupportedAlgorithm(ref name)) if name == "HS128")
        );
    }

    #[test]
    fn test_decode_unverified_skips_algorithm_checks() {
        // Unverified decoding never looks at the header's `alg`.
        let token = forge_token(r#"{"typ":"JWT"}"#, r#"{"k":"v"}"#, b"secret", Algorithm::Hs256);
        assert_eq!(decode_unverified(&token).unwrap(), json!({"k": "v"}));
    }

    #[test]
    fn test_decode_unverified_returns_payload_despite_bad_signature() {
        let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs256).unwrap();
        let (signing_input, signature_segment) = token.rsplit_once('.').unwrap();
        let mut signature = urlsafe_decode(signature_segment).unwrap();
        signature[0] ^= 0xff;
        let corrupted = format!("{signing_input}.{}", urlsafe_encode(&signature));

        assert!(decode(&corrupted, b"secret").is_err());
        assert_eq!(decode_unverified(&corrupted).unwrap(), json!({"sub": "user-1"}));
    }

    #[test]
    fn test_decode_header_returns_header_without_verification() {
        let token = encode(&json!({"sub": "user-1"}), b"secret", Algorithm::Hs512).unwrap();
        let header = decode_header(&token).unwrap();
        assert_eq!(header["alg"], "HS512");
        assert_eq!(header["typ"], "JWT");
    }

    #[test]
    fn test_decode_header_requires_three_segments() {
        assert!(matches!(decode_header("a.b"), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_accepts_array_payload() {
        let payload = json!([1, "two", {"three": 3}]);
        let token = encode(&payload, b"secret", Algorithm::Hs256).unwrap();
        assert_eq!(decode(&token, b"secret").unwrap(), payload);
    }

    #[test]
    fn test_decode_accepts_null_payload() {
        // `null` is a legitimate payload; the guard only rejects parses
        // that claim null for other input.
        let token = encode(&serde_json::Value::Null, b"secret", Algorithm::Hs256).unwrap();
        assert_eq!(decode(&token, b"secret").unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_decode_empty_signature_segment_is_mismatch() {
        let token = encode(&json!({"k": "v"}), b"secret", Algorithm::Hs256).unwrap();
        let (signing_input, _) = token.rsplit_once('.').unwrap();
        let truncated = format!("{signing_input}.");
        assert!(matches!(decode(&truncated, b"secret"), Err(TokenError::SignatureMismatch)));
    }
}
