//! Base64url segment transforms per RFC 4648 Section 5.

use base64::{alphabet, engine};

use crate::error::{Result, TokenError};

/// Decoding engine tolerant of padded input. Encoded segments carry no
/// padding, but a decoder must accept either form: restoring padding to a
/// multiple of four is a no-op when padding is already present.
const URL_SAFE_LENIENT: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::URL_SAFE,
    engine::GeneralPurposeConfig::new()
        .with_decode_padding_mode(engine::DecodePaddingMode::Indifferent),
);

/// Encodes bytes as base64url without padding.
pub(crate) fn urlsafe_encode(data: &[u8]) -> String {
    base64::Engine::encode(&engine::general_purpose::URL_SAFE_NO_PAD, data)
}

/// Decodes a base64url segment back into bytes.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] if the segment is not valid base64url.
pub(crate) fn urlsafe_decode(text: &str) -> Result<Vec<u8>> {
    base64::Engine::decode(&URL_SAFE_LENIENT, text)
        .map_err(|e| TokenError::Malformed(format!("invalid segment encoding: {e}")))
}
