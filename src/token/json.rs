//! JSON segment serialization with explicit fault classification.

use serde_json::Value;

use crate::error::{JsonErrorKind, Result, TokenError};

/// Parses JSON text into a structured value.
///
/// A parse that reports success with a `null` value is only legitimate when
/// the input is the literal `null`; anything else is treated as a parser
/// fault. This guards against parsers that hand back a null-like default on
/// an unrecoverable error instead of reporting one.
///
/// # Errors
///
/// Returns [`TokenError::JsonDecode`] with the parser's own fault
/// classification.
pub(crate) fn json_decode(text: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            if value.is_null() && text.trim() != "null" {
                return Err(TokenError::JsonDecode(JsonErrorKind::Unknown(
                    "parser produced null for non-null input".to_owned(),
                )));
            }
            Ok(value)
        }
        Err(e) => Err(TokenError::JsonDecode(classify(&e))),
    }
}

/// Serializes a value to JSON text.
///
/// Mirrors the decode-side guard: a serializer yielding `"null"` for a
/// non-null input is treated as a fault.
///
/// # Errors
///
/// Returns [`TokenError::JsonEncode`] if serialization reports an error.
pub(crate) fn json_encode(value: &Value) -> Result<String> {
    let text = serde_json::to_string(value).map_err(|e| TokenError::JsonEncode(e.to_string()))?;
    if text == "null" && !value.is_null() {
        return Err(TokenError::JsonEncode(
            "serializer produced null for non-null input".to_owned(),
        ));
    }
    Ok(text)
}

/// Translates a `serde_json` error into a [`JsonErrorKind`].
///
/// The depth and control-character cases are only distinguishable by
/// message; `serde_json` files both under its syntax category.
fn classify(err: &serde_json::Error) -> JsonErrorKind {
    use serde_json::error::Category;

    match err.classify() {
        Category::Eof => JsonErrorKind::Eof,
        Category::Syntax => {
            let message = err.to_string();
            if message.contains("recursion limit") {
                JsonErrorKind::MaxDepthExceeded
            } else if message.contains("control character") {
                JsonErrorKind::ControlCharacter
            } else {
                JsonErrorKind::Syntax { line: err.line(), column: err.column() }
            }
        }
        Category::Data | Category::Io => JsonErrorKind::Unknown(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_object() {
        let value = json_decode(r#"{"sub":"1234567890","name":"John Doe"}"#).unwrap();
        assert_eq!(value, json!({"sub": "1234567890", "name": "John Doe"}));
    }

    #[test]
    fn test_decode_literal_null_is_accepted() {
        assert_eq!(json_decode("null").unwrap(), Value::Null);
        assert_eq!(json_decode("  null  ").unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_syntax_error_kind() {
        let result = json_decode(r#"{"sub": }"#);
        assert!(matches!(
            result,
            Err(TokenError::JsonDecode(JsonErrorKind::Syntax { .. }))
        ));
    }

    #[test]
    fn test_decode_eof_kind() {
        let result = json_decode(r#"{"sub""#);
        assert!(matches!(result, Err(TokenError::JsonDecode(JsonErrorKind::Eof))));
    }

    #[test]
    fn test_decode_control_character_kind() {
        // A raw NUL inside a string literal must be escaped to be valid JSON.
        let result = json_decode("\"a\u{0}b\"");
        assert!(matches!(
            result,
            Err(TokenError::JsonDecode(JsonErrorKind::ControlCharacter))
        ));
    }

    #[test]
    fn test_decode_depth_limit_kind() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let result = json_decode(&deep);
        assert!(matches!(
            result,
            Err(TokenError::JsonDecode(JsonErrorKind::MaxDepthExceeded))
        ));
    }

    #[test]
    fn test_encode_object() {
        let text = json_encode(&json!({"alg": "HS256", "typ": "JWT"})).unwrap();
        assert_eq!(text, r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_encode_null_for_null_input_is_accepted() {
        assert_eq!(json_encode(&Value::Null).unwrap(), "null");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let value = json!({"b": 1, "a": 2, "c": [1, 2, 3]});
        assert_eq!(json_encode(&value).unwrap(), json_encode(&value).unwrap());
    }
}
