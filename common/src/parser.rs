//! 抽出APIレスポンスパーサー
//!
//! `{extracted_text?, description?, error?}` 形式のJSONを解釈し、
//! 欠けた項目はプレースホルダで補う。

use crate::types::{ExtractedNotes, NO_SUMMARY_PLACEHOLDER, NO_TEXT_PLACEHOLDER};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// サーバがエラーメッセージを返さなかった場合のメッセージ
pub const DEFAULT_SERVER_ERROR: &str = "Failed to extract notes";

/// 抽出リクエストの失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// 接続不可などの通信エラー
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// 非2xx、またはボディに error フィールドあり
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ExtractError {
    /// サーバ提供のメッセージ（あれば）
    ///
    /// ボディにメッセージがなく既定文言で埋めた場合は `None`。
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ExtractError::Server { message, .. } if message != DEFAULT_SERVER_ERROR => Some(message),
            _ => None,
        }
    }
}

/// HTTPステータスとボディから抽出結果を得る
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンスボディ
///
/// # Returns
/// * `Ok(ExtractedNotes)` - 2xxかつJSONオブジェクト（欠損項目はプレースホルダ）
/// * `Err(ExtractError::Server)` - 非2xx、または error フィールドあり
/// * `Err(ExtractError::Malformed)` - 2xxだがJSONオブジェクトでない
///
/// # Examples
/// ```
/// use text_grabber_common::parse_extract_response;
///
/// let notes = parse_extract_response(200, r#"{"extracted_text": "ABC", "description": "D"}"#).unwrap();
/// assert_eq!(notes.text, "ABC");
/// assert_eq!(notes.description, "D");
/// ```
pub fn parse_extract_response(status: u16, body: &str) -> Result<ExtractedNotes, ExtractError> {
    let value: Option<Value> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        let message = value
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|obj| non_empty_str(obj, "error"))
            .unwrap_or(DEFAULT_SERVER_ERROR)
            .to_string();
        return Err(ExtractError::Server { status, message });
    }

    let value = value.ok_or_else(|| ExtractError::Malformed("body is not valid JSON".into()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| ExtractError::Malformed(format!("expected a JSON object, got {}", kind(&value))))?;

    if let Some(message) = non_empty_str(obj, "error") {
        return Err(ExtractError::Server {
            status,
            message: message.to_string(),
        });
    }

    Ok(ExtractedNotes {
        text: non_empty_str(obj, "extracted_text")
            .unwrap_or(NO_TEXT_PLACEHOLDER)
            .to_string(),
        description: non_empty_str(obj, "description")
            .unwrap_or(NO_SUMMARY_PLACEHOLDER)
            .to_string(),
    })
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let notes = parse_extract_response(
            200,
            r#"{"extracted_text": "ABC", "description": "D"}"#,
        )
        .unwrap();
        assert_eq!(notes.text, "ABC");
        assert_eq!(notes.description, "D");
    }

    #[test]
    fn test_parse_empty_object_uses_placeholders() {
        let notes = parse_extract_response(200, "{}").unwrap();
        assert_eq!(notes.text, "No text extracted from the image");
        assert_eq!(notes.description, "No summary available");
    }

    #[test]
    fn test_parse_empty_strings_use_placeholders() {
        let notes = parse_extract_response(
            201,
            r#"{"extracted_text": "", "description": ""}"#,
        )
        .unwrap();
        assert_eq!(notes, ExtractedNotes::default());
    }

    #[test]
    fn test_parse_non_string_fields_use_placeholders() {
        let notes = parse_extract_response(
            200,
            r#"{"extracted_text": 42, "description": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(notes, ExtractedNotes::default());
    }

    #[test]
    fn test_parse_server_error_with_message() {
        let err = parse_extract_response(500, r#"{"error": "model overloaded"}"#).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Server {
                status: 500,
                message: "model overloaded".into()
            }
        );
        assert_eq!(err.server_message(), Some("model overloaded"));
    }

    #[test]
    fn test_parse_server_error_without_body() {
        let err = parse_extract_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ExtractError::Server {
                status: 502,
                message: DEFAULT_SERVER_ERROR.into()
            }
        );
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_parse_error_field_on_success_status() {
        let err = parse_extract_response(
            200,
            r#"{"extracted_text": "ignored", "error": "unreadable image"}"#,
        )
        .unwrap_err();
        assert_eq!(err.server_message(), Some("unreadable image"));
    }

    #[test]
    fn test_parse_empty_error_field_is_ignored() {
        let notes = parse_extract_response(200, r#"{"extracted_text": "ok", "error": ""}"#).unwrap();
        assert_eq!(notes.text, "ok");
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_extract_response(200, "not json").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_parse_unexpected_shape() {
        let err = parse_extract_response(200, r#"["ABC"]"#).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Malformed("expected a JSON object, got an array".into())
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = ExtractError::Timeout(Duration::from_secs(60));
        assert_eq!(err.to_string(), "request timed out after 60s");
        assert_eq!(err.server_message(), None);
    }
}
