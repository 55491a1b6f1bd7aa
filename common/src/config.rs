//! 抽出エンドポイント設定
//!
//! 起動時に一度だけ組み立て、ウィジェットのホストへ渡す。

use crate::error::{Error, Result};
use std::time::Duration;

/// ベースURLを渡す環境変数名（CLIは実行時、WASMはビルド時に参照）
pub const BASE_URL_ENV: &str = "TEXT_GRABBER_API_URL";

pub const DEFAULT_EXTRACT_PATH: &str = "extract-notes";
pub const DEFAULT_FIELD_NAME: &str = "file";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub extract_path: String,
    /// multipartで画像を載せるフィールド名
    pub field_name: String,
    pub timeout: Duration,
}

impl EndpointConfig {
    /// ベースURLから作成（http/httpsのみ）
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().to_string();
        if base_url.is_empty() {
            return Err(Error::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url,
            extract_path: DEFAULT_EXTRACT_PATH.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_extract_path(mut self, path: impl Into<String>) -> Self {
        self.extract_path = path.into();
        self
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// POST先URL（ベースとパスを `/` 1つで連結）
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.extract_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EndpointConfig::new("https://ocr.example.com/").unwrap();
        assert_eq!(config.extract_path, "extract-notes");
        assert_eq!(config.field_name, "file");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_endpoint_url_joins_single_slash() {
        let with_slash = EndpointConfig::new("https://ocr.example.com/api/").unwrap();
        let without_slash = EndpointConfig::new("https://ocr.example.com/api").unwrap();
        assert_eq!(with_slash.endpoint_url(), "https://ocr.example.com/api/extract-notes");
        assert_eq!(without_slash.endpoint_url(), with_slash.endpoint_url());
    }

    #[test]
    fn test_custom_path() {
        let config = EndpointConfig::new("http://localhost:8000")
            .unwrap()
            .with_extract_path("/ocr/extract")
            .with_field_name("image");
        assert_eq!(config.endpoint_url(), "http://localhost:8000/ocr/extract");
        assert_eq!(config.field_name, "image");
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(matches!(EndpointConfig::new("ftp://x"), Err(Error::InvalidBaseUrl(_))));
        assert!(EndpointConfig::new("").is_err());
    }

    #[test]
    fn test_trims_whitespace() {
        let config = EndpointConfig::new("  http://a.test/ \n").unwrap();
        assert_eq!(config.base_url, "http://a.test/");
    }
}
