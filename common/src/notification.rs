//! ユーザー向け通知（トースト）

use crate::parser::ExtractError;
use serde::Serialize;
use std::time::Duration;

/// トーストの表示時間
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// 一時的な通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
    #[serde(skip)]
    pub duration: Duration,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: description.into(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: description.into(),
            duration: DEFAULT_DURATION,
        }
    }

    /// ファイル受付拒否
    pub fn rejected() -> Self {
        Self::error(
            "File too large or invalid type. Max size: 5MB",
            "Please upload a valid image file (JPG, PNG, WEBP) under 5MB.",
        )
    }

    /// 選択ファイルの読み込み失敗
    pub fn read_failed() -> Self {
        Self::error(
            "Failed to read the selected file.",
            "Please try selecting the image again.",
        )
    }

    /// 抽出成功
    pub fn extracted() -> Self {
        Self::success(
            "Notes extracted successfully!",
            "The AI has summarized the image.",
        )
    }

    /// 抽出失敗（サーバのメッセージがあれば説明に使う）
    pub fn extraction_failed(err: &ExtractError) -> Self {
        let description = err
            .server_message()
            .unwrap_or("An error occurred during extraction.");
        Self::error("Failed to extract notes. Please try again.", description)
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_is_error() {
        let n = Notification::rejected();
        assert!(n.is_error());
        assert_eq!(n.duration, DEFAULT_DURATION);
        assert!(n.description.contains("JPG, PNG, WEBP"));
    }

    #[test]
    fn test_read_failed_is_error_toast() {
        let n = Notification::read_failed();
        assert!(n.is_error());
        assert_eq!(n.duration, DEFAULT_DURATION);
        assert_eq!(n.title, "Failed to read the selected file.");
        assert_ne!(n, Notification::rejected());
    }

    #[test]
    fn test_extraction_failed_uses_server_message() {
        let err = ExtractError::Server {
            status: 422,
            message: "image is blank".into(),
        };
        let n = Notification::extraction_failed(&err);
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.description, "image is blank");
    }

    #[test]
    fn test_extraction_failed_generic_for_transport() {
        let err = ExtractError::Transport("connection refused".into());
        let n = Notification::extraction_failed(&err);
        assert_eq!(n.description, "An error occurred during extraction.");
        assert!(!n.description.contains("refused"));
    }

    #[test]
    fn test_serialize_skips_duration() {
        let json = serde_json::to_string(&Notification::extracted()).unwrap();
        assert!(json.contains(r#""level":"success""#));
        assert!(!json.contains("duration"));
    }
}
