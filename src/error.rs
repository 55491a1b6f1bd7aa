use text_grabber_common::{ExtractError, RejectReason};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextGrabberError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ベースURLが設定されていません。`text-grabber config --set-base-url URL` または環境変数 TEXT_GRABBER_API_URL で設定してください")]
    MissingBaseUrl,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像を受け付けられません: {0}")]
    Rejected(#[from] RejectReason),

    #[error("抽出に失敗しました: {0}")]
    Extraction(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] text_grabber_common::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),
}

impl From<ExtractError> for TextGrabberError {
    fn from(err: ExtractError) -> Self {
        TextGrabberError::Extraction(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TextGrabberError>;
