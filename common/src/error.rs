//! エラー型定義
//!
//! 共通ライブラリはI/Oを持たないため、設定値の検証エラーのみ。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Config error: base URL is empty")]
    EmptyBaseUrl,

    #[error("Config error: base URL must start with http:// or https://: {0:?}")]
    InvalidBaseUrl(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
