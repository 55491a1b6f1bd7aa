//! 画像ファイルの受付判定
//!
//! ドロップ/選択されたファイルを検査し、1枚の `SelectedImage` に変換する。
//! - 枚数: 1枚のみ
//! - 形式: image/* （MIMEが不明な場合は拡張子で判定）
//! - サイズ: 5MB以下

use crate::types::{CandidateFile, SelectedImage};
use thiserror::Error;

/// 画像サイズ上限（5MB）
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// 受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "webp"];

/// 受付拒否の理由
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("no file was provided")]
    NoFiles,

    #[error("only one file can be uploaded at a time (got {0})")]
    TooManyFiles(usize),

    #[error("{file_name} is {size} bytes (max {max})")]
    TooLarge { file_name: String, size: u64, max: u64 },

    #[error("{file_name} is not a supported image ({mime_type})")]
    InvalidType { file_name: String, mime_type: String },
}

/// 受付ルール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRules {
    pub max_size: u64,
    pub max_files: usize,
    pub accepted_extensions: Vec<String>,
}

impl Default for ImageRules {
    fn default() -> Self {
        Self {
            max_size: MAX_IMAGE_SIZE,
            max_files: 1,
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ImageRules {
    /// ファイル群を検査して選択画像に変換
    pub fn validate(&self, mut files: Vec<CandidateFile>) -> Result<SelectedImage, RejectReason> {
        if files.is_empty() {
            return Err(RejectReason::NoFiles);
        }
        if files.len() > self.max_files {
            return Err(RejectReason::TooManyFiles(files.len()));
        }

        let file = files.remove(0);
        let mime_type = self.resolve_mime(&file).ok_or_else(|| RejectReason::InvalidType {
            file_name: file.file_name.clone(),
            mime_type: if file.mime_type.is_empty() {
                "unknown".to_string()
            } else {
                file.mime_type.clone()
            },
        })?;

        if file.size > self.max_size {
            return Err(RejectReason::TooLarge {
                file_name: file.file_name,
                size: file.size,
                max: self.max_size,
            });
        }

        Ok(SelectedImage {
            file_name: file.file_name,
            mime_type,
            bytes: file.bytes,
        })
    }

    /// 受付可能ならMIMEタイプを返す
    ///
    /// 申告MIMEが image/* ならそのまま採用し、そうでなければ拡張子から推定する。
    pub fn resolve_mime(&self, file: &CandidateFile) -> Option<String> {
        let declared = file.mime_type.trim().to_ascii_lowercase();
        if declared.starts_with("image/") && declared.len() > "image/".len() {
            return Some(declared);
        }

        let ext = file.extension()?;
        if !self.accepted_extensions.iter().any(|e| *e == ext) {
            return None;
        }
        mime_from_extension(&ext).map(str::to_string)
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
