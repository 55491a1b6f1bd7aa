//! ウィジェットで扱う型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CandidateFile: ドロップ/ファイル選択で渡された未検証のファイル
//! - SelectedImage: 検証済みの選択画像（同時に1枚まで）
//! - ExtractedNotes / ExtractionResult: 抽出APIの結果

use serde::{Deserialize, Serialize};

/// テキストが返らなかった場合の表示
pub const NO_TEXT_PLACEHOLDER: &str = "No text extracted from the image";

/// 説明が返らなかった場合の表示
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available";

/// ドロップまたはファイル選択で渡されたファイル
///
/// `size` はホストが報告したサイズ。上限を超えるファイルはホストが
/// 読み込みを省略してよく、その場合 `bytes` は空になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFile {
    pub file_name: String,
    /// 申告されたMIMEタイプ（不明なら空文字）
    pub mime_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    /// 読み込み済みのバイト列から作成
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// 拡張子（小文字）
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.file_name)
    }
}

/// 検証済みの選択画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// 抽出APIの成功結果（プレースホルダ適用済み）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedNotes {
    pub text: String,
    pub description: String,
}

impl Default for ExtractedNotes {
    fn default() -> Self {
        Self {
            text: NO_TEXT_PLACEHOLDER.to_string(),
            description: NO_SUMMARY_PLACEHOLDER.to_string(),
        }
    }
}

/// 選択中の画像に対する抽出結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ExtractionResult {
    Extracted { text: String, description: String },
    Failed { message: String },
}

impl ExtractionResult {
    pub fn text(&self) -> Option<&str> {
        match self {
            ExtractionResult::Extracted { text, .. } => Some(text),
            ExtractionResult::Failed { .. } => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            ExtractionResult::Extracted { description, .. } => Some(description),
            ExtractionResult::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractionResult::Failed { .. })
    }
}

impl From<ExtractedNotes> for ExtractionResult {
    fn from(notes: ExtractedNotes) -> Self {
        ExtractionResult::Extracted {
            text: notes.text,
            description: notes.description,
        }
    }
}

/// ファイル名から拡張子を取り出す（小文字化）
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_size_from_bytes() {
        let file = CandidateFile::new("a.png", "image/png", vec![0u8; 42]);
        assert_eq!(file.size, 42);
        assert_eq!(file.extension().as_deref(), Some("png"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(file_extension("archive.tar.webp").as_deref(), Some("webp"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension(".png"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_extracted_notes_default_placeholders() {
        let notes = ExtractedNotes::default();
        assert_eq!(notes.text, NO_TEXT_PLACEHOLDER);
        assert_eq!(notes.description, NO_SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_extraction_result_accessors() {
        let ok: ExtractionResult = ExtractedNotes {
            text: "ABC".into(),
            description: "D".into(),
        }
        .into();
        assert_eq!(ok.text(), Some("ABC"));
        assert_eq!(ok.description(), Some("D"));
        assert!(!ok.is_failed());

        let failed = ExtractionResult::Failed { message: "boom".into() };
        assert_eq!(failed.text(), None);
        assert!(failed.is_failed());
    }

    #[test]
    fn test_extraction_result_serialize() {
        let failed = ExtractionResult::Failed { message: "boom".into() };
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(json, r#"{"status":"failed","message":"boom"}"#);
    }
}
