//! 画像ファイルの読み込み
//!
//! ディスク上のファイルを `CandidateFile` に変換する。MIMEタイプは
//! 先頭バイトから判定し、判定できなければ拡張子から推定する。

use crate::error::{Result, TextGrabberError};
use std::path::Path;
use text_grabber_common::types::file_extension;
use text_grabber_common::validation::mime_from_extension;
use text_grabber_common::CandidateFile;

/// ファイルを読み込む
///
/// `max_size` を超えるファイルは中身を読まず、サイズだけを報告する。
pub fn load_candidate(path: &Path, max_size: u64) -> Result<CandidateFile> {
    if !path.is_file() {
        return Err(TextGrabberError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();

    if size > max_size {
        let mime_type = extension_mime(&file_name).unwrap_or_default();
        return Ok(CandidateFile {
            file_name,
            mime_type,
            size,
            bytes: Vec::new(),
        });
    }

    let bytes = std::fs::read(path)?;
    let mime_type = sniff_mime(&bytes)
        .or_else(|| extension_mime(&file_name))
        .unwrap_or_default();

    Ok(CandidateFile::new(file_name, mime_type, bytes))
}

/// 先頭バイトから画像形式を判定
pub fn sniff_mime(bytes: &[u8]) -> Option<String> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

fn extension_mime(file_name: &str) -> Option<String> {
    file_extension(file_name)
        .and_then(|ext| mime_from_extension(&ext))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_sniff_png() {
        assert_eq!(sniff_mime(PNG_MAGIC).as_deref(), Some("image/png"));
    }

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]).as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_text() {
        assert_eq!(sniff_mime(b"hello world"), None);
    }

    #[test]
    fn test_extension_mime() {
        assert_eq!(extension_mime("a.JPEG").as_deref(), Some("image/jpeg"));
        assert_eq!(extension_mime("a.txt"), None);
    }
}
