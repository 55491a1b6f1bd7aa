//! ターミナル用プレビュー
//!
//! 選択画像を縮小したPNGを一時ディレクトリに書き出す。
//! 解放時にファイルを削除する。

use crate::error::Result;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use text_grabber_common::{PreviewStore, SelectedImage};

/// サムネイルの長辺（px）
pub const DEFAULT_MAX_EDGE: u32 = 256;

#[derive(Debug)]
pub struct ThumbnailPreviews {
    dir: PathBuf,
    max_edge: u32,
    next: u64,
}

impl ThumbnailPreviews {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            max_edge: DEFAULT_MAX_EDGE,
            next: 0,
        })
    }

    /// OSの一時ディレクトリ配下に作成
    pub fn in_temp_dir() -> Result<Self> {
        Self::new(std::env::temp_dir().join("text-grabber-previews"))
    }

    pub fn with_max_edge(mut self, max_edge: u32) -> Self {
        self.max_edge = max_edge.max(1);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PreviewStore for ThumbnailPreviews {
    type Handle = PathBuf;

    fn create(&mut self, image: &SelectedImage) -> std::result::Result<PathBuf, String> {
        let decoded = image::load_from_memory(&image.bytes).map_err(|e| e.to_string())?;
        let thumbnail = decoded.thumbnail(self.max_edge, self.max_edge);

        self.next += 1;
        let path = self
            .dir
            .join(format!("preview-{}-{}.png", std::process::id(), self.next));
        thumbnail
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| e.to_string())?;

        log::debug!(
            "preview {} ({}x{})",
            path.display(),
            thumbnail.width(),
            thumbnail.height()
        );
        Ok(path)
    }

    fn release(&mut self, handle: PathBuf) {
        if let Err(e) = std::fs::remove_file(&handle) {
            log::warn!("failed to remove preview {}: {}", handle.display(), e);
        }
    }
}
