//! プレビュー参照の生成/解放
//!
//! ブラウザのオブジェクトURLや一時ファイルなど、明示的な解放が必要な
//! プレビューをホストごとに実装する。ウィジェットは画像の差し替え・
//! クリア・破棄のたびに `release` を呼ぶ。

use crate::types::SelectedImage;

pub trait PreviewStore {
    type Handle;

    /// プレビューを作成（失敗はホスト側の説明文）
    fn create(&mut self, image: &SelectedImage) -> Result<Self::Handle, String>;

    /// プレビューを解放
    fn release(&mut self, handle: Self::Handle);
}

/// プレビューを持たないホスト用
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreview;

impl PreviewStore for NoPreview {
    type Handle = ();

    fn create(&mut self, _image: &SelectedImage) -> Result<(), String> {
        Ok(())
    }

    fn release(&mut self, _handle: ()) {}
}
