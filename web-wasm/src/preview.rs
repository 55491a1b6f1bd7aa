//! オブジェクトURLによるプレビュー
//!
//! `URL.createObjectURL` で作ったURLは明示的に revoke するまで
//! Blobを保持し続けるため、ウィジェットの解放タイミングで必ず破棄する。

use js_sys::{Array, Uint8Array};
use text_grabber_common::{PreviewStore, SelectedImage};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlPreviews;

impl PreviewStore for ObjectUrlPreviews {
    type Handle = String;

    fn create(&mut self, image: &SelectedImage) -> Result<String, String> {
        let blob = image_blob(image).map_err(|e| format!("{:?}", e))?;
        Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))
    }

    fn release(&mut self, handle: String) {
        if let Err(e) = Url::revoke_object_url(&handle) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("revokeObjectURL failed: {:?}", e)));
        }
    }
}

/// 選択画像をMIMEタイプ付きのBlobにする
pub fn image_blob(image: &SelectedImage) -> Result<Blob, JsValue> {
    let bytes = Uint8Array::from(image.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&image.mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}
