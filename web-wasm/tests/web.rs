//! ブラウザ上のプレビューテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use text_grabber_common::{CandidateFile, PreviewStore, UploadWidget, WidgetState};
use text_grabber_wasm::logging;
use text_grabber_wasm::preview::{image_blob, ObjectUrlPreviews};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn png_candidate() -> CandidateFile {
    CandidateFile::new("note.png", "image/png", vec![0x89, b'P', b'N', b'G'])
}

#[wasm_bindgen_test]
fn test_blob_carries_mime_type() {
    let mut widget = UploadWidget::new(ObjectUrlPreviews);
    widget.select_image(vec![png_candidate()]).unwrap();
    let blob = image_blob(widget.image().unwrap()).unwrap();
    assert_eq!(blob.type_(), "image/png");
    assert_eq!(blob.size() as usize, 4);
}

#[wasm_bindgen_test]
fn test_object_url_created_and_released() {
    let mut widget = UploadWidget::new(ObjectUrlPreviews);
    widget.select_image(vec![png_candidate()]).unwrap();
    assert_eq!(widget.state(), WidgetState::Selected);

    let url = widget.preview().cloned().unwrap();
    assert!(url.starts_with("blob:"));

    widget.clear();
    assert!(widget.preview().is_none());
}

#[wasm_bindgen_test]
fn test_release_tolerates_unknown_url() {
    let mut previews = ObjectUrlPreviews;
    previews.release("blob:unknown".to_string());
}

#[wasm_bindgen_test]
fn test_logger_routes_widget_diagnostics_to_console() {
    logging::init();
    logging::init();
    assert_eq!(log::max_level(), logging::default_level().to_level_filter());
    assert!(log::log_enabled!(log::Level::Warn));

    // 受付拒否の理由が warn で出ても落ちない
    let mut widget = UploadWidget::new(ObjectUrlPreviews);
    assert!(widget
        .select_image(vec![CandidateFile::new("doc.pdf", "application/pdf", vec![1])])
        .is_err());
    assert_eq!(widget.take_notifications().len(), 1);
}
