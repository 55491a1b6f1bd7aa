//! 画像アップロード/テキスト抽出ウィジェット
//!
//! 共通の `UploadWidget` をシグナルに載せ、ドロップ・クリア・抽出の
//! 各イベントから操作する。通知は操作のたびにトーストへ流す。

use crate::api;
use crate::components::toaster::Toaster;
use crate::components::upload_area::UploadArea;
use crate::preview::ObjectUrlPreviews;
use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use text_grabber_common::{
    CandidateFile, EndpointConfig, ExtractionResult, Notification, UploadWidget,
    NO_SUMMARY_PLACEHOLDER,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

type Widget = RwSignal<UploadWidget<ObjectUrlPreviews>>;

#[component]
pub fn UploadImage(config: EndpointConfig, toaster: Toaster) -> impl IntoView {
    let widget: Widget = RwSignal::new(UploadWidget::new(ObjectUrlPreviews));
    let config = StoredValue::new(config);

    // アンマウント時にオブジェクトURLを解放
    on_cleanup(move || {
        widget.try_update_untracked(|w| w.teardown());
    });

    let has_image = move || widget.with(|w| w.image().is_some());
    let loading = move || widget.with(|w| w.is_in_flight());
    let preview_url = move || widget.with(|w| w.preview().cloned());
    let result = move || widget.with(|w| w.result().cloned());

    let on_files = move |files: Vec<File>| {
        spawn_local(async move {
            let max_size = widget.with_untracked(|w| w.rules().max_size);
            let candidates = match read_candidates(&files, max_size).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    web_sys::console::error_2(&JsValue::from_str("File read error:"), &e);
                    toaster.push(Notification::read_failed());
                    return;
                }
            };
            let count = candidates.len();
            let rejected = widget
                .try_update(|w| w.select_image(candidates).err())
                .flatten();
            if let Some(reason) = rejected {
                log::debug!("dropped {} file(s), not selected: {}", count, reason);
            }
            flush_notifications(widget, toaster);
        });
    };

    let on_clear = move |_| {
        widget.update(|w| w.clear());
    };

    let on_extract = move |_| {
        let Some(ticket) = widget.try_update(|w| w.begin_extract()).flatten() else {
            return;
        };
        let config = config.get_value();

        spawn_local(async move {
            let outcome = api::extract_notes(&config, ticket.image()).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&JsValue::from_str(&format!("OCR Error: {}", e)));
            }
            widget.try_update(|w| w.finish_extract(ticket, outcome));
            flush_notifications(widget, toaster);
        });
    };

    view! {
        <div class="upload-image">
            <Show when=has_image>
                <div class="panel">
                    <h3>"Uploaded Image"</h3>
                    <div class="preview">
                        {move || match preview_url() {
                            Some(url) => view! { <img src=url alt="Uploaded" /> }.into_any(),
                            None => view! { <p class="text-muted">"No image selected"</p> }.into_any(),
                        }}
                    </div>
                </div>

                <div class="panel">
                    <h3>"Extracted Text"</h3>
                    <h4>"Raw Text:"</h4>
                    {move || {
                        if loading() {
                            return view! { <div class="spinner" /> }.into_any();
                        }
                        match result() {
                            Some(ExtractionResult::Extracted { text, .. }) => view! {
                                <textarea class="raw-text" readonly prop:value=text />
                            }
                            .into_any(),
                            _ => view! { <p class="text-muted">"No text extracted"</p> }.into_any(),
                        }
                    }}

                    <h4>"Summary:"</h4>
                    {move || {
                        if loading() {
                            return view! { <div class="spinner" /> }.into_any();
                        }
                        match result() {
                            Some(ExtractionResult::Extracted { description, .. }) => view! {
                                <p class="summary">{description}</p>
                            }
                            .into_any(),
                            _ => view! { <p class="text-muted">{NO_SUMMARY_PLACEHOLDER}</p> }.into_any(),
                        }
                    }}
                </div>

                <div class="actions">
                    <button class="btn btn-secondary" disabled=loading on:click=on_clear>
                        "Clear"
                    </button>
                    <button class="btn btn-primary" disabled=loading on:click=on_extract>
                        {move || if loading() { "Extracting..." } else { "Extract Text" }}
                    </button>
                </div>
            </Show>

            <UploadArea on_files=on_files />
        </div>
    }
}

/// ウィジェットに溜まった通知をトーストへ流す
fn flush_notifications(widget: Widget, toaster: Toaster) {
    let notifications = widget
        .try_update_untracked(|w| w.take_notifications())
        .unwrap_or_default();
    for n in notifications {
        toaster.push(n);
    }
}

/// ドロップされたファイルを候補に変換
///
/// 1枚かつ上限以内のときだけ中身を読む（それ以外は受付判定で弾かれる）。
async fn read_candidates(files: &[File], max_size: u64) -> Result<Vec<CandidateFile>, JsValue> {
    let read_bytes = files.len() == 1;
    let mut candidates = Vec::with_capacity(files.len());

    for file in files {
        let size = file.size() as u64;
        let bytes = if read_bytes && size <= max_size {
            let buffer = JsFuture::from(file.array_buffer()).await?;
            Uint8Array::new(&buffer).to_vec()
        } else {
            Vec::new()
        };

        candidates.push(CandidateFile {
            file_name: file.name(),
            mime_type: file.type_(),
            size,
            bytes,
        });
    }

    Ok(candidates)
}
