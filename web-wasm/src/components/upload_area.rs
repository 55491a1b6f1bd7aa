//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックでファイルを受け取り、親に渡す。
//! 受付判定は親（ウィジェット）が行う。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(on_files: F) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                on_files(collect_files(&files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_files = on_files.clone();
        move |_| open_file_picker(on_files.clone())
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"☁"</div>
            <p>"Drag & drop an image here, or click to select"</p>
            <p class="text-muted">"Supports JPG, PNG, WEBP (Max: 5MB)"</p>
        </div>
    }
}

fn collect_files(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// ファイル選択ダイアログを開く
fn open_file_picker<F>(on_files: F)
where
    F: Fn(Vec<File>) + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let input: HtmlInputElement = match document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(input) => input,
        None => return,
    };
    input.set_type("file");
    input.set_accept("image/jpeg,image/png,image/webp,.jpg,.jpeg,.png,.webp");

    let picker = input.clone();
    let closure = Closure::once(move |_: web_sys::Event| {
        if let Some(files) = picker.files() {
            on_files(collect_files(&files));
        }
    });
    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    // ダイアログが閉じられるまで保持する
    closure.forget();
    input.click();
}
