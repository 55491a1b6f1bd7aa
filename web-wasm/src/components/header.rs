//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Text Grabber"</h1>
            <h2 class="text-muted">
                "Extract text and generate descriptions from images using OCR"
            </h2>
        </header>
    }
}
