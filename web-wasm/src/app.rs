//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header,
    toaster::{Toaster, Toasts},
    upload_image::UploadImage,
};
use leptos::prelude::*;
use text_grabber_common::{EndpointConfig, BASE_URL_ENV};

/// ビルド時に埋め込まれた抽出サービスのベースURL
const BUILD_BASE_URL: Option<&str> = option_env!("TEXT_GRABBER_API_URL");

/// エンドポイント設定を組み立てる
fn endpoint_config() -> Result<EndpointConfig, String> {
    let base_url = BUILD_BASE_URL.ok_or_else(|| format!("{} is not set at build time", BASE_URL_ENV))?;
    EndpointConfig::new(base_url).map_err(|e| e.to_string())
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let toaster = Toaster::new();

    let body = match endpoint_config() {
        Ok(config) => view! { <UploadImage config=config toaster=toaster /> }.into_any(),
        Err(message) => view! {
            <div class="config-error">
                <strong>"Configuration error"</strong>
                <p>{message}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="container">
            <Header />
            {body}
            <Toasts toaster=toaster />
        </div>
    }
}
