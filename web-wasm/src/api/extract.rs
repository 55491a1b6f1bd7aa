//! 抽出API呼び出し（fetch + FormData）
//!
//! タイムアウト時は AbortController で fetch を中断し、Timeout として返す。

use crate::preview::image_blob;
use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use text_grabber_common::{
    parse_extract_response, EndpointConfig, ExtractError, ExtractedNotes, SelectedImage,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, FormData, Request, RequestInit, RequestMode, Response};

/// 画像1枚を抽出APIへ送信
pub async fn extract_notes(
    config: &EndpointConfig,
    image: &SelectedImage,
) -> Result<ExtractedNotes, ExtractError> {
    let controller = AbortController::new().map_err(transport)?;
    let timed_out = Rc::new(Cell::new(false));

    // 完了時に _timer が drop されてタイマーも解除される
    let _timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        let millis = u32::try_from(config.timeout.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    match post_image(config, image, &controller.signal()).await {
        Err(_) if timed_out.get() => Err(ExtractError::Timeout(config.timeout)),
        other => other,
    }
}

async fn post_image(
    config: &EndpointConfig,
    image: &SelectedImage,
    signal: &AbortSignal,
) -> Result<ExtractedNotes, ExtractError> {
    let blob = image_blob(image).map_err(transport)?;
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename(&config.field_name, &blob, &image.file_name)
        .map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from(form));
    opts.set_signal(Some(signal));

    let request = Request::new_with_str_and_init(&config.endpoint_url(), &opts).map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| ExtractError::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let status = resp.status();
    let body = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();

    parse_extract_response(status, &body)
}

fn transport(err: JsValue) -> ExtractError {
    ExtractError::Transport(describe_js_error(&err))
}

/// JsValueのエラーを読める文字列にする
fn describe_js_error(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}
