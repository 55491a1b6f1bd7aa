//! 抽出APIクライアント
//!
//! `Extractor` は画像1枚を抽出APIへ送り、結果を返す。
//! 本番は `HttpExtractor`（reqwest multipart）。

mod http;

pub use http::HttpExtractor;

use std::future::Future;
use text_grabber_common::{ExtractError, ExtractedNotes, SelectedImage};

pub trait Extractor {
    fn extract(
        &self,
        image: &SelectedImage,
    ) -> impl Future<Output = Result<ExtractedNotes, ExtractError>>;
}
