//! ウィジェットと抽出クライアントの結線
//!
//! 抽出リクエストは必ずタイムアウトと競合させ、どの経路で終わっても
//! `finish_extract` で実行中フラグを戻す。

use crate::error::{Result, TextGrabberError};
use crate::extractor::Extractor;
use crate::loader::load_candidate;
use std::path::Path;
use std::time::Duration;
use text_grabber_common::{
    ExtractError, ExtractionResult, Notification, PreviewStore, UploadWidget,
};

pub struct Session<E: Extractor, P: PreviewStore> {
    widget: UploadWidget<P>,
    extractor: E,
    timeout: Duration,
}

impl<E: Extractor, P: PreviewStore> Session<E, P> {
    pub fn new(extractor: E, previews: P, timeout: Duration) -> Self {
        Self {
            widget: UploadWidget::new(previews),
            extractor,
            timeout,
        }
    }

    pub fn widget(&self) -> &UploadWidget<P> {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut UploadWidget<P> {
        &mut self.widget
    }

    /// ファイルを読み込んで選択
    ///
    /// 受付拒否の場合もウィジェットに通知が積まれる。
    pub fn select_path(&mut self, path: &Path) -> Result<()> {
        let candidate = load_candidate(path, self.widget.rules().max_size)?;
        self.widget
            .select_image(vec![candidate])
            .map_err(TextGrabberError::from)
    }

    pub fn clear(&mut self) {
        self.widget.clear();
    }

    /// 抽出を1回実行
    ///
    /// 画像がない、または実行中なら何もせず `false` を返す。
    pub async fn extract(&mut self) -> bool {
        let Some(ticket) = self.widget.begin_extract() else {
            return false;
        };

        let outcome = match tokio::time::timeout(self.timeout, self.extractor.extract(ticket.image())).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ExtractError::Timeout(self.timeout)),
        };

        self.widget.finish_extract(ticket, outcome);
        true
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.widget.result()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.widget.take_notifications()
    }
}
