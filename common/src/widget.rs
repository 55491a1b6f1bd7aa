//! アップロードウィジェットの状態機械
//!
//! 画像1枚の選択・クリア・抽出リクエストの開始/完了を管理する。
//! 通信そのものはホスト（CLI / WASM）が行い、結果を `finish_extract` で戻す。
//!
//! 状態遷移:
//! - Empty → Selected（select_image）
//! - Selected → Extracting（begin_extract）
//! - Extracting → Extracted / Failed（finish_extract）
//! - 任意 → Empty（clear）
//! - Selected / Extracted / Failed → Selected（select_image で差し替え）

use crate::notification::Notification;
use crate::parser::ExtractError;
use crate::preview::PreviewStore;
use crate::types::{CandidateFile, ExtractedNotes, ExtractionResult, SelectedImage};
use crate::validation::{ImageRules, RejectReason};
use std::sync::Arc;

/// ウィジェットの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Empty,
    Selected,
    Extracting,
    Extracted,
    Failed,
}

impl WidgetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetState::Empty => "empty",
            WidgetState::Selected => "selected",
            WidgetState::Extracting => "extracting",
            WidgetState::Extracted => "extracted",
            WidgetState::Failed => "failed",
        }
    }
}

/// 実行中リクエストの引換券
///
/// 発行時の選択世代を持ち、完了時に画像が差し替わっていれば結果を捨てる。
#[derive(Debug, Clone)]
pub struct ExtractTicket {
    generation: u64,
    image: Arc<SelectedImage>,
}

impl ExtractTicket {
    pub fn image(&self) -> &SelectedImage {
        &self.image
    }
}

struct Selection<H> {
    image: Arc<SelectedImage>,
    preview: Option<H>,
}

pub struct UploadWidget<P: PreviewStore> {
    rules: ImageRules,
    previews: P,
    selection: Option<Selection<P::Handle>>,
    result: Option<ExtractionResult>,
    in_flight: bool,
    generation: u64,
    outbox: Vec<Notification>,
}

impl<P: PreviewStore> UploadWidget<P> {
    pub fn new(previews: P) -> Self {
        Self::with_rules(ImageRules::default(), previews)
    }

    pub fn with_rules(rules: ImageRules, previews: P) -> Self {
        Self {
            rules,
            previews,
            selection: None,
            result: None,
            in_flight: false,
            generation: 0,
            outbox: Vec::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        if self.selection.is_none() {
            return WidgetState::Empty;
        }
        if self.in_flight {
            return WidgetState::Extracting;
        }
        match &self.result {
            Some(ExtractionResult::Extracted { .. }) => WidgetState::Extracted,
            Some(ExtractionResult::Failed { .. }) => WidgetState::Failed,
            None => WidgetState::Selected,
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.selection.as_ref().map(|s| s.image.as_ref())
    }

    pub fn preview(&self) -> Option<&P::Handle> {
        self.selection.as_ref().and_then(|s| s.preview.as_ref())
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// 抽出を開始できるか（画像あり、かつ実行中でない）
    pub fn can_extract(&self) -> bool {
        self.selection.is_some() && !self.in_flight
    }

    pub fn rules(&self) -> &ImageRules {
        &self.rules
    }

    pub fn previews(&self) -> &P {
        &self.previews
    }

    /// 未表示の通知を取り出す
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    /// 画像を選択
    ///
    /// 受付不可の場合は状態を変えずにエラー通知を1件積み、理由を返す。
    pub fn select_image(&mut self, files: Vec<CandidateFile>) -> Result<(), RejectReason> {
        let image = match self.rules.validate(files) {
            Ok(image) => image,
            Err(reason) => {
                log::warn!("image rejected: {}", reason);
                self.outbox.push(Notification::rejected());
                return Err(reason);
            }
        };

        self.release_selection();
        self.result = None;
        self.generation += 1;

        let preview = match self.previews.create(&image) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("preview unavailable for {}: {}", image.file_name, e);
                None
            }
        };

        log::debug!(
            "selected {} ({}, {} bytes)",
            image.file_name,
            image.mime_type,
            image.size()
        );
        self.selection = Some(Selection {
            image: Arc::new(image),
            preview,
        });
        Ok(())
    }

    /// 画像と結果をクリア（空なら何もしない）
    pub fn clear(&mut self) {
        if self.selection.is_none() && self.result.is_none() {
            return;
        }
        self.release_selection();
        self.result = None;
        self.generation += 1;
    }

    /// 抽出リクエストを開始
    ///
    /// 画像がない、または実行中なら `None`（リクエストは発行しない）。
    pub fn begin_extract(&mut self) -> Option<ExtractTicket> {
        if self.in_flight {
            log::debug!("extract ignored: a request is already in flight");
            return None;
        }
        let image = Arc::clone(&self.selection.as_ref()?.image);
        self.in_flight = true;
        Some(ExtractTicket {
            generation: self.generation,
            image,
        })
    }

    /// 抽出リクエストを完了
    ///
    /// 実行中フラグは常に解除する。画像が差し替え済みなら結果は捨て、`false` を返す。
    pub fn finish_extract(
        &mut self,
        ticket: ExtractTicket,
        outcome: Result<ExtractedNotes, ExtractError>,
    ) -> bool {
        self.in_flight = false;

        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale response for {} ({:?})",
                ticket.image.file_name,
                outcome.as_ref().map(|_| ())
            );
            return false;
        }

        match outcome {
            Ok(notes) => {
                self.result = Some(notes.into());
                self.outbox.push(Notification::extracted());
            }
            Err(err) => {
                log::error!("OCR error for {}: {}", ticket.image.file_name, err);
                self.outbox.push(Notification::extraction_failed(&err));
                self.result = Some(ExtractionResult::Failed {
                    message: err.to_string(),
                });
            }
        }
        true
    }

    /// 破棄時のプレビュー解放
    pub fn teardown(&mut self) {
        self.release_selection();
    }

    fn release_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            if let Some(handle) = selection.preview {
                self.previews.release(handle);
            }
        }
    }
}

impl<P: PreviewStore> Drop for UploadWidget<P> {
    fn drop(&mut self) {
        self.release_selection();
    }
}
