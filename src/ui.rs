//! ターミナル表示（トースト・結果・スピナー）

use crate::error::TextGrabberError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use text_grabber_common::{ExtractionResult, Notification, NotificationLevel};

/// 実行中スピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 通知を1行ずつ表示
pub fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        println!("{}", format_notification(n));
    }
}

pub fn format_notification(n: &Notification) -> String {
    let mark = match n.level {
        NotificationLevel::Success => "✔",
        NotificationLevel::Error => "✖",
    };
    format!("{} {}\n  {}", mark, n.title, n.description)
}

pub fn print_result(result: &ExtractionResult) {
    println!("{}", format_result(result));
}

pub fn format_result(result: &ExtractionResult) -> String {
    match result {
        ExtractionResult::Extracted { text, description } => {
            format!("── Raw Text ──\n{}\n\n── Summary ──\n{}", text, description)
        }
        ExtractionResult::Failed { message } => format!("抽出失敗: {}", message),
    }
}

/// 終了時のエラー表示（Debug ではなくメッセージを出す）
pub fn format_error(err: &TextGrabberError) -> String {
    format!("✖ {}", err)
}
