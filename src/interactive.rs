//! 対話式アップロード
//!
//! ブラウザ版と同じウィジェットをターミナルのメニューで操作する。
//! 表示する操作は現在の状態で決まる。

use crate::error::{Result, TextGrabberError};
use crate::extractor::Extractor;
use crate::session::Session;
use crate::ui;
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};
use text_grabber_common::{PreviewStore, WidgetState};

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 画像を選択（差し替え）
    SelectImage,
    /// テキスト抽出
    Extract,
    /// 結果を再表示
    ShowResult,
    /// クリア
    Clear,
    /// 終了
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::SelectImage => "画像を選択",
            Action::Extract => "Extract Text",
            Action::ShowResult => "結果を表示",
            Action::Clear => "Clear",
            Action::Quit => "終了",
        }
    }
}

/// 状態ごとに選べる操作
pub fn available_actions(state: WidgetState) -> Vec<Action> {
    match state {
        WidgetState::Empty => vec![Action::SelectImage, Action::Quit],
        WidgetState::Selected => vec![
            Action::Extract,
            Action::SelectImage,
            Action::Clear,
            Action::Quit,
        ],
        WidgetState::Extracting => vec![Action::Quit],
        WidgetState::Extracted | WidgetState::Failed => vec![
            Action::ShowResult,
            Action::Extract,
            Action::SelectImage,
            Action::Clear,
            Action::Quit,
        ],
    }
}

/// 対話ループ
pub async fn run_interactive<E, P>(session: &mut Session<E, P>) -> Result<()>
where
    E: Extractor,
    P: PreviewStore<Handle = PathBuf>,
{
    println!("操作: 画像を選択 → Extract Text（対応形式: JPG, PNG, WEBP / 最大5MB）\n");

    loop {
        print_status(session);

        let actions = available_actions(session.widget().state());
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| TextGrabberError::CliExecution(e.to_string()))?;

        match actions[choice] {
            Action::SelectImage => {
                let input: String = Input::new()
                    .with_prompt("画像ファイルのパス")
                    .interact_text()
                    .map_err(|e| TextGrabberError::CliExecution(e.to_string()))?;

                match session.select_path(Path::new(input.trim())) {
                    Ok(()) | Err(TextGrabberError::Rejected(_)) => {}
                    Err(e) => println!("✖ {}", e),
                }
            }
            Action::Extract => {
                let pb = ui::spinner("Extracting...");
                session.extract().await;
                pb.finish_and_clear();

                if let Some(result) = session.result() {
                    ui::print_result(result);
                }
            }
            Action::ShowResult => {
                if let Some(result) = session.result() {
                    ui::print_result(result);
                }
            }
            Action::Clear => session.clear(),
            Action::Quit => break,
        }

        ui::print_notifications(&session.take_notifications());
        println!();
    }

    session.widget_mut().teardown();
    Ok(())
}

fn print_status<E, P>(session: &Session<E, P>)
where
    E: Extractor,
    P: PreviewStore<Handle = PathBuf>,
{
    let widget = session.widget();
    match widget.image() {
        Some(image) => {
            println!(
                "[{}] {} ({}, {} bytes)",
                widget.state().as_str(),
                image.file_name,
                image.mime_type,
                image.size()
            );
            if let Some(preview) = widget.preview() {
                println!("  プレビュー: {}", preview.display());
            }
        }
        None => println!("[{}] 画像が選択されていません", widget.state().as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cannot_extract() {
        let actions = available_actions(WidgetState::Empty);
        assert!(!actions.contains(&Action::Extract));
        assert!(!actions.contains(&Action::Clear));
        assert_eq!(actions.last(), Some(&Action::Quit));
    }

    #[test]
    fn test_selected_offers_extract_first() {
        let actions = available_actions(WidgetState::Selected);
        assert_eq!(actions[0], Action::Extract);
        assert!(actions.contains(&Action::Clear));
    }

    #[test]
    fn test_extracting_disables_actions() {
        assert_eq!(available_actions(WidgetState::Extracting), vec![Action::Quit]);
    }

    #[test]
    fn test_result_states_allow_retry() {
        for state in [WidgetState::Extracted, WidgetState::Failed] {
            let actions = available_actions(state);
            assert!(actions.contains(&Action::Extract));
            assert!(actions.contains(&Action::ShowResult));
        }
    }
}
