//! Text Grabber CLI ライブラリ
//!
//! 共通ウィジェット（text_grabber_common）をターミナルから操作し、
//! 抽出APIへ reqwest で画像を送信する。

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod interactive;
pub mod loader;
pub mod logging;
pub mod preview;
pub mod session;
pub mod ui;
