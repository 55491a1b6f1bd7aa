//! ブラウザのコンソールへのログ出力
//!
//! 共通ライブラリの `log::warn!` などはここで初期化したロガーを通って
//! DevTools のコンソールに出る。

use log::Level;

/// デバッグビルドでは debug、リリースビルドでは warn 以上を出力
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Warn
    }
}

/// ロガーを初期化（2回目以降は何もしない）
pub fn init() {
    if console_log::init_with_level(default_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}
