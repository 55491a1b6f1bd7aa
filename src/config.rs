use crate::error::{Result, TextGrabberError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use text_grabber_common::config::{DEFAULT_EXTRACT_PATH, DEFAULT_FIELD_NAME, DEFAULT_TIMEOUT};
use text_grabber_common::EndpointConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: Option<String>,
    pub extract_path: String,
    pub field_name: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            extract_path: DEFAULT_EXTRACT_PATH.into(),
            field_name: DEFAULT_FIELD_NAME.into(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TextGrabberError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("text-grabber").join("config.json"))
    }

    /// 環境変数の値でベースURLを上書き（起動時に一度だけ）
    pub fn with_env_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = Some(url);
        }
        self
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        // 保存前に形式だけ検証
        EndpointConfig::new(url.as_str())?;
        self.base_url = Some(url.trim().to_string());
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(TextGrabberError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }

    /// ウィジェットに渡すエンドポイント設定を組み立てる
    pub fn endpoint(&self) -> Result<EndpointConfig> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(TextGrabberError::MissingBaseUrl)?;

        Ok(EndpointConfig::new(base_url)?
            .with_extract_path(self.extract_path.as_str())
            .with_field_name(self.field_name.as_str())
            .with_timeout(Duration::from_secs(self.timeout_seconds.max(1))))
    }
}
