use crate::error::{Result, ShareBoardError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でサーバーURLを上書きする
pub const SERVER_URL_ENV: &str = "SHARE_BOARD_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub timeout_seconds: u64,
    /// `list` で読むページ数の上限（Noneなら終端まで）
    pub page_limit: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            timeout_seconds: 30,
            page_limit: None,
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
            .ok_or_else(|| ShareBoardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("share-board").join("config.json"))
    }

    /// 実際に使うサーバーURL（環境変数を優先）
    pub fn server_url(&self) -> String {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.server_url.clone(),
        }
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        validate_server_url(&url)?;
        self.server_url = url.trim_end_matches('/').to_string();
        Ok(())
    }
}

pub fn validate_server_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ShareBoardError::InvalidServerUrl(url.to_string()))
    }
}
