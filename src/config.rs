use crate::error::{MatcherError, Result};
use crate::matcher::{TopK, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "COMPANY_MATCHER_CATALOG";

/// 既定のカタログパス
pub const DEFAULT_CATALOG_PATH: &str = "data/processed/company_names_cleaned_v1.0.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    /// Excelカタログのシート名（省略時は先頭シート）
    pub excel_sheet: Option<String>,
    pub default_topk: i64,
    /// 進捗表示のためにバッチを分割する件数
    pub parallel_chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            excel_sheet: None,
            default_topk: DEFAULT_TOP_K as i64,
            parallel_chunk_size: 1000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("company-matcher").join("config.json"))
    }

    /// カタログパスを解決（引数 → 環境変数 → 設定ファイル）
    pub fn resolve_catalog_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = flag {
            return Some(path.to_path_buf());
        }

        // 環境変数を優先
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.catalog_path.clone()
    }

    /// topk を解決（引数 → 設定ファイル）。設定ファイルの値が0以下なら設定エラー
    pub fn resolve_top_k(&self, flag: Option<TopK>) -> Result<TopK> {
        match flag {
            Some(top_k) => Ok(top_k),
            None => Ok(TopK::new(self.default_topk)?),
        }
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) {
        self.catalog_path = Some(path);
    }

    pub fn set_default_topk(&mut self, k: i64) -> Result<()> {
        TopK::new(k)?;
        self.default_topk = k;
        Ok(())
    }

    pub fn chunk_size(&self) -> usize {
        self.parallel_chunk_size.max(1)
    }
}
