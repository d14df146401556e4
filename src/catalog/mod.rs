//! 社名カタログ（参照辞書）
//!
//! 起動時に一度だけ読み込み、以降は読み取り専用で共有する。
//! 別名を正規化したキーでインデックスを持つ。

pub mod loader;
pub mod selector;

pub use loader::{load_catalog, CatalogFormat};
pub use selector::{list_available_catalogs, select_catalog_interactive};

use crate::error::Result;
use crate::normalizer::normalize;
use company_matcher_common::{parse_catalog_csv, CatalogEntry};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

/// インデックス付きカタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// 全行データ（読み込み順）
    entries: Vec<CatalogEntry>,
    /// 各行の正規化済みキー（entries と同じ並び）
    keys: Vec<String>,
    /// 正規化キー → 行番号（昇順）
    index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// 行データからカタログを構築
    ///
    /// 正規化キーが空になる行はインデックスに載せない（候補にならない）。
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let keys: Vec<String> = entries
            .iter()
            .map(|e| normalize(&e.alternate_title))
            .collect();

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (row, key) in keys.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            index.entry(key.clone()).or_default().push(row);
        }

        Self { entries, keys, index }
    }

    /// CSV文字列から読み込み
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Ok(Self::new(parse_catalog_csv(content)?))
    }

    /// 正規化キーに一致する行番号（カタログ順）
    pub fn lookup(&self, key: &str) -> &[usize] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entry(&self, row: usize) -> Option<&CatalogEntry> {
        self.entries.get(row)
    }

    /// 行の正規化済みキー
    pub fn key(&self, row: usize) -> Option<&str> {
        self.keys.get(row).map(String::as_str)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// インデックスのキー数
    pub fn indexed_key_count(&self) -> usize {
        self.index.len()
    }

    /// 正式名称の種類数
    pub fn canonical_name_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.canonical_name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// 内容のフィンガープリント（SHA-256, hex）
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            hasher.update(entry.alternate_title.as_bytes());
            hasher.update(b"\t");
            hasher.update(entry.canonical_name.as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}
