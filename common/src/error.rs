//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// カタログの行が不正（起動を中断する）
    #[error("Catalog load error (line {line}): {reason}")]
    CatalogLoad { line: usize, reason: String },

    /// topk は1以上が必須
    #[error("Invalid topk: {0} (must be a positive integer)")]
    InvalidTopK(i64),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
