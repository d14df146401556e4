//! 社名の正規化モジュール
//!
//! 入力社名を照合キーに変換する。
//!
//! ## 処理フロー
//! 1. 小文字化
//! 2. 記号を空白に置換
//! 3. 空白で分割し、ストップワード（英語・スペイン語）を除去
//! 4. 残ったトークンを半角スペース1つで連結

pub mod stopwords;

use regex::Regex;

pub use stopwords::is_stop_word;

lazy_static::lazy_static! {
    /// 空白に置換する記号
    static ref PUNCTUATION_RE: Regex = Regex::new(r#"[!+?:",<>\\(){}@%$#=*/\[\-]"#).unwrap();
}

/// 社名を照合キーに正規化する
///
/// 純粋関数。空文字列は空文字列を返し、`normalize(normalize(x)) == normalize(x)`。
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let replaced = PUNCTUATION_RE.replace_all(&lower, " ");

    replaced
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 正規化済みキーのトークン
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
