//! 候補の絞り込み
//!
//! 正規化済みクエリ全体、またはその各トークンと完全一致する別名を持つ行だけを候補にする。
//! カタログ全件との類似度計算は行わないため、トークンが1つも一致しないクエリは
//! 編集距離が近い行があっても候補なしになる。

use crate::catalog::Catalog;
use crate::normalizer::tokens;
use std::collections::BTreeSet;

/// 候補行（行番号と正規化キー）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub row: usize,
    pub key: &'a str,
    pub canonical_name: &'a str,
}

/// 候補行を選ぶ（各行は1回だけ、カタログ順）
pub fn select_candidates<'a>(catalog: &'a Catalog, normalized_query: &str) -> Vec<Candidate<'a>> {
    if normalized_query.is_empty() {
        return Vec::new();
    }

    let rows: BTreeSet<usize> = std::iter::once(normalized_query)
        .chain(tokens(normalized_query))
        .flat_map(|member| catalog.lookup(member).iter().copied())
        .collect();

    rows.into_iter()
        .filter_map(|row| {
            let entry = catalog.entry(row)?;
            let key = catalog.key(row)?;
            Some(Candidate {
                row,
                key,
                canonical_name: entry.canonical_name.as_str(),
            })
        })
        .collect()
}
