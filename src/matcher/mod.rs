//! 社名照合モジュール
//!
//! クエリごとに 正規化 → 候補絞り込み → 類似度計算 → 上位K件 を行う。
//! クエリ同士は独立しているので rayon で並列に処理し、結果は入力順で返す。

pub mod candidates;
pub mod ranker;
pub mod similarity;
mod types;

pub use candidates::{select_candidates, Candidate};
pub use ranker::rank;
pub use similarity::score;
pub use types::{TopK, DEFAULT_TOP_K};

use crate::catalog::Catalog;
use crate::normalizer::normalize;
use company_matcher_common::{MatchCandidate, MatchQuery, MatchResult};
use rayon::prelude::*;
use std::sync::Arc;

/// カタログを保持する照合器
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn match_one(&self, query: &MatchQuery, top_k: TopK) -> MatchResult {
        match_one(&self.catalog, query, top_k)
    }

    pub fn match_batch(&self, queries: &[MatchQuery], top_k: TopK) -> Vec<MatchResult> {
        match_batch(&self.catalog, queries, top_k)
    }
}

/// 正規化済みクエリに対する候補とスコア（カタログ順、未ソート）
pub fn score_candidates(catalog: &Catalog, normalized_query: &str) -> Vec<MatchCandidate> {
    select_candidates(catalog, normalized_query)
        .into_iter()
        .map(|c| MatchCandidate::new(c.canonical_name, score(normalized_query, c.key)))
        .collect()
}

/// クエリ1件を照合する
pub fn match_one(catalog: &Catalog, query: &MatchQuery, top_k: TopK) -> MatchResult {
    let normalized = normalize(&query.raw_name);
    let scored = score_candidates(catalog, &normalized);
    MatchResult::from_ranked(query, rank(scored, top_k.get()))
}

/// バッチを照合する（入力と同じ件数・順序）
pub fn match_batch(catalog: &Catalog, queries: &[MatchQuery], top_k: TopK) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = queries
        .par_iter()
        .map(|query| match_one(catalog, query, top_k))
        .collect();

    tracing::debug!(
        queries = queries.len(),
        not_found = results.iter().filter(|r| r.is_not_found()).count(),
        top_k = top_k.get(),
        "Batch matched"
    );

    results
}
