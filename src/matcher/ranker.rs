//! 上位K件の選択

use company_matcher_common::MatchCandidate;

/// スコア降順に並べて上位 `max(k, 1)` 件を返す
///
/// 同点はカタログ順を保つ（安定ソート）。候補が空なら番兵 `NOT FOUND` 1件のみ。
pub fn rank(mut candidates: Vec<MatchCandidate>, k: usize) -> Vec<MatchCandidate> {
    if candidates.is_empty() {
        return vec![MatchCandidate::not_found()];
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(k.max(1));
    candidates
}
