//! 照合リクエスト・結果の型定義
//!
//! 照合コアとCLIで共有される型:
//! - MatchQuery: 呼び出し側から渡される (id, 社名)
//! - MatchCandidate: 候補1件（正式名称とスコア）
//! - MatchResult: クエリ1件ごとの照合結果
//! - MatchResponse: バッチ全体のレスポンス

use serde::{Deserialize, Serialize};

/// 候補が見つからなかった場合の正式名称
pub const NOT_FOUND: &str = "NOT FOUND";

/// 照合リクエスト1件
///
/// `id` は不透明な識別子で、重複チェックはしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    pub id: String,
    #[serde(rename = "name")]
    pub raw_name: String,
}

impl MatchQuery {
    pub fn new(id: impl Into<String>, raw_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_name: raw_name.into(),
        }
    }
}

/// 候補1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(rename = "realName")]
    pub canonical_name: String,
    #[serde(rename = "accuracy")]
    pub score: f64,
}

impl MatchCandidate {
    pub fn new(canonical_name: impl Into<String>, score: f64) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            score,
        }
    }

    /// 候補なしを表す番兵
    pub fn not_found() -> Self {
        Self::new(NOT_FOUND, 0.0)
    }

    pub fn is_not_found(&self) -> bool {
        self.canonical_name == NOT_FOUND && self.score == 0.0
    }
}

/// クエリ1件の照合結果
///
/// `best_canonical_name` / `best_score` は常に `top_k[0]` と一致する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    #[serde(rename = "name")]
    pub raw_name: String,
    #[serde(rename = "realName")]
    pub best_canonical_name: String,
    #[serde(rename = "accuracy")]
    pub best_score: f64,
    #[serde(rename = "topk")]
    pub top_k: Vec<MatchCandidate>,
}

impl MatchResult {
    /// ランキング済み候補から結果を組み立てる（空なら番兵を補う）
    pub fn from_ranked(query: &MatchQuery, mut top_k: Vec<MatchCandidate>) -> Self {
        if top_k.is_empty() {
            top_k.push(MatchCandidate::not_found());
        }
        let best = top_k[0].clone();

        Self {
            id: query.id.clone(),
            raw_name: query.raw_name.clone(),
            best_canonical_name: best.canonical_name,
            best_score: best.score,
            top_k,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.top_k.len() == 1 && self.top_k[0].is_not_found()
    }
}

/// バッチ全体のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub companies: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_query_deserialize() {
        let json = r#"{"id": "any_string_identifier_of_your_choice", "name": "IBM Latin America"}"#;
        let query: MatchQuery = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(query.id, "any_string_identifier_of_your_choice");
        assert_eq!(query.raw_name, "IBM Latin America");
    }

    #[test]
    fn test_match_query_missing_name_is_error() {
        let json = r#"{"id": "1"}"#;
        assert!(serde_json::from_str::<MatchQuery>(json).is_err());
    }

    #[test]
    fn test_from_ranked_empty_uses_sentinel() {
        let query = MatchQuery::new("2", "zzz nonexistent corp");
        let result = MatchResult::from_ranked(&query, Vec::new());

        assert_eq!(result.best_canonical_name, NOT_FOUND);
        assert_eq!(result.best_score, 0.0);
        assert_eq!(result.top_k, vec![MatchCandidate::not_found()]);
        assert!(result.is_not_found());
    }

    #[test]
    fn test_from_ranked_best_is_first() {
        let query = MatchQuery::new("1", "acme");
        let ranked = vec![
            MatchCandidate::new("Acme Inc", 100.0),
            MatchCandidate::new("Acme Holdings", 61.54),
        ];
        let result = MatchResult::from_ranked(&query, ranked);

        assert_eq!(result.best_canonical_name, "Acme Inc");
        assert_eq!(result.best_score, 100.0);
        assert_eq!(result.top_k.len(), 2);
        assert!(!result.is_not_found());
    }

    #[test]
    fn test_match_result_serialize_wire_names() {
        let query = MatchQuery::new("1", "IBM latin america");
        let result = MatchResult::from_ranked(
            &query,
            vec![MatchCandidate::new("IBM Latin America", 30.0)],
        );

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":\"1\""));
        assert!(json.contains("\"name\":\"IBM latin america\""));
        assert!(json.contains("\"realName\":\"IBM Latin America\""));
        assert!(json.contains("\"accuracy\":30.0"));
        assert!(json.contains("\"topk\":[{\"realName\":\"IBM Latin America\",\"accuracy\":30.0}]"));
    }

    #[test]
    fn test_match_response_wraps_companies() {
        let response = MatchResponse::default();
        let json = serde_json::to_string(&response).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"companies":[]}"#);
    }
}
