//! 対話式照合モジュール
//!
//! 社名を1件ずつ入力し、その場で上位K件を表示する。

use crate::error::{MatcherError, Result};
use crate::matcher::{Matcher, TopK};
use crate::normalizer::normalize;
use company_matcher_common::{MatchQuery, MatchResult};
use dialoguer::Input;

/// 入力に対する操作
#[derive(Debug, PartialEq, Eq)]
pub enum LookupAction {
    /// 社名を照合
    Query(String),
    /// 終了
    Quit,
}

/// 入力文字列を操作に変換
pub fn parse_action(input: &str) -> LookupAction {
    match input.trim() {
        "" | "q" | "Q" | ":q" => LookupAction::Quit,
        name => LookupAction::Query(name.to_string()),
    }
}

/// 照合結果を表示用の行に整形
pub fn format_result(result: &MatchResult) -> Vec<String> {
    let mut lines = vec![format!(
        "  照合キー: \"{}\"",
        normalize(&result.raw_name)
    )];

    if result.is_not_found() {
        lines.push("  → 候補なし".to_string());
        return lines;
    }

    for (rank, candidate) in result.top_k.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({:.2})",
            rank + 1,
            candidate.canonical_name,
            candidate.score
        ));
    }
    lines
}

/// 対話ループ
pub fn run_interactive_lookup(matcher: &Matcher, top_k: TopK) -> Result<()> {
    println!("社名を入力してください（空行または q で終了）");
    println!("---\n");

    let mut count = 0usize;
    loop {
        let input: String = Input::new()
            .with_prompt("社名")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| MatcherError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            LookupAction::Quit => break,
            LookupAction::Query(name) => {
                count += 1;
                let query = MatchQuery::new(count.to_string(), name);
                let result = matcher.match_one(&query, top_k);
                for line in format_result(&result) {
                    println!("{}", line);
                }
                println!();
            }
        }
    }

    tracing::debug!(queries = count, "Lookup session finished");
    println!("終了します");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use company_matcher_common::MatchCandidate;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action(""), LookupAction::Quit);
        assert_eq!(parse_action("  q "), LookupAction::Quit);
        assert_eq!(
            parse_action(" IBM latin america "),
            LookupAction::Query("IBM latin america".to_string())
        );
    }

    #[test]
    fn test_format_result_not_found() {
        let query = MatchQuery::new("1", "zzz nonexistent corp");
        let result = MatchResult::from_ranked(&query, Vec::new());
        let lines = format_result(&result);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("zzz nonexistent corp"));
        assert!(lines[1].contains("候補なし"));
    }

    #[test]
    fn test_format_result_ranked() {
        let query = MatchQuery::new("1", "The Acme");
        let result = MatchResult::from_ranked(
            &query,
            vec![MatchCandidate::new("Acme Inc", 100.0), MatchCandidate::new("Acme Holdings", 47.06)],
        );
        let lines = format_result(&result);
        assert_eq!(lines[0], "  照合キー: \"acme\"");
        assert_eq!(lines[1], "  1. Acme Inc (100.00)");
        assert_eq!(lines[2], "  2. Acme Holdings (47.06)");
    }
}
