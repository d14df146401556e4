//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use company_matcher::catalog::load_catalog;
use company_matcher::config::Config;
use company_matcher::error::MatcherError;
use company_matcher::matcher::TopK;
use company_matcher_common::Error;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないカタログを読み込んだ場合
#[test]
fn test_load_nonexistent_catalog() {
    let result = load_catalog(Path::new("/nonexistent/path/12345.csv"), None);

    let err = result.unwrap_err();
    assert!(matches!(err, MatcherError::FileNotFound(_)));
    assert!(err.to_string().contains("12345.csv"));
}

/// 0以下の候補数
#[test]
fn test_invalid_top_k() {
    let err = TopK::new(0).unwrap_err();
    assert!(matches!(err, Error::InvalidTopK(0)));

    let err: MatcherError = TopK::new(-3).unwrap_err().into();
    assert!(matches!(err, MatcherError::Common(Error::InvalidTopK(-3))));
}

/// 候補数は設定でも引数でも検証される
#[test]
fn test_config_rejects_invalid_top_k() {
    let mut config = Config::default();
    assert!(config.set_default_topk(0).is_err());
    assert_eq!(config.default_topk, 5);

    assert_eq!(config.resolve_top_k(Some(TopK::new(2).unwrap())).unwrap().get(), 2);
    assert_eq!(config.resolve_top_k(None).unwrap().get(), 5);

    assert!("-1".parse::<TopK>().is_err());
}

/// 設定ファイルに0以下の候補数が書かれている場合
#[test]
fn test_config_file_with_invalid_top_k() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_topk": -1 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    let err = config.resolve_top_k(None).unwrap_err();
    assert!(matches!(err, MatcherError::Common(Error::InvalidTopK(-1))));
}

/// 壊れた設定ファイル
#[test]
fn test_broken_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, MatcherError::JsonParse(_)));
}

/// 設定ファイルがなければ既定値
#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();
    assert_eq!(config.default_topk, 5);
    assert!(config.catalog_path.is_none());
}

/// カタログ読み込みエラーのメッセージに行番号が含まれる
#[test]
fn test_catalog_error_message() {
    let err: MatcherError = Error::CatalogLoad {
        line: 42,
        reason: "missing canonical name".to_string(),
    }
    .into();

    let message = err.to_string();
    assert!(message.contains("42"));
    assert!(message.contains("missing canonical name"));
}
