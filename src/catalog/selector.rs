//! カタログファイルの一覧・対話式選択

use super::CatalogFormat;
use crate::error::{MatcherError, Result};
use dialoguer::Select;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// カタログ置き場の既定ディレクトリ
pub const DEFAULT_CATALOG_DIR: &str = "data";

/// ディレクトリ配下（2階層まで）のカタログファイル一覧を取得
pub fn list_available_catalogs(dir: &Path) -> Vec<(String, PathBuf)> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut catalogs: Vec<(String, PathBuf)> = WalkDir::new(dir)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| CatalogFormat::from_path(e.path()).is_some())
        .map(|e| {
            let name = e
                .path()
                .strip_prefix(dir)
                .unwrap_or(e.path())
                .display()
                .to_string();
            (name, e.path().to_path_buf())
        })
        .collect();

    // 名前でソート
    catalogs.sort_by(|a, b| a.0.cmp(&b.0));
    catalogs
}

/// 対話式でカタログを選択
///
/// 候補がなければ `None`。
pub fn select_catalog_interactive(dir: &Path) -> Result<Option<PathBuf>> {
    let catalogs = list_available_catalogs(dir);

    if catalogs.is_empty() {
        println!("⚠ {} にカタログファイルがありません", dir.display());
        return Ok(None);
    }

    if catalogs.len() == 1 {
        let (name, path) = &catalogs[0];
        println!("→ {} を使用", name);
        return Ok(Some(path.clone()));
    }

    let items: Vec<String> = catalogs
        .iter()
        .map(|(name, path)| match count_csv_rows(path) {
            Some(count) => format!("{} ({}件)", name, count),
            None => name.clone(),
        })
        .collect();

    let choice = Select::new()
        .with_prompt("カタログを選択してください")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| MatcherError::Prompt(e.to_string()))?;

    let (name, path) = &catalogs[choice];
    println!("→ {} を使用", name);
    Ok(Some(path.clone()))
}

/// CSVの行数を取得（ヘッダー除く）。CSV以外は `None`
pub fn count_csv_rows(path: &Path) -> Option<usize> {
    if CatalogFormat::from_path(path) != Some(CatalogFormat::Csv) {
        return None;
    }
    std::fs::read_to_string(path)
        .map(|content| {
            content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .count()
                .saturating_sub(1)
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_missing_dir() {
        assert!(list_available_catalogs(Path::new("/nonexistent/dir/12345")).is_empty());
    }

    #[test]
    fn test_list_catalogs_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("processed")).unwrap();
        fs::write(dir.path().join("b.csv"), "alternate_title,title\n").unwrap();
        fs::write(dir.path().join("a.xlsx"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("processed").join("c.csv"), "alternate_title,title\n").unwrap();

        let catalogs = list_available_catalogs(dir.path());
        let names: Vec<&str> = catalogs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "a.xlsx");
        assert_eq!(names[1], "b.csv");
        assert!(names[2].ends_with("c.csv"));
    }

    #[test]
    fn test_count_csv_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(&path, "alternate_title,title\nibm,IBM\nacme,Acme\n\n").unwrap();
        assert_eq!(count_csv_rows(&path), Some(2));
        assert_eq!(count_csv_rows(&dir.path().join("catalog.xlsx")), None);
    }
}
