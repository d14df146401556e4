//! 社名カタログ（参照辞書）の行データ
//!
//! 別名（alternate title）→ 正式名称（canonical name）の対応表。
//! CSVの読み込みと列の解決を行う。インデックス構築はCLI側の `catalog` モジュール。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 別名列として受け付けるヘッダー名
const ALTERNATE_HEADERS: &[&str] = &["alternate_title", "alternatetitle", "alternate"];

/// 正式名称列として受け付けるヘッダー名
const CANONICAL_HEADERS: &[&str] = &[
    "title",
    "realname",
    "canonical_name",
    "canonicalname",
];

/// カタログの1行
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// 別名（入力側の表記）
    pub alternate_title: String,
    /// 正式名称（表示用）
    pub canonical_name: String,
}

impl CatalogEntry {
    pub fn new(alternate_title: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        Self {
            alternate_title: alternate_title.into(),
            canonical_name: canonical_name.into(),
        }
    }
}

/// ヘッダー行から解決した列位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogColumns {
    pub alternate: usize,
    pub canonical: usize,
}

impl CatalogColumns {
    /// ヘッダー行から必須列を探す（大文字小文字・前後空白は無視）
    ///
    /// `line` はヘッダー行の行番号（1始まり）。エラー報告に使う。
    pub fn from_header<S: AsRef<str>>(header: &[S], line: usize) -> Result<Self> {
        let find = |names: &[&str]| {
            header.iter().position(|h| {
                let h = h.as_ref().trim().trim_start_matches('\u{feff}').to_lowercase();
                names.contains(&h.as_str())
            })
        };

        let alternate = find(ALTERNATE_HEADERS).ok_or_else(|| Error::CatalogLoad {
            line,
            reason: format!("missing alternate title column (expected one of {:?})", ALTERNATE_HEADERS),
        })?;
        let canonical = find(CANONICAL_HEADERS).ok_or_else(|| Error::CatalogLoad {
            line,
            reason: format!("missing canonical name column (expected one of {:?})", CANONICAL_HEADERS),
        })?;

        Ok(Self { alternate, canonical })
    }

    /// データ行を `CatalogEntry` に変換（必須フィールドの欠落はエラー）
    pub fn entry_from_fields<S: AsRef<str>>(&self, fields: &[S], line: usize) -> Result<CatalogEntry> {
        let field = |index: usize, what: &str| -> Result<String> {
            let value = fields
                .get(index)
                .map(|f| f.as_ref().trim())
                .unwrap_or_default();
            if value.is_empty() {
                return Err(Error::CatalogLoad {
                    line,
                    reason: format!("missing {}", what),
                });
            }
            Ok(value.to_string())
        };

        Ok(CatalogEntry {
            alternate_title: field(self.alternate, "alternate title")?,
            canonical_name: field(self.canonical, "canonical name")?,
        })
    }
}

/// CSV文字列からカタログ行を読み込む
///
/// 1行目はヘッダー。空行は読み飛ばす。不正な行が1つでもあれば全体をエラーにする。
pub fn parse_catalog_csv(content: &str) -> Result<Vec<CatalogEntry>> {
    let mut lines = content.lines().enumerate();

    let (header_line, header) = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((index, line)) => break (index + 1, parse_csv_line(line)),
            None => {
                return Err(Error::CatalogLoad {
                    line: 1,
                    reason: "empty catalog (no header row)".to_string(),
                })
            }
        }
    };
    let columns = CatalogColumns::from_header(&header, header_line)?;

    let mut entries = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_csv_line(line);
        entries.push(columns.entry_from_fields(&fields, index + 1)?);
    }

    Ok(entries)
}

/// CSV行をパース（ダブルクォートと `""` エスケープ対応）
fn parse_csv_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = r#"alternate_title,title
ibm,IBM Latin America
"ibm mexico","IBM Latin America"
acme,Acme Inc
acme,Acme Holdings
"#;

    #[test]
    fn test_parse_catalog_csv() {
        let entries = parse_catalog_csv(TEST_CSV).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], CatalogEntry::new("ibm", "IBM Latin America"));
        assert_eq!(entries[1], CatalogEntry::new("ibm mexico", "IBM Latin America"));
    }

    #[test]
    fn test_duplicate_alternate_titles_are_kept() {
        let entries = parse_catalog_csv(TEST_CSV).unwrap();
        let acme: Vec<_> = entries.iter().filter(|e| e.alternate_title == "acme").collect();
        assert_eq!(acme.len(), 2);
        assert_eq!(acme[0].canonical_name, "Acme Inc");
        assert_eq!(acme[1].canonical_name, "Acme Holdings");
    }

    #[test]
    fn test_header_aliases_and_column_order() {
        let csv = "id,realName,Alternate_Title\n1,Globex Corporation,globex\n";
        let entries = parse_catalog_csv(csv).unwrap();
        assert_eq!(entries, vec![CatalogEntry::new("globex", "Globex Corporation")]);
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "alternate_title,name\nibm,IBM\n";
        let err = parse_catalog_csv(csv).unwrap_err();
        assert!(matches!(err, Error::CatalogLoad { line: 1, .. }));
    }

    #[test]
    fn test_missing_column_reports_header_line() {
        let csv = "\n\nalternate_title,name\nibm,IBM\n";
        let err = parse_catalog_csv(csv).unwrap_err();
        assert!(matches!(err, Error::CatalogLoad { line: 3, .. }));
    }

    #[test]
    fn test_leading_blank_lines_keep_row_numbers() {
        let csv = "\nalternate_title,title\nibm,IBM\nglobex,\n";
        let err = parse_catalog_csv(csv).unwrap_err();
        assert!(matches!(err, Error::CatalogLoad { line: 4, .. }));
    }

    #[test]
    fn test_missing_field_reports_line() {
        let csv = "alternate_title,title\nibm,IBM\nglobex,\n";
        let err = parse_catalog_csv(csv).unwrap_err();
        match err {
            Error::CatalogLoad { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("canonical name"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_error() {
        let csv = "alternate_title,title\nibm\n";
        assert!(matches!(
            parse_catalog_csv(csv),
            Err(Error::CatalogLoad { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_error() {
        assert!(parse_catalog_csv("").is_err());
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let csv = "alternate_title,title\r\n\r\nibm,IBM\r\n";
        let entries = parse_catalog_csv(csv).unwrap();
        assert_eq!(entries, vec![CatalogEntry::new("ibm", "IBM")]);
    }

    #[test]
    fn test_parse_csv_line_quotes() {
        assert_eq!(
            parse_csv_line(r#""procter, gamble","Procter & Gamble""#),
            vec!["procter, gamble", "Procter & Gamble"]
        );
        assert_eq!(
            parse_csv_line(r#"toys,"""R"" Us""#),
            vec!["toys", "\"R\" Us"]
        );
        assert_eq!(parse_csv_line("a,,c"), vec!["a", "", "c"]);
    }
}
