//! カタログファイルの読み込み（CSV / Excel）

use super::Catalog;
use crate::error::{MatcherError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use company_matcher_common::{parse_catalog_csv, CatalogColumns, CatalogEntry};
use std::path::Path;

/// カタログファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Excel,
}

impl CatalogFormat {
    /// 拡張子から形式を判定
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "csv" => Some(CatalogFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(CatalogFormat::Excel),
            _ => None,
        }
    }
}

/// カタログファイルを読み込む
///
/// 不正な行があれば全体をエラーにする（部分的なカタログでは動かさない）。
/// `sheet` はExcelのシート名（省略時は先頭シート）。
pub fn load_catalog(path: &Path, sheet: Option<&str>) -> Result<Catalog> {
    if !path.exists() {
        return Err(MatcherError::FileNotFound(path.display().to_string()));
    }

    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| MatcherError::UnsupportedCatalogFormat(path.display().to_string()))?;

    let entries = match format {
        CatalogFormat::Csv => {
            let content = std::fs::read_to_string(path)?;
            parse_catalog_csv(&content)?
        }
        CatalogFormat::Excel => read_excel_entries(path, sheet)?,
    };

    let catalog = Catalog::new(entries);
    tracing::info!(
        path = %path.display(),
        entries = catalog.len(),
        keys = catalog.indexed_key_count(),
        "Catalog loaded"
    );

    Ok(catalog)
}

/// Excelのシートからカタログ行を読み込む
fn read_excel_entries(path: &Path, sheet: Option<&str>) -> Result<Vec<CatalogEntry>> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| MatcherError::ExcelRead("シートがありません".into()))??,
    };

    // 範囲は最初の空でないセルから始まるので、シート上の行番号に戻す
    let header_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut rows = range.rows();
    let header: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => {
            return Err(company_matcher_common::Error::CatalogLoad {
                line: header_line,
                reason: "empty catalog (no header row)".to_string(),
            }
            .into())
        }
    };
    let columns = CatalogColumns::from_header(&header, header_line)?;

    let mut entries = Vec::new();
    for (index, row) in rows.enumerate() {
        let fields: Vec<String> = row.iter().map(cell_to_string).collect();
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        entries.push(columns.entry_from_fields(&fields, header_line + index + 1)?);
    }

    Ok(entries)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.csv")), Some(CatalogFormat::Csv));
        assert_eq!(CatalogFormat::from_path(Path::new("a.CSV")), Some(CatalogFormat::Csv));
        assert_eq!(CatalogFormat::from_path(Path::new("a.xlsx")), Some(CatalogFormat::Excel));
        assert_eq!(CatalogFormat::from_path(Path::new("a.json")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(&PathBuf::from("/nonexistent/catalog.csv"), None).unwrap_err();
        assert!(matches!(err, MatcherError::FileNotFound(_)));
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("ibm".into())), "ibm");
        assert_eq!(cell_to_string(&Data::Int(3)), "3");
    }
}
