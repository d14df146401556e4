use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないカタログ形式です: {0}（.csv / .xlsx / .xls / .ods に対応）")]
    UnsupportedCatalogFormat(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelExport(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] company_matcher_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for MatcherError {
    fn from(e: calamine::Error) -> Self {
        MatcherError::ExcelRead(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for MatcherError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        MatcherError::ExcelExport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
