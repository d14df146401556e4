pub mod excel;

use crate::cli::OutputFormat;
use crate::error::Result;
use company_matcher_common::{MatchResponse, MatchResult};
use std::path::{Path, PathBuf};

/// 入力ファイルから既定の出力パスを作る（`queries.json` → `queries.matched.json`）
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("companies");
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}.matched.json", stem))
}

fn with_extension(output: &Path, extension: &str) -> PathBuf {
    output.with_extension(extension)
}

/// レスポンスをJSONで保存
pub fn write_json(results: &[MatchResult], output_path: &Path) -> Result<()> {
    let response = MatchResponse {
        companies: results.to_vec(),
    };
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&response)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

/// 指定形式で書き出し、書き出したパスを返す
pub fn export_results(
    results: &[MatchResult],
    format: &OutputFormat,
    output: &Path,
    top_k: usize,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, OutputFormat::Json | OutputFormat::Both) {
        let json_path = with_extension(output, "json");
        println!("- JSONを保存中...");
        write_json(results, &json_path)?;
        println!("✔ JSON出力: {}", json_path.display());
        written.push(json_path);
    }

    if matches!(format, OutputFormat::Excel | OutputFormat::Both) {
        let excel_path = with_extension(output, "xlsx");
        println!("- Excelを生成中...");
        excel::generate_excel(results, &excel_path, top_k)?;
        println!("✔ Excel出力: {}", excel_path.display());
        written.push(excel_path);
    }

    Ok(written)
}
