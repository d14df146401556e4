//! 照合結果のExcelレポート
//!
//! 1行1社。先頭に最良候補、その右に上位K件の候補とスコアを並べる。

use crate::error::Result;
use company_matcher_common::MatchResult;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "matches";
const FIXED_HEADERS: &[&str] = &["id", "name", "realName", "accuracy"];

/// Excelの最大列数（16,384）に収まる候補列の数
const MAX_CANDIDATE_COLUMNS: usize = (16_384 - FIXED_HEADERS.len()) / 2;

/// 候補列の数（実際に返った候補数の最大値。`top_k` とシートの列数で頭打ち）
fn candidate_columns(results: &[MatchResult], top_k: usize) -> usize {
    results
        .iter()
        .map(|r| r.top_k.len())
        .max()
        .unwrap_or(0)
        .min(top_k)
        .clamp(1, MAX_CANDIDATE_COLUMNS)
}

pub fn generate_excel(results: &[MatchResult], output_path: &Path, top_k: usize) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let title_format = Format::new().set_bold().set_font_size(13);
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xD9E1F2));
    let not_found_format = Format::new().set_font_color(Color::Gray);

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    worksheet.write_string_with_format(
        0,
        0,
        format!("社名照合結果 ({}件, {})", results.len(), generated),
        &title_format,
    )?;

    // ヘッダー
    let header_row = 2;
    let width = candidate_columns(results, top_k);
    for (col, header) in FIXED_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(header_row, col as u16, *header, &header_format)?;
    }
    for i in 0..width {
        let col = (FIXED_HEADERS.len() + i * 2) as u16;
        worksheet.write_string_with_format(header_row, col, format!("候補{}", i + 1), &header_format)?;
        worksheet.write_string_with_format(header_row, col + 1, format!("スコア{}", i + 1), &header_format)?;
    }

    // データ
    for (i, result) in results.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        worksheet.write_string(row, 0, result.id.as_str())?;
        worksheet.write_string(row, 1, result.raw_name.as_str())?;
        if result.is_not_found() {
            worksheet.write_string_with_format(row, 2, result.best_canonical_name.as_str(), &not_found_format)?;
        } else {
            worksheet.write_string(row, 2, result.best_canonical_name.as_str())?;
        }
        worksheet.write_number(row, 3, result.best_score)?;

        for (j, candidate) in result.top_k.iter().take(width).enumerate() {
            let col = (FIXED_HEADERS.len() + j * 2) as u16;
            worksheet.write_string(row, col, candidate.canonical_name.as_str())?;
            worksheet.write_number(row, col + 1, candidate.score)?;
        }
    }

    worksheet.set_column_width(0, 16)?;
    worksheet.set_column_width(1, 36)?;
    worksheet.set_column_width(2, 36)?;
    worksheet.set_freeze_panes(header_row + 1, 0)?;

    workbook.save(output_path)?;
    Ok(())
}
