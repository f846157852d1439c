// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{FIRST_MONEY_COL, REPORT_HEADERS, line_numbers, validate_report};
use crate::export::notify_export_success;
use crate::models::{PayrollReportLine, ReportPeriod};
use crate::ui::messages::info;
use crate::utils::group_thousands;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const TITLE_ROW: u32 = 0;
const PERIOD_ROW: u32 = 1;
const HEADER_ROW: u32 = 3;
const FIRST_DATA_ROW: u32 = 4;
const MONEY_FORMAT: &str = "#,##0";

/// Write the payroll report as a single-sheet workbook.
///
/// Layout: title and period lines merged across the table, a blank row,
/// the header row, then one row per line. Every table cell has a thin
/// border; the name is left-aligned and the numbers right-aligned.
pub fn export_xlsx(
    report: &[PayrollReportLine],
    period: &ReportPeriod,
    title: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));
    validate_report(report)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Payroll Report").map_err(to_export_error)?;

    let last_col = (REPORT_HEADERS.len() - 1) as u16;

    // ---------------------------
    // Title + period
    // ---------------------------
    let title_format = Format::new()
        .set_bold()
        .set_font_size(14.0)
        .set_align(FormatAlign::Center);
    let period_format = Format::new().set_align(FormatAlign::Center);

    worksheet
        .merge_range(TITLE_ROW, 0, TITLE_ROW, last_col, title, &title_format)
        .map_err(to_export_error)?;
    worksheet
        .merge_range(
            PERIOD_ROW,
            0,
            PERIOD_ROW,
            last_col,
            &format!("Period: {}", period.display()),
            &period_format,
        )
        .map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(HEADER_ROW, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    // ---------------------------
    // Rows
    // ---------------------------
    let name_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_border(FormatBorder::Thin);
    let count_format = Format::new()
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);
    let money_format = count_format.clone().set_num_format(MONEY_FORMAT);

    for (i, line) in report.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;

        worksheet
            .write_string_with_format(row, 0, &line.employee_name, &name_format)
            .map_err(to_export_error)?;

        for (j, value) in line_numbers(line).iter().enumerate() {
            let col = j + 1;
            let format = if col >= FIRST_MONEY_COL {
                &money_format
            } else {
                &count_format
            };
            write_number(worksheet, row, col as u16, *value, format)?;
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in column_widths(report).iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Longest rendered value per column, header included. Money is measured
/// as displayed by the `#,##0` format.
pub fn column_widths(report: &[PayrollReportLine]) -> Vec<usize> {
    let mut widths: Vec<usize> = REPORT_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for line in report {
        widths[0] = widths[0].max(UnicodeWidthStr::width(line.employee_name.as_str()));

        for (j, value) in line_numbers(line).iter().enumerate() {
            let col = j + 1;
            let rendered = if col >= FIRST_MONEY_COL {
                group_thousands(*value, ",")
            } else {
                value.to_string()
            };
            widths[col] = widths[col].max(rendered.len());
        }
    }

    widths
}

fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: u64,
    format: &Format,
) -> AppResult<()> {
    worksheet
        .write_number_with_format(row, col, value as f64, format)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
