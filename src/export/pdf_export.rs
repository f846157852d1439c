// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{REPORT_HEADERS, report_to_table, validate_report};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::{PayrollReportLine, ReportPeriod};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF using PdfManager and the rendered report table.
pub(crate) fn export_pdf(
    report: &[PayrollReportLine],
    period: &ReportPeriod,
    title: &str,
    thousands_separator: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));
    validate_report(report)?;

    let rows = report_to_table(report, thousands_separator);
    // every column but the name is numeric
    let right_aligned: Vec<bool> = (0..REPORT_HEADERS.len()).map(|i| i > 0).collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(
        title,
        &format!("Period: {}", period.display()),
        &REPORT_HEADERS,
        &rows,
        &right_aligned,
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
