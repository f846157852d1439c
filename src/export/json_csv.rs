// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{REPORT_HEADERS, ReportDocument, line_numbers, validate_report};
use crate::export::notify_export_success;
use crate::models::{PayrollReportLine, ReportPeriod};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, with title and period alongside the lines.
pub(crate) fn export_json(
    report: &[PayrollReportLine],
    period: &ReportPeriod,
    title: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));
    validate_report(report)?;

    let doc = ReportDocument {
        title,
        period: *period,
        lines: report,
    };

    let json_data = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the same seven columns as the spreadsheet report.
/// Amounts are written as plain integers.
pub(crate) fn export_csv(report: &[PayrollReportLine], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));
    validate_report(report)?;

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(REPORT_HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for line in report {
        let mut row = vec![line.employee_name.clone()];
        row.extend(line_numbers(line).iter().map(u64::to_string));
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
