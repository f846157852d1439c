// src/export/logic.rs

use crate::config::Config;
use crate::core::payroll::PayrollCalculator;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, with_default_extension};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::ReportPeriod;
use crate::store::DataStore;
use crate::ui::messages::warning;
use crate::utils::date::{today, trailing_period};
use std::path::PathBuf;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Generate the payroll report for `range` and write it to `file`.
    ///
    /// - `format`: xlsx | csv | json | pdf
    /// - `file`: output path; the format's extension is added when missing
    /// - `range`: `None` (last `default_period_days` days) or any
    ///   expression accepted by `parse_range`
    ///
    /// Returns the path actually written.
    pub fn export(
        store: &DataStore,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = with_default_extension(file, format.as_str());

        ensure_writable(&path, force)?;

        let period = resolve_period(range, cfg)?;

        let report = PayrollCalculator::new(&store.employees, &store.attendance)
            .generate_report(period.from, period.to)?;

        if report.is_empty() {
            warning("No employees on file: the report has no lines.");
        }

        let title = cfg.report_heading();

        match format {
            ExportFormat::Xlsx => export_xlsx(&report, &period, &title, &path)?,
            ExportFormat::Csv => export_csv(&report, &path)?,
            ExportFormat::Json => export_json(&report, &period, &title, &path)?,
            ExportFormat::Pdf => {
                export_pdf(&report, &period, &title, &cfg.thousands_separator, &path)?
            }
        }

        store.log.record(
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} report for {} ({} lines)",
                format.as_str(),
                period.display(),
                report.len()
            ),
        );

        Ok(path)
    }
}

/// Period from a `--range` expression, or the trailing default window
/// ending today.
pub fn resolve_period(range: &Option<String>, cfg: &Config) -> AppResult<ReportPeriod> {
    match range {
        Some(r) => parse_range(r),
        None => {
            let (from, to) = trailing_period(today(), cfg.default_period_days)?;
            Ok(ReportPeriod::new(from, to))
        }
    }
}
