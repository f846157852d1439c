// src/export/model.rs

use crate::errors::{AppError, AppResult};
use crate::models::{PayrollReportLine, ReportPeriod};
use crate::utils::group_thousands;
use serde::Serialize;

/// The seven fixed report columns, in order.
pub(crate) const REPORT_HEADERS: [&str; 7] = [
    "Name",
    "Total Days",
    "Total Hours",
    "Total Overtime Hours",
    "Base Pay",
    "Overtime Pay",
    "Total Pay",
];

/// Index of the first money column; every column from here on is money.
pub(crate) const FIRST_MONEY_COL: usize = 4;

/// JSON document: the period plus the lines.
#[derive(Serialize, Debug)]
pub(crate) struct ReportDocument<'a> {
    pub title: &'a str,
    pub period: ReportPeriod,
    pub lines: &'a [PayrollReportLine],
}

/// Numeric cells of a line, in column order (skips the name).
pub(crate) fn line_numbers(l: &PayrollReportLine) -> [u64; 6] {
    [
        l.total_days,
        l.total_hours,
        l.total_overtime_hours,
        l.base_pay,
        l.overtime_pay,
        l.total_pay,
    ]
}

/// Render a line as text cells; money gets thousands separators.
pub(crate) fn line_to_row(l: &PayrollReportLine, sep: &str) -> Vec<String> {
    let mut row = vec![l.employee_name.clone()];
    for (i, n) in line_numbers(l).iter().enumerate() {
        if i + 1 >= FIRST_MONEY_COL {
            row.push(group_thousands(*n, sep));
        } else {
            row.push(n.to_string());
        }
    }
    row
}

pub(crate) fn report_to_table(report: &[PayrollReportLine], sep: &str) -> Vec<Vec<String>> {
    report.iter().map(|l| line_to_row(l, sep)).collect()
}

/// Refuse reports whose lines do not add up.
pub(crate) fn validate_report(report: &[PayrollReportLine]) -> AppResult<()> {
    for l in report {
        if l.employee_name.trim().is_empty() {
            return Err(AppError::Export(
                "report line without employee name".to_string(),
            ));
        }
        if l.base_pay.checked_add(l.overtime_pay) != Some(l.total_pay) {
            return Err(AppError::Export(format!(
                "report line for '{}' has total pay {} but base {} + overtime {}",
                l.employee_name, l.total_pay, l.base_pay, l.overtime_pay
            )));
        }
    }
    Ok(())
}
