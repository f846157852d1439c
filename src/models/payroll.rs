use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive date range a payroll report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportPeriod {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// "dd/mm/yyyy - dd/mm/yyyy", as printed on exported reports.
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.from.format("%d/%m/%Y"),
            self.to.format("%d/%m/%Y")
        )
    }
}

/// One row of a payroll report. Derived on demand, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayrollReportLine {
    pub employee_name: String,
    pub total_days: u64,
    pub total_hours: u64,
    pub total_overtime_hours: u64,
    pub base_pay: u64,
    pub overtime_pay: u64,
    pub total_pay: u64,
}
