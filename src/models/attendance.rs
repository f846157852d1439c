use super::attendance_status::AttendanceStatus;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// One employee's attendance on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,          // ⇔ attendance.Date (TEXT "YYYY-MM-DD")
    pub employee_name: String,    // ⇔ attendance.Name (weak reference to Employee.name)
    pub status: AttendanceStatus, // ⇔ attendance.Status ("Masuk" | "Tidak Masuk")
    pub work_hours: u64,          // ⇔ attendance.WorkHours
    pub overtime_hours: u64,      // ⇔ attendance.OvertimeHours
}

impl AttendanceRecord {
    /// Build a record; hours are forced to 0 when the employee is absent.
    pub fn new(
        date: NaiveDate,
        employee_name: &str,
        status: AttendanceStatus,
        work_hours: u64,
        overtime_hours: u64,
    ) -> Self {
        let (work_hours, overtime_hours) = if status.is_present() {
            (work_hours, overtime_hours)
        } else {
            (0, 0)
        };

        Self {
            date,
            employee_name: employee_name.to_string(),
            status,
            work_hours,
            overtime_hours,
        }
    }

    pub fn present(date: NaiveDate, name: &str, work_hours: u64, overtime_hours: u64) -> Self {
        Self::new(
            date,
            name,
            AttendanceStatus::Present,
            work_hours,
            overtime_hours,
        )
    }

    pub fn absent(date: NaiveDate, name: &str) -> Self {
        Self::new(date, name, AttendanceStatus::Absent, 0, 0)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Per-employee sums produced by `AttendanceStore::aggregate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceTotals {
    pub days: u64,
    pub hours: u64,
    pub overtime_hours: u64,
}

impl AttendanceTotals {
    /// Fold one Present record into the sums. Fails instead of wrapping
    /// when a sum leaves the u64 range.
    pub fn add_record(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        let overflow = || {
            AppError::Validation(format!(
                "attendance totals for '{}' do not fit in a 64-bit amount",
                record.employee_name
            ))
        };

        self.days = self.days.checked_add(1).ok_or_else(overflow)?;
        self.hours = self
            .hours
            .checked_add(record.work_hours)
            .ok_or_else(overflow)?;
        self.overtime_hours = self
            .overtime_hours
            .checked_add(record.overtime_hours)
            .ok_or_else(overflow)?;
        Ok(())
    }
}
