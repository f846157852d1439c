use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceTotals, ReportPeriod};
use crate::store::table::{RawRow, Table};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

pub const ATTENDANCE_HEADERS: &[&str] = &["Date", "Name", "Status", "WorkHours", "OvertimeHours"];

/// Per-day, per-employee attendance log.
#[derive(Debug, Clone)]
pub struct AttendanceStore {
    table: Table,
}

impl AttendanceStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: Table::new(path, ATTENDANCE_HEADERS),
        }
    }

    pub(crate) fn table(&self) -> &Table {
        &self.table
    }

    /// Every record in file order.
    pub fn list_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.table
            .read()?
            .iter()
            .map(|row| self.map_row(row))
            .collect()
    }

    pub fn list_by_date(&self, date: NaiveDate) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| r.date == date)
            .collect())
    }

    pub fn exists_for_date(&self, date: NaiveDate) -> AppResult<bool> {
        Ok(self.list_all()?.iter().any(|r| r.date == date))
    }

    /// Drop every record of `date` and append `records` in their place.
    ///
    /// This is the only write path for attendance entry: callers pass the
    /// full day's batch. Every record must carry `date` and name a distinct
    /// employee.
    pub fn replace_date(&self, date: NaiveDate, records: &[AttendanceRecord]) -> AppResult<()> {
        let mut seen = HashSet::new();
        for r in records {
            if r.date != date {
                return Err(AppError::Validation(format!(
                    "record for '{}' is dated {} but the batch is for {}",
                    r.employee_name, r.date, date
                )));
            }
            if !seen.insert(r.employee_name.as_str()) {
                return Err(AppError::Validation(format!(
                    "'{}' appears twice in the batch for {}",
                    r.employee_name, date
                )));
            }
        }

        let mut all = self.list_all()?;
        remove_date(&mut all, date);
        all.extend(records.iter().cloned());

        self.write_all(&all)
    }

    /// Remove every record of `date`. Returns how many were removed.
    pub fn delete_date(&self, date: NaiveDate) -> AppResult<usize> {
        let mut all = self.list_all()?;
        let removed = remove_date(&mut all, date);
        self.write_all(&all)?;
        Ok(removed)
    }

    /// Point every record of `old_name` at `new_name`. Returns how many
    /// records changed.
    pub fn rename_employee(&self, old_name: &str, new_name: &str) -> AppResult<usize> {
        let mut all = self.list_all()?;
        let mut changed = 0;

        for r in all.iter_mut().filter(|r| r.employee_name == old_name) {
            r.employee_name = new_name.to_string();
            changed += 1;
        }

        self.write_all(&all)?;
        Ok(changed)
    }

    /// Sum days, hours and overtime per employee over `from..=to`.
    ///
    /// Only Present records of employees in `names` count. Absent records
    /// contribute nothing, whatever hours they carry on disk.
    pub fn aggregate(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        names: &HashSet<String>,
    ) -> AppResult<HashMap<String, AttendanceTotals>> {
        let mut totals: HashMap<String, AttendanceTotals> = HashMap::new();

        let period = ReportPeriod::new(from, to);

        for r in self.list_all()? {
            if period.contains(r.date)
                && r.status.is_present()
                && names.contains(&r.employee_name)
            {
                totals
                    .entry(r.employee_name.clone())
                    .or_default()
                    .add_record(&r)?;
            }
        }

        Ok(totals)
    }

    fn write_all(&self, records: &[AttendanceRecord]) -> AppResult<()> {
        self.table.rewrite(records.iter().map(|r| {
            [
                r.date_str(),
                r.employee_name.clone(),
                r.status.to_db_str().to_string(),
                r.work_hours.to_string(),
                r.overtime_hours.to_string(),
            ]
        }))
    }

    /// Mapping spreadsheet row → AttendanceRecord.
    ///
    /// Stored hours are kept verbatim, even on Absent rows.
    fn map_row(&self, row: &RawRow) -> AppResult<AttendanceRecord> {
        let date_raw = row.field(0);
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            self.table
                .malformed(row.line, format!("Date must be YYYY-MM-DD, found '{date_raw}'"))
        })?;

        let status_raw = row.field(2);
        let status = AttendanceStatus::from_db_str(status_raw).ok_or_else(|| {
            self.table
                .malformed(row.line, format!("unknown Status '{status_raw}'"))
        })?;

        Ok(AttendanceRecord {
            date,
            employee_name: row.field(1).to_string(),
            status,
            work_hours: self.table.parse_u64(row, 3)?,
            overtime_hours: self.table.parse_u64(row, 4)?,
        })
    }
}

/// Remove the records of `date`, collecting positions top-to-bottom and
/// deleting from the last one backwards so earlier positions stay valid.
fn remove_date(records: &mut Vec<AttendanceRecord>, date: NaiveDate) -> usize {
    let positions: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.date == date)
        .map(|(i, _)| i)
        .collect();

    for &idx in positions.iter().rev() {
        records.remove(idx);
    }

    positions.len()
}
