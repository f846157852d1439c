use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Employee};
use crate::store::DataStore;
use crate::ui::messages::warning;
use crate::ui::prompt::ask_confirmation;
use crate::utils::number::{parse_hours, split_assignment};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Per-employee adjustments to the default day, as typed on the command line.
#[derive(Debug, Default, Clone)]
pub struct DayEntry {
    /// Names of the employees who did not come in.
    pub absent: Vec<String>,
    /// `NAME=HOURS` work hours overrides.
    pub hours: Vec<String>,
    /// `NAME=HOURS` overtime overrides.
    pub overtime: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The day was written with this many records.
    Saved(usize),
    NoEmployees,
    Cancelled,
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Record one full day of attendance for every employee on file.
    ///
    /// An existing day is replaced only after confirmation, or directly
    /// with `force`.
    pub fn record_day(
        store: &DataStore,
        cfg: &Config,
        date: NaiveDate,
        entry: &DayEntry,
        force: bool,
    ) -> AppResult<EntryOutcome> {
        let employees = store.employees.list()?;
        if employees.is_empty() {
            warning("No employees on file: nothing to record.");
            return Ok(EntryOutcome::NoEmployees);
        }

        let batch = build_batch(date, &employees, cfg, entry)?;

        if !force
            && store.attendance.exists_for_date(date)?
            && !ask_confirmation(&format!(
                "Attendance for {date} already exists. Replace it?"
            ))
        {
            return Ok(EntryOutcome::Cancelled);
        }

        store.attendance.replace_date(date, &batch)?;

        let present = batch.iter().filter(|r| r.status.is_present()).count();
        store.log.record(
            "attendance",
            &date.to_string(),
            &format!("{present} present, {} absent", batch.len() - present),
        );

        Ok(EntryOutcome::Saved(batch.len()))
    }

    /// Remove a whole day. Returns the number of records removed.
    pub fn delete_day(store: &DataStore, date: NaiveDate) -> AppResult<usize> {
        let removed = store.attendance.delete_date(date)?;
        if removed > 0 {
            store.log.record(
                "del",
                &date.to_string(),
                &format!("{removed} attendance records removed"),
            );
        }
        Ok(removed)
    }
}

/// Build the records of `date` for `employees`.
///
/// Everybody is present with the configured default hours unless listed in
/// `entry.absent`; hours overrides replace the defaults. A repeated employee
/// name yields a single record. Any name in `entry` that is not an employee
/// is rejected.
pub fn build_batch(
    date: NaiveDate,
    employees: &[Employee],
    cfg: &Config,
    entry: &DayEntry,
) -> AppResult<Vec<AttendanceRecord>> {
    let mut seen = HashSet::new();
    let names: Vec<&str> = employees
        .iter()
        .map(|e| e.name.as_str())
        .filter(|n| seen.insert(*n))
        .collect();

    let absent: HashSet<&str> = entry
        .absent
        .iter()
        .map(|n| known(&seen, n.trim()))
        .collect::<AppResult<_>>()?;

    let hours = overrides(&seen, &entry.hours, "work hours")?;
    let overtime = overrides(&seen, &entry.overtime, "overtime hours")?;

    Ok(names
        .into_iter()
        .map(|name| {
            if absent.contains(name) {
                AttendanceRecord::absent(date, name)
            } else {
                AttendanceRecord::present(
                    date,
                    name,
                    hours.get(name).copied().unwrap_or(cfg.default_work_hours),
                    overtime
                        .get(name)
                        .copied()
                        .unwrap_or(cfg.default_overtime_hours),
                )
            }
        })
        .collect())
}

fn known<'a>(names: &HashSet<&str>, name: &'a str) -> AppResult<&'a str> {
    if names.contains(name) {
        Ok(name)
    } else {
        Err(AppError::Validation(format!("unknown employee '{name}'")))
    }
}

/// Parse `NAME=HOURS` assignments. The last one for a name wins.
fn overrides<'a>(
    names: &HashSet<&str>,
    raw: &'a [String],
    field: &str,
) -> AppResult<HashMap<&'a str, u64>> {
    let mut out = HashMap::new();
    for item in raw {
        let (name, value) = split_assignment(item)?;
        let name = known(names, name)?;
        out.insert(name, parse_hours(&format!("{field} for {name}"), value)?);
    }
    Ok(out)
}
