use crate::cli::parser::{AttendanceCommand, Commands};
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, DayEntry, EntryOutcome};
use crate::errors::AppResult;
use crate::store::DataStore;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::require_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Attendance { action } = cmd else {
        return Ok(());
    };

    let store = DataStore::open(cfg.data_path())?;

    match action {
        AttendanceCommand::List { date } => list(&store, require_date(date)?)?,

        AttendanceCommand::Add {
            date,
            absent,
            hours,
            overtime,
            force,
        } => {
            let d = require_date(date)?;
            let entry = DayEntry {
                absent: absent.clone(),
                hours: hours.clone(),
                overtime: overtime.clone(),
            };

            match AttendanceLogic::record_day(&store, cfg, d, &entry, *force)? {
                EntryOutcome::Saved(n) => {
                    success(format!("Attendance for {d} saved ({n} employees)."))
                }
                EntryOutcome::Cancelled => info("Operation cancelled."),
                EntryOutcome::NoEmployees => {}
            }
        }

        AttendanceCommand::Del { date, yes } => {
            let d = require_date(date)?;

            let prompt = format!("Delete ALL attendance for {d}? This action is irreversible.");
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            match AttendanceLogic::delete_day(&store, d)? {
                0 => info(format!("No attendance recorded for {d}.")),
                n => success(format!("{n} attendance records for {d} have been deleted.")),
            }
        }
    }

    Ok(())
}

fn list(store: &DataStore, date: NaiveDate) -> AppResult<()> {
    let records = store.attendance.list_by_date(date)?;

    if records.is_empty() {
        info(format!("No attendance recorded for {date}."));
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::left("Status"),
        Column::right("Hours"),
        Column::right("Overtime"),
    ]);
    for r in &records {
        table.add_row(vec![
            r.employee_name.clone(),
            r.status.label().to_string(),
            r.work_hours.to_string(),
            r.overtime_hours.to_string(),
        ]);
    }

    header(format!("Attendance {date}"));
    print!("{}", table.render());
    Ok(())
}
