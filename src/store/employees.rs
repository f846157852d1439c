use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::store::attendance::AttendanceStore;
use crate::store::table::Table;
use std::path::PathBuf;

pub const EMPLOYEE_HEADERS: &[&str] = &["Name", "BaseRate", "OvertimeRate"];

/// Persisted list of employees and their rates.
///
/// Names are not required to be unique. Every lookup by name (update,
/// delete, find) acts on the first matching row.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    table: Table,
    attendance: AttendanceStore,
}

impl EmployeeStore {
    /// `attendance` receives the cascading rename when an employee's name
    /// changes.
    pub fn new(path: PathBuf, attendance: AttendanceStore) -> Self {
        Self {
            table: Table::new(path, EMPLOYEE_HEADERS),
            attendance,
        }
    }

    pub(crate) fn table(&self) -> &Table {
        &self.table
    }

    /// All employees in file order. Rows without a name are skipped.
    pub fn list(&self) -> AppResult<Vec<Employee>> {
        let mut out = Vec::new();

        for row in self.table.read()? {
            let name = row.field(0);
            if name.is_empty() {
                continue;
            }

            out.push(Employee {
                name: name.to_string(),
                base_rate: self.table.parse_u64(&row, 1)?,
                overtime_rate: self.table.parse_u64(&row, 2)?,
            });
        }

        Ok(out)
    }

    pub fn find(&self, name: &str) -> AppResult<Option<Employee>> {
        Ok(self.list()?.into_iter().find(|e| e.name == name))
    }

    /// Append `employee` as a new last row.
    pub fn add(&self, employee: &Employee) -> AppResult<()> {
        self.table.append(employee_row(employee))
    }

    /// Overwrite the first employee named `old_name`. A name change is
    /// carried over to every attendance record of the old name.
    ///
    /// Every other row, nameless ones included, is written back as read.
    pub fn update(&self, old_name: &str, new: &Employee) -> AppResult<()> {
        let mut rows = self.raw_rows()?;
        let idx = first_named(&rows, old_name)?;
        rows[idx] = employee_row(new).to_vec();

        self.table.rewrite(rows)?;

        if new.name != old_name {
            self.attendance.rename_employee(old_name, &new.name)?;
        }

        Ok(())
    }

    /// Remove the first employee named `name`. Attendance rows are kept.
    pub fn delete(&self, name: &str) -> AppResult<()> {
        let mut rows = self.raw_rows()?;
        let idx = first_named(&rows, name)?;
        rows.remove(idx);

        self.table.rewrite(rows)
    }

    fn raw_rows(&self) -> AppResult<Vec<Vec<String>>> {
        Ok(self
            .table
            .read()?
            .iter()
            .map(|row| row.record.iter().map(str::to_string).collect())
            .collect())
    }
}

fn employee_row(e: &Employee) -> [String; 3] {
    [
        e.name.clone(),
        e.base_rate.to_string(),
        e.overtime_rate.to_string(),
    ]
}

fn first_named(rows: &[Vec<String>], name: &str) -> AppResult<usize> {
    rows.iter()
        .position(|row| !name.is_empty() && row.first().is_some_and(|n| n == name))
        .ok_or_else(|| AppError::EmployeeNotFound(name.to_string()))
}
