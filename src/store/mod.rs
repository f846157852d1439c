//! File-backed data store: two spreadsheet tables plus the internal log.

pub mod attendance;
pub mod employees;
pub mod log;
pub mod table;

pub use attendance::AttendanceStore;
pub use employees::EmployeeStore;
pub use log::AuditLog;

use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};
use table::Table;

pub const EMPLOYEES_FILE: &str = "employees.csv";
pub const ATTENDANCE_FILE: &str = "attendance.csv";
pub const LOG_FILE: &str = "log.csv";

/// Handle on a data directory.
///
/// Opening the directory creates it, and creates any missing table with its
/// header row. Existing files are left untouched.
pub struct DataStore {
    dir: PathBuf,
    pub employees: EmployeeStore,
    pub attendance: AttendanceStore,
    pub log: AuditLog,
}

impl DataStore {
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let attendance = AttendanceStore::new(dir.join(ATTENDANCE_FILE));
        let employees = EmployeeStore::new(dir.join(EMPLOYEES_FILE), attendance.clone());
        let log = AuditLog::new(dir.join(LOG_FILE));

        let store = Self {
            dir,
            employees,
            attendance,
            log,
        };

        for table in store.tables() {
            table.ensure()?;
        }

        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The files making up this store, in backup order.
    pub fn files(&self) -> Vec<PathBuf> {
        self.tables()
            .iter()
            .map(|t| t.path().to_path_buf())
            .collect()
    }

    fn tables(&self) -> [&Table; 3] {
        [
            self.employees.table(),
            self.attendance.table(),
            self.log.table(),
        ]
    }
}
