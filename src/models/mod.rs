pub mod attendance;
pub mod attendance_status;
pub mod employee;
pub mod log_entry;
pub mod payroll;

pub use attendance::{AttendanceRecord, AttendanceTotals};
pub use attendance_status::AttendanceStatus;
pub use employee::Employee;
pub use log_entry::LogEntry;
pub use payroll::{PayrollReportLine, ReportPeriod};
