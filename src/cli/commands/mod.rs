pub mod attendance;
pub mod backup;
pub mod config;
pub mod employee;
pub mod export;
pub mod init;
pub mod log;
pub mod payroll;
