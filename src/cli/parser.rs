use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPayroll
/// CLI application to keep employees, daily attendance and payroll reports
#[derive(Parser)]
#[command(
    name = "rpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small business record-keeper: employees, daily attendance and payroll reports",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second company)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file and add any missing fields"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeCommand,
    },

    /// Record or inspect daily attendance
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommand,
    },

    /// Print the payroll report for a period
    Payroll {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Period as year/month/day or a custom range (default: last days from config)"
        )]
        range: Option<String>,
    },

    /// Export the payroll report
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Period as year/month/day or a custom range (default: last days from config)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data files
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a single .zip archive instead of a directory")]
        compress: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// List all employees
    List,

    /// Add an employee
    Add {
        name: String,

        #[arg(long = "base", value_name = "RATE", help = "Hourly base rate")]
        base: String,

        #[arg(long = "overtime", value_name = "RATE", help = "Hourly overtime rate")]
        overtime: String,
    },

    /// Change an employee's name or rates
    Edit {
        name: String,

        #[arg(long = "name", value_name = "NEW_NAME", help = "New name")]
        new_name: Option<String>,

        #[arg(long = "base", value_name = "RATE")]
        base: Option<String>,

        #[arg(long = "overtime", value_name = "RATE")]
        overtime: Option<String>,
    },

    /// Remove an employee (attendance records are kept)
    Del {
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum AttendanceCommand {
    /// Show the attendance recorded for a date
    List {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Record the attendance of every employee for a date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "absent", value_name = "NAME", help = "Employee who did not come in")]
        absent: Vec<String>,

        #[arg(long = "hours", value_name = "NAME=H", help = "Work hours for one employee")]
        hours: Vec<String>,

        #[arg(
            long = "overtime",
            value_name = "NAME=H",
            help = "Overtime hours for one employee"
        )]
        overtime: Vec<String>,

        #[arg(long, short = 'f', help = "Replace an existing day without asking")]
        force: bool,
    },

    /// Delete all attendance recorded for a date
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
