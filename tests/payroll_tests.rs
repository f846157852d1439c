use chrono::NaiveDate;
use rpayroll::core::payroll::{PayrollCalculator, report_totals};
use rpayroll::errors::AppError;
use rpayroll::models::{AttendanceRecord, Employee};
use rpayroll::store::DataStore;
use std::path::PathBuf;

mod common;
use common::setup_data_dir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn store_with(name: &str, employees: &[(&str, u64, u64)]) -> DataStore {
    let store = DataStore::open(PathBuf::from(setup_data_dir(name))).expect("open store");
    for (n, base, overtime) in employees {
        store
            .employees
            .add(&Employee::new(n, *base, *overtime).unwrap())
            .unwrap();
    }
    store
}

#[test]
fn test_single_day_pay() {
    let store = store_with("payroll_single_day_lib", &[("Ani", 20000, 5000)]);
    let day = d(2024, 3, 4);
    store
        .attendance
        .replace_date(day, &[AttendanceRecord::present(day, "Ani", 8, 2)])
        .unwrap();

    let report = PayrollCalculator::new(&store.employees, &store.attendance)
        .generate_report(day, day)
        .unwrap();

    assert_eq!(report.len(), 1);
    let line = &report[0];
    assert_eq!(line.employee_name, "Ani");
    assert_eq!(
        (line.total_days, line.total_hours, line.total_overtime_hours),
        (1, 8, 2)
    );
    assert_eq!(line.base_pay, 160000);
    assert_eq!(line.overtime_pay, 10000);
    assert_eq!(line.total_pay, 170000);
}

#[test]
fn test_every_employee_is_reported_in_file_order() {
    let store = store_with(
        "payroll_file_order",
        &[("Citra", 22000, 6000), ("Ani", 20000, 5000), ("Budi", 18000, 4000)],
    );
    let day = d(2024, 3, 4);
    store
        .attendance
        .replace_date(
            day,
            &[
                AttendanceRecord::present(day, "Ani", 8, 0),
                AttendanceRecord::absent(day, "Budi"),
            ],
        )
        .unwrap();

    let report = PayrollCalculator::new(&store.employees, &store.attendance)
        .generate_report(d(2024, 3, 1), d(2024, 3, 31))
        .unwrap();

    let names: Vec<&str> = report.iter().map(|l| l.employee_name.as_str()).collect();
    assert_eq!(names, ["Citra", "Ani", "Budi"]);
    assert_eq!(report[0].total_pay, 0);
    assert_eq!(report[2].total_days, 0);

    for l in &report {
        assert_eq!(l.total_pay, l.base_pay + l.overtime_pay);
    }

    let total = report_totals(&report);
    assert_eq!(total.employee_name, "TOTAL");
    assert_eq!(total.total_pay, 160000);
}

#[test]
fn test_no_employees_no_lines() {
    let store = store_with("payroll_empty", &[]);
    let day = d(2024, 3, 4);
    store
        .attendance
        .replace_date(day, &[AttendanceRecord::present(day, "Ghost", 8, 0)])
        .unwrap();

    let report = PayrollCalculator::new(&store.employees, &store.attendance)
        .generate_report(day, day)
        .unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_duplicate_names_use_first_rates() {
    let store = store_with(
        "payroll_duplicates",
        &[("Ani", 20000, 5000), ("Ani", 99999, 99999)],
    );
    let day = d(2024, 3, 4);
    store
        .attendance
        .replace_date(day, &[AttendanceRecord::present(day, "Ani", 1, 0)])
        .unwrap();

    let report = PayrollCalculator::new(&store.employees, &store.attendance)
        .generate_report(day, day)
        .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].total_pay, 20000);
}

#[test]
fn test_pay_overflow_is_rejected() {
    let store = store_with("payroll_overflow", &[("Ani", u64::MAX, 0)]);
    let day = d(2024, 3, 4);
    store
        .attendance
        .replace_date(day, &[AttendanceRecord::present(day, "Ani", 2, 0)])
        .unwrap();

    let result = PayrollCalculator::new(&store.employees, &store.attendance)
        .generate_report(day, day);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_hour_sum_overflow_is_rejected() {
    let store = store_with("payroll_hours_overflow", &[("Ani", 1, 0)]);
    for day in [d(2024, 3, 4), d(2024, 3, 5)] {
        store
            .attendance
            .replace_date(day, &[AttendanceRecord::present(day, "Ani", u64::MAX, 0)])
            .unwrap();
    }

    let result = PayrollCalculator::new(&store.employees, &store.attendance)
        .generate_report(d(2024, 3, 1), d(2024, 3, 31));
    assert!(matches!(result, Err(AppError::Validation(_))));
}
