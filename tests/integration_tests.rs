use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_with_data, read, rpay, setup_data_dir, temp_out};

#[test]
fn test_init_creates_header_only_tables() {
    let data_dir = setup_data_dir("init_headers");

    rpay(&data_dir)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data files ready"));

    let dir = Path::new(&data_dir);
    assert_eq!(
        read(dir.join("employees.csv")),
        "Name,BaseRate,OvertimeRate\n"
    );
    assert_eq!(
        read(dir.join("attendance.csv")),
        "Date,Name,Status,WorkHours,OvertimeHours\n"
    );
}

#[test]
fn test_employee_add_and_list() {
    let data_dir = setup_data_dir("employee_add_list");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(contains("Ani"))
        .stdout(contains("Budi"))
        .stdout(contains("Rp 20.000"))
        .stdout(contains("Rp 4.000"));
}

#[test]
fn test_employee_add_rejects_bad_rate() {
    let data_dir = setup_data_dir("employee_bad_rate");

    rpay(&data_dir)
        .args([
            "employee", "add", "Ani", "--base", "abc", "--overtime", "5000",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("base rate")));
}

#[test]
fn test_payroll_for_single_day() {
    let data_dir = setup_data_dir("payroll_single_day");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["payroll", "--range", "2024-03"])
        .assert()
        .success()
        .stdout(contains("01/03/2024 - 31/03/2024"))
        .stdout(contains("Rp 160.000"))
        .stdout(contains("Rp 10.000"))
        .stdout(contains("Rp 170.000"))
        .stdout(contains("TOTAL"));
}

#[test]
fn test_payroll_outside_range_is_zero() {
    let data_dir = setup_data_dir("payroll_outside_range");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["payroll", "--range", "2024-04"])
        .assert()
        .success()
        .stdout(contains("Ani"))
        .stdout(contains("Rp 160.000").not());
}

#[test]
fn test_attendance_list_shows_the_day() {
    let data_dir = setup_data_dir("attendance_list");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["attendance", "list", "2024-03-04"])
        .assert()
        .success()
        .stdout(contains("Ani"))
        .stdout(contains("Present"))
        .stdout(contains("Absent"));

    let stored = read(Path::new(&data_dir).join("attendance.csv"));
    assert!(stored.contains("2024-03-04,Ani,Masuk,8,2"));
    assert!(stored.contains("2024-03-04,Budi,Tidak Masuk,0,0"));
}

#[test]
fn test_attendance_without_employees_writes_nothing() {
    let data_dir = setup_data_dir("attendance_no_employees");

    rpay(&data_dir).args(["--test", "init"]).assert().success();

    rpay(&data_dir)
        .args(["attendance", "add", "2024-03-04", "--force"])
        .assert()
        .success()
        .stdout(contains("No employees on file"));

    assert_eq!(
        read(Path::new(&data_dir).join("attendance.csv")),
        "Date,Name,Status,WorkHours,OvertimeHours\n"
    );
}

#[test]
fn test_attendance_unknown_employee_fails() {
    let data_dir = setup_data_dir("attendance_unknown");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["attendance", "add", "2024-03-05", "--absent", "Dewi"])
        .assert()
        .failure()
        .stderr(contains("unknown employee 'Dewi'"));
}

#[test]
fn test_attendance_invalid_date_fails() {
    let data_dir = setup_data_dir("attendance_bad_date");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["attendance", "list", "04/03/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_attendance_replace_declined_keeps_day() {
    let data_dir = setup_data_dir("attendance_replace_declined");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["attendance", "add", "2024-03-04", "--absent", "Ani"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    let stored = read(Path::new(&data_dir).join("attendance.csv"));
    assert!(stored.contains("2024-03-04,Ani,Masuk,8,2"));
}

#[test]
fn test_attendance_replace_with_force() {
    let data_dir = setup_data_dir("attendance_replace_force");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args([
            "attendance",
            "add",
            "2024-03-04",
            "--hours",
            "Ani=6.5",
            "--force",
        ])
        .assert()
        .success();

    let stored = read(Path::new(&data_dir).join("attendance.csv"));
    assert!(stored.contains("2024-03-04,Ani,Masuk,6,0"));
    assert!(stored.contains("2024-03-04,Budi,Masuk,8,0"));
    assert_eq!(stored.matches("2024-03-04").count(), 2);
}

#[test]
fn test_attendance_delete_day() {
    let data_dir = setup_data_dir("attendance_delete");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["attendance", "del", "2024-03-04", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 attendance records"));

    rpay(&data_dir)
        .args(["attendance", "list", "2024-03-04"])
        .assert()
        .success()
        .stdout(contains("No attendance recorded"));
}

#[test]
fn test_employee_rename_follows_attendance() {
    let data_dir = setup_data_dir("employee_rename");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["employee", "edit", "Ani", "--name", "Ani Wijaya"])
        .assert()
        .success();

    rpay(&data_dir)
        .args(["attendance", "list", "2024-03-04"])
        .assert()
        .success()
        .stdout(contains("Ani Wijaya"));

    rpay(&data_dir)
        .args(["payroll", "--range", "2024-03-04"])
        .assert()
        .success()
        .stdout(contains("Rp 170.000"));
}

#[test]
fn test_employee_rename_onto_existing_name_warns() {
    let data_dir = setup_data_dir("employee_rename_existing");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["employee", "edit", "Ani", "--name", "Budi"])
        .assert()
        .success()
        .stdout(contains("An employee named 'Budi' already exists"));
}

#[test]
fn test_employee_edit_unknown_fails() {
    let data_dir = setup_data_dir("employee_edit_unknown");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["employee", "edit", "Dewi", "--base", "1"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: Dewi"));
}

#[test]
fn test_employee_delete_keeps_attendance() {
    let data_dir = setup_data_dir("employee_delete");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["employee", "del", "Ani", "--yes"])
        .assert()
        .success();

    rpay(&data_dir)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(contains("Budi"))
        .stdout(contains("Ani").not());

    let stored = read(Path::new(&data_dir).join("attendance.csv"));
    assert!(stored.contains("2024-03-04,Ani,Masuk,8,2"));
}

#[test]
fn test_export_csv_and_json() {
    let data_dir = setup_data_dir("export_csv_json");
    init_with_data(&data_dir);

    let csv_out = temp_out("export_csv_json", "csv");
    rpay(&data_dir)
        .args([
            "export", "--format", "csv", "--file", &csv_out, "--range", "2024-03",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = read(&csv_out);
    assert!(csv.starts_with(
        "Name,Total Days,Total Hours,Total Overtime Hours,Base Pay,Overtime Pay,Total Pay"
    ));
    assert!(csv.contains("Ani,1,8,2,160000,10000,170000"));
    assert!(csv.contains("Budi,0,0,0,0,0,0"));

    let json_out = temp_out("export_csv_json", "json");
    rpay(&data_dir)
        .args([
            "export", "--format", "json", "--file", &json_out, "--range", "2024-03",
        ])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&read(&json_out)).expect("valid json");
    assert_eq!(json["period"]["from"], "2024-03-01");
    assert_eq!(json["lines"][0]["employee_name"], "Ani");
    assert_eq!(json["lines"][0]["total_pay"], 170000);
}

#[test]
fn test_export_adds_extension_and_writes_xlsx_and_pdf() {
    let data_dir = setup_data_dir("export_xlsx_pdf");
    init_with_data(&data_dir);

    let base = temp_out("export_xlsx_pdf", "xlsx");
    let stem = base.trim_end_matches(".xlsx").to_string();

    rpay(&data_dir)
        .args(["export", "--file", &stem, "--range", "2024-03"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));
    assert!(Path::new(&base).exists());

    let pdf_out = temp_out("export_xlsx_pdf", "pdf");
    rpay(&data_dir)
        .args([
            "export", "--format", "pdf", "--file", &pdf_out, "--range", "2024-03",
        ])
        .assert()
        .success();
    assert!(read_bytes(&pdf_out).starts_with(b"%PDF"));
}

#[test]
fn test_export_overwrite_declined() {
    let data_dir = setup_data_dir("export_overwrite_declined");
    init_with_data(&data_dir);

    let out = temp_out("export_overwrite_declined", "csv");
    std::fs::write(&out, "keep me").expect("write");

    rpay(&data_dir)
        .args(["export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(read(&out), "keep me");
}

#[test]
fn test_export_invalid_range_fails() {
    let data_dir = setup_data_dir("export_bad_range");
    init_with_data(&data_dir);

    let out = temp_out("export_bad_range", "csv");
    rpay(&data_dir)
        .args([
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2024-03-10:2024-03-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_backup_directory_and_zip() {
    let data_dir = setup_data_dir("backup");
    init_with_data(&data_dir);

    let dir_out = temp_out("backup_dir", "d");
    rpay(&data_dir)
        .args(["backup", "--file", &dir_out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(read(Path::new(&dir_out).join("employees.csv")).contains("Ani,20000,5000"));

    let zip_out = temp_out("backup_zip", "zip");
    rpay(&data_dir)
        .args(["backup", "--file", &zip_out, "--compress"])
        .assert()
        .success();

    let file = std::fs::File::open(&zip_out).expect("open zip");
    let archive = zip::ZipArchive::new(file).expect("zip archive");
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"employees.csv"));
    assert!(names.contains(&"attendance.csv"));
}

#[test]
fn test_log_print_lists_operations() {
    let data_dir = setup_data_dir("log_print");
    init_with_data(&data_dir);

    rpay(&data_dir)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("Ani"))
        .stdout(contains("attendance"));
}

#[test]
fn test_malformed_table_is_reported() {
    let data_dir = setup_data_dir("malformed_table");
    init_with_data(&data_dir);

    std::fs::write(
        Path::new(&data_dir).join("employees.csv"),
        "Name,BaseRate,OvertimeRate\nAni,lots,5000\n",
    )
    .expect("write");

    rpay(&data_dir)
        .args(["employee", "list"])
        .assert()
        .failure()
        .stderr(contains("employees.csv").and(contains("line 2")));
}

fn read_bytes(path: &str) -> Vec<u8> {
    std::fs::read(path).expect("read file")
}
