use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceTotals, Employee, PayrollReportLine};
use crate::store::{AttendanceStore, EmployeeStore};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Turns attendance over a date range into pay per employee.
pub struct PayrollCalculator<'a> {
    employees: &'a EmployeeStore,
    attendance: &'a AttendanceStore,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(employees: &'a EmployeeStore, attendance: &'a AttendanceStore) -> Self {
        Self {
            employees,
            attendance,
        }
    }

    /// One line per employee, in employee-file order, for `from..=to`.
    ///
    /// Employees without attendance in the range appear with zero totals.
    /// When a name occurs twice only the first row is reported.
    pub fn generate_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PayrollReportLine>> {
        let employees = distinct_by_name(self.employees.list()?);
        if employees.is_empty() {
            return Ok(Vec::new());
        }

        let names: HashSet<String> = employees.iter().map(|e| e.name.clone()).collect();
        let totals = self.attendance.aggregate(from, to, &names)?;

        employees
            .iter()
            .map(|e| {
                let t = totals.get(&e.name).copied().unwrap_or_default();
                build_line(e, &t)
            })
            .collect()
    }
}

/// Pay for one employee given their attendance totals.
pub fn build_line(employee: &Employee, totals: &AttendanceTotals) -> AppResult<PayrollReportLine> {
    let base_pay = checked_pay(&employee.name, employee.base_rate, totals.hours)?;
    let overtime_pay = checked_pay(&employee.name, employee.overtime_rate, totals.overtime_hours)?;
    let total_pay = base_pay
        .checked_add(overtime_pay)
        .ok_or_else(|| overflow(&employee.name))?;

    Ok(PayrollReportLine {
        employee_name: employee.name.clone(),
        total_days: totals.days,
        total_hours: totals.hours,
        total_overtime_hours: totals.overtime_hours,
        base_pay,
        overtime_pay,
        total_pay,
    })
}

/// Column-wise sum of a report, labelled "TOTAL".
pub fn report_totals(report: &[PayrollReportLine]) -> PayrollReportLine {
    report.iter().fold(
        PayrollReportLine {
            employee_name: "TOTAL".to_string(),
            ..Default::default()
        },
        |mut acc, l| {
            acc.total_days = acc.total_days.saturating_add(l.total_days);
            acc.total_hours = acc.total_hours.saturating_add(l.total_hours);
            acc.total_overtime_hours = acc
                .total_overtime_hours
                .saturating_add(l.total_overtime_hours);
            acc.base_pay = acc.base_pay.saturating_add(l.base_pay);
            acc.overtime_pay = acc.overtime_pay.saturating_add(l.overtime_pay);
            acc.total_pay = acc.total_pay.saturating_add(l.total_pay);
            acc
        },
    )
}

fn checked_pay(name: &str, rate: u64, hours: u64) -> AppResult<u64> {
    rate.checked_mul(hours).ok_or_else(|| overflow(name))
}

fn overflow(name: &str) -> AppError {
    AppError::Validation(format!("pay for '{name}' does not fit in a 64-bit amount"))
}

fn distinct_by_name(employees: Vec<Employee>) -> Vec<Employee> {
    let mut seen = HashSet::new();
    employees
        .into_iter()
        .filter(|e| seen.insert(e.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_line_multiplies_rates_by_hours() {
        let ani = Employee::new("Ani", 20000, 5000).unwrap();
        let totals = AttendanceTotals {
            days: 1,
            hours: 8,
            overtime_hours: 2,
        };

        let line = build_line(&ani, &totals).unwrap();
        assert_eq!(line.base_pay, 160000);
        assert_eq!(line.overtime_pay, 10000);
        assert_eq!(line.total_pay, 170000);
    }

    #[test]
    fn build_line_reports_overflow() {
        let rich = Employee::new("Rich", u64::MAX, 0).unwrap();
        let totals = AttendanceTotals {
            days: 1,
            hours: 2,
            overtime_hours: 0,
        };
        assert!(matches!(
            build_line(&rich, &totals),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn report_totals_sums_every_column() {
        let a = build_line(
            &Employee::new("A", 10, 20).unwrap(),
            &AttendanceTotals {
                days: 2,
                hours: 16,
                overtime_hours: 1,
            },
        )
        .unwrap();
        let b = build_line(
            &Employee::new("B", 5, 0).unwrap(),
            &AttendanceTotals {
                days: 1,
                hours: 8,
                overtime_hours: 3,
            },
        )
        .unwrap();

        let t = report_totals(&[a, b]);
        assert_eq!(t.employee_name, "TOTAL");
        assert_eq!(t.total_days, 3);
        assert_eq!(t.total_hours, 24);
        assert_eq!(t.total_overtime_hours, 4);
        assert_eq!(t.base_pay, 200);
        assert_eq!(t.overtime_pay, 20);
        assert_eq!(t.total_pay, 220);
    }

    #[test]
    fn report_totals_saturate_instead_of_wrapping() {
        let big = PayrollReportLine {
            employee_name: "A".to_string(),
            total_hours: u64::MAX,
            total_days: u64::MAX,
            ..Default::default()
        };
        let small = PayrollReportLine {
            employee_name: "B".to_string(),
            total_hours: 1,
            total_days: 1,
            total_overtime_hours: 1,
            ..Default::default()
        };

        let t = report_totals(&[big, small]);
        assert_eq!(t.total_hours, u64::MAX);
        assert_eq!(t.total_days, u64::MAX);
        assert_eq!(t.total_overtime_hours, 1);
    }
}
