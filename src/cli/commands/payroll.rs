use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payroll::{PayrollCalculator, report_totals};
use crate::errors::AppResult;
use crate::export::resolve_period;
use crate::models::PayrollReportLine;
use crate::store::DataStore;
use crate::ui::messages::{header, info};
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payroll { range } = cmd {
        let store = DataStore::open(cfg.data_path())?;
        let period = resolve_period(range, cfg)?;

        let report = PayrollCalculator::new(&store.employees, &store.attendance)
            .generate_report(period.from, period.to)?;

        if report.is_empty() {
            info("No employees on file.");
            return Ok(());
        }

        header(format!("{} | {}", cfg.report_heading(), period.display()));
        print!("{}", render(&report, cfg));
    }

    Ok(())
}

/// The report as a terminal table, closed by a TOTAL row.
pub fn render(report: &[PayrollReportLine], cfg: &Config) -> String {
    let money = |n: u64| format_currency(n, &cfg.currency_symbol, &cfg.thousands_separator);

    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Days"),
        Column::right("Hours"),
        Column::right("Overtime"),
        Column::right("Base Pay"),
        Column::right("Overtime Pay"),
        Column::right("Total Pay"),
    ]);

    let totals = report_totals(report);
    for l in report.iter().chain(std::iter::once(&totals)) {
        table.add_row(vec![
            l.employee_name.clone(),
            l.total_days.to_string(),
            l.total_hours.to_string(),
            l.total_overtime_hours.to_string(),
            money(l.base_pay),
            money(l.overtime_pay),
            money(l.total_pay),
        ]);
    }

    table.render()
}
