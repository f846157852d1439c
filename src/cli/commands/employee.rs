use crate::cli::parser::{Commands, EmployeeCommand};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::store::DataStore;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::format_currency;
use crate::utils::number::parse_amount;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let store = DataStore::open(cfg.data_path())?;

    match action {
        EmployeeCommand::List => list(&store, cfg)?,

        EmployeeCommand::Add {
            name,
            base,
            overtime,
        } => {
            let employee = Employee::new(
                name,
                parse_amount("base rate", base)?,
                parse_amount("overtime rate", overtime)?,
            )?;
            EmployeeLogic::add(&store, &employee)?;
            success(format!("Employee '{}' added.", employee.name));
        }

        EmployeeCommand::Edit {
            name,
            new_name,
            base,
            overtime,
        } => {
            let base = base
                .as_deref()
                .map(|b| parse_amount("base rate", b))
                .transpose()?;
            let overtime = overtime
                .as_deref()
                .map(|o| parse_amount("overtime rate", o))
                .transpose()?;

            let updated = EmployeeLogic::edit(&store, name, new_name.as_deref(), base, overtime)?;
            success(format!("Employee '{}' updated.", updated.name));
        }

        EmployeeCommand::Del { name, yes } => {
            let prompt = format!("Delete employee '{name}'? Attendance records are kept.");
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            EmployeeLogic::delete(&store, name)?;
            success(format!("Employee '{name}' deleted."));
        }
    }

    Ok(())
}

fn list(store: &DataStore, cfg: &Config) -> AppResult<()> {
    let employees = store.employees.list()?;

    if employees.is_empty() {
        info("No employees on file.");
        return Ok(());
    }

    let money = |n: u64| format_currency(n, &cfg.currency_symbol, &cfg.thousands_separator);

    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Base Rate"),
        Column::right("Overtime Rate"),
    ]);
    for e in &employees {
        table.add_row(vec![
            e.name.clone(),
            money(e.base_rate),
            money(e.overtime_rate),
        ]);
    }

    header(format!("Employees ({})", employees.len()));
    print!("{}", table.render());
    Ok(())
}
