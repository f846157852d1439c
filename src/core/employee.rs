use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::store::DataStore;
use crate::ui::messages::warning;

/// Employee maintenance with audit logging.
pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(store: &DataStore, employee: &Employee) -> AppResult<()> {
        if store.employees.find(&employee.name)?.is_some() {
            warning(format!(
                "An employee named '{}' already exists: reports will use the first one.",
                employee.name
            ));
        }

        store.employees.add(employee)?;
        store.log.record(
            "add",
            &employee.name,
            &format!(
                "base rate {}, overtime rate {}",
                employee.base_rate, employee.overtime_rate
            ),
        );
        Ok(())
    }

    /// Apply the given changes to the employee called `name` and return the
    /// updated record.
    pub fn edit(
        store: &DataStore,
        name: &str,
        new_name: Option<&str>,
        base_rate: Option<u64>,
        overtime_rate: Option<u64>,
    ) -> AppResult<Employee> {
        if new_name.is_none() && base_rate.is_none() && overtime_rate.is_none() {
            return Err(AppError::Validation(
                "nothing to change: use --name, --base or --overtime".to_string(),
            ));
        }

        let current = store
            .employees
            .find(name)?
            .ok_or_else(|| AppError::EmployeeNotFound(name.to_string()))?;
        let updated = current.with_changes(new_name, base_rate, overtime_rate)?;

        if updated.name != current.name && store.employees.find(&updated.name)?.is_some() {
            warning(format!(
                "An employee named '{}' already exists: attendance of both is merged under that name.",
                updated.name
            ));
        }

        store.employees.update(name, &updated)?;

        let message = if updated.name != current.name {
            format!("renamed to {}", updated.name)
        } else {
            format!(
                "base rate {}, overtime rate {}",
                updated.base_rate, updated.overtime_rate
            )
        };
        store.log.record("edit", name, &message);

        Ok(updated)
    }

    pub fn delete(store: &DataStore, name: &str) -> AppResult<()> {
        store.employees.delete(name)?;
        store
            .log
            .record("del", name, "employee removed, attendance kept");
        Ok(())
    }
}
