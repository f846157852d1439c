use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// An employee and the hourly rates used to pay them.
///
/// The name is the only key: there is no numeric id, and attendance rows
/// reference employees by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub name: String,
    pub base_rate: u64,     // ⇔ employees.BaseRate (currency units / hour)
    pub overtime_rate: u64, // ⇔ employees.OvertimeRate (currency units / hour)
}

impl Employee {
    /// Build a validated employee. The name is trimmed and must not be empty.
    pub fn new(name: &str, base_rate: u64, overtime_rate: u64) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "employee name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            base_rate,
            overtime_rate,
        })
    }

    /// Copy of this employee with the given fields replaced.
    pub fn with_changes(
        &self,
        name: Option<&str>,
        base_rate: Option<u64>,
        overtime_rate: Option<u64>,
    ) -> AppResult<Self> {
        Employee::new(
            name.unwrap_or(&self.name),
            base_rate.unwrap_or(self.base_rate),
            overtime_rate.unwrap_or(self.overtime_rate),
        )
    }
}
