use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like `parse_date`, but fails with `InvalidDate`.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// The `days` days ending with `end` itself. A window reaching past the
/// calendar's first date is an `InvalidRange`.
pub fn trailing_period(end: NaiveDate, days: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let back = Days::new(u64::from(days.saturating_sub(1)));
    let from = end.checked_sub_days(back).ok_or_else(|| {
        AppError::InvalidRange(format!("a {days}-day period ending {end} is out of range"))
    })?;
    Ok((from, end))
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(y, m, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .map(|d| d.day())
}
