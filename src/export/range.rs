// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::ReportPeriod;
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<ReportPeriod> {
    let r = r.trim();

    let (from, to) = if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have same format"));
        }

        (bounds(start)?.0, bounds(end)?.1)
    } else {
        bounds(r)?
    };

    if from > to {
        return Err(invalid(&format!("start {from} is after end {to}")));
    }

    Ok(ReportPeriod::new(from, to))
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD.
fn bounds(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if !s.is_ascii() {
        return Err(invalid("unsupported --range format"));
    }

    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid start date"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid end date"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            if s.as_bytes()[4] != b'-' {
                return Err(invalid("expected YYYY-MM"));
            }
            let y: i32 = s[0..4].parse().map_err(|_| invalid("invalid year"))?;
            let m: u32 = s[5..7].parse().map_err(|_| invalid("invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid("invalid month"))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid("invalid start date"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid("invalid end date"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported --range format")),
    }
}

fn invalid(msg: &str) -> AppError {
    AppError::InvalidRange(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_covers_all_its_days() {
        let p = parse_range("2024-02").unwrap();
        assert_eq!((p.from, p.to), (d(2024, 2, 1), d(2024, 2, 29)));
    }

    #[test]
    fn intervals_join_outer_bounds() {
        let p = parse_range("2024-01:2024-03").unwrap();
        assert_eq!((p.from, p.to), (d(2024, 1, 1), d(2024, 3, 31)));

        let p = parse_range("2023:2024").unwrap();
        assert_eq!((p.from, p.to), (d(2023, 1, 1), d(2024, 12, 31)));
    }

    #[test]
    fn rejects_mixed_or_reversed_ranges() {
        assert!(parse_range("2024:2024-03").is_err());
        assert!(parse_range("2024-03-10:2024-03-01").is_err());
        assert!(parse_range("2024/03").is_err());
        assert!(parse_range("yesterday").is_err());
    }
}
