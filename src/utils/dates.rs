// src/utils/dates.rs

use chrono::{DateTime, Datelike, Utc};

use crate::error::AppError;

fn require(date: Option<DateTime<Utc>>) -> Result<DateTime<Utc>, AppError> {
    date.ok_or_else(|| AppError::InvalidArgument("The date must not be null".to_string()))
}

/// True when both dates fall on the same calendar day.
pub fn is_same_day(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Result<bool, AppError> {
    let (a, b) = (require(a)?, require(b)?);
    Ok(a.year() == b.year() && a.month() == b.month() && a.day() == b.day())
}

/// True when both dates fall in the same ISO week.
///
/// The week is keyed by its ISO week-based year, so 2024-12-30 belongs to
/// week 1 of 2025 and shares it with 2025-01-01.
pub fn is_same_week(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Result<bool, AppError> {
    let (a, b) = (require(a)?, require(b)?);
    Ok(a.iso_week() == b.iso_week())
}

/// True when `candidate` sits exactly one week-of-year before `reference`.
///
/// Only the week numbers are compared, so week 1 never sees the last week of
/// the previous year as "last week".
pub fn is_last_week(
    reference: Option<DateTime<Utc>>,
    candidate: Option<DateTime<Utc>>,
) -> Result<bool, AppError> {
    let (reference, candidate) = (require(reference)?, require(candidate)?);
    let diff = reference.iso_week().week() as i64 - candidate.iso_week().week() as i64;
    Ok(diff == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    #[test]
    fn test_same_day() {
        assert!(is_same_day(at(2023, 4, 10, 9, 0), at(2023, 4, 10, 18, 30)).unwrap());
        assert!(!is_same_day(at(2023, 4, 10, 9, 0), at(2023, 4, 11, 9, 0)).unwrap());
        // 23:59 and 00:00 the next day
        assert!(!is_same_day(at(2023, 4, 10, 23, 59), at(2023, 4, 11, 0, 0)).unwrap());
        assert!(!is_same_day(at(2022, 4, 10, 9, 0), at(2023, 4, 10, 9, 0)).unwrap());
    }

    #[test]
    fn test_same_week() {
        // Monday and Wednesday of ISO week 15
        assert!(is_same_week(at(2023, 4, 10, 9, 0), at(2023, 4, 12, 18, 30)).unwrap());
        assert!(!is_same_week(at(2023, 4, 10, 9, 0), at(2023, 4, 17, 9, 0)).unwrap());
        assert!(!is_same_week(at(2022, 4, 11, 9, 0), at(2023, 4, 10, 9, 0)).unwrap());
    }

    #[test]
    fn test_last_week() {
        let current = at(2023, 4, 10, 9, 0);
        assert!(is_last_week(current, at(2023, 4, 3, 9, 0)).unwrap());
        assert!(!is_last_week(current, at(2023, 4, 12, 9, 0)).unwrap());
        assert!(!is_last_week(current, at(2023, 3, 27, 9, 0)).unwrap());
        assert!(!is_last_week(current, current).unwrap());
    }

    #[test]
    fn test_same_week_across_new_year() {
        // Monday 2024-12-30 opens ISO week 1 of 2025
        assert!(is_same_week(at(2024, 12, 30, 9, 0), at(2025, 1, 1, 9, 0)).unwrap());
        // Week 1 of 2024 and week 1 of 2025 are a year apart
        assert!(!is_same_week(at(2024, 1, 2, 9, 0), at(2024, 12, 30, 9, 0)).unwrap());
        assert!(!is_same_week(at(2024, 12, 29, 9, 0), at(2024, 12, 30, 9, 0)).unwrap());
    }

    #[test]
    fn test_last_week_compares_week_numbers_only() {
        // Week 2 of 2025 against week 1 of 2025, which starts in December
        assert!(is_last_week(at(2025, 1, 6, 9, 0), at(2024, 12, 30, 9, 0)).unwrap());
        // Week 1 never reaches back to week 52
        assert!(!is_last_week(at(2025, 1, 1, 9, 0), at(2024, 12, 23, 9, 0)).unwrap());
        assert!(!is_last_week(at(2024, 12, 30, 9, 0), at(2024, 12, 23, 9, 0)).unwrap());
        // Weeks 24 and 23 of different years still match
        assert!(is_last_week(at(2024, 6, 12, 9, 0), at(2023, 6, 7, 9, 0)).unwrap());
    }

    #[test]
    fn test_last_week_relative_offsets() {
        let w = Utc.with_ymd_and_hms(2023, 6, 14, 12, 0, 0).unwrap();
        assert!(is_last_week(Some(w), Some(w - Duration::days(7))).unwrap());
        assert!(!is_last_week(Some(w), Some(w - Duration::days(14))).unwrap());
    }

    #[test]
    fn test_null_dates_are_rejected() {
        let now = Some(Utc::now());
        assert!(matches!(is_same_day(now, None), Err(AppError::InvalidArgument(_))));
        assert!(matches!(is_same_day(None, now), Err(AppError::InvalidArgument(_))));
        assert!(matches!(is_same_week(now, None), Err(AppError::InvalidArgument(_))));
        assert!(matches!(is_same_week(None, now), Err(AppError::InvalidArgument(_))));
        assert!(matches!(is_last_week(now, None), Err(AppError::InvalidArgument(_))));
        assert!(matches!(is_last_week(None, now), Err(AppError::InvalidArgument(_))));
    }
}
