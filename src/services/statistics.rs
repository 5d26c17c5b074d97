// src/services/statistics.rs

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::{
    config::TRAILING_DAYS,
    error::AppError,
    models::Timestamped,
    repositories::{ExamRepository, ExamUserRepository, QuestionRepository, UserRepository},
    utils::{
        dates::{is_last_week, is_same_day, is_same_week},
        round_two_decimals,
    },
};

/// Counts of records falling in the week of `now` and the week before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekCounts {
    pub current: i64,
    pub last: i64,
}

/// Buckets records that are sorted newest first.
///
/// The scan stops at the first record that is neither in the current nor in
/// the last week. Records without a timestamp are skipped.
pub fn count_weeks<T: Timestamped>(records: &[T], now: DateTime<Utc>) -> WeekCounts {
    let mut counts = WeekCounts::default();
    let now = Some(now);

    for record in records {
        let Some(ts) = record.timestamp() else {
            continue;
        };
        if is_same_week(now, Some(ts)).unwrap_or(false) {
            counts.current += 1;
        } else if is_last_week(now, Some(ts)).unwrap_or(false) {
            counts.last += 1;
        } else {
            break;
        }
    }

    counts
}

/// Week-over-week change in percent, rounded to two decimals.
///
/// A missing side does not fall back to a fixed ±100%: it scales with the
/// other side's count (4 new records against none gives 400.0).
pub fn percent_change_of(counts: WeekCounts) -> f64 {
    let WeekCounts { current, last } = counts;
    let change = match (current, last) {
        (0, 0) => 0.0,
        (current, 0) => 100.0 * current as f64,
        (0, last) => -100.0 * last as f64,
        (current, last) => (current - last) as f64 / last as f64 * 100.0,
    };
    round_two_decimals(change)
}

pub fn percent_change<T: Timestamped>(records: &[T], now: DateTime<Utc>) -> f64 {
    percent_change_of(count_weeks(records, now))
}

/// Records per calendar day for the last seven days, oldest day first.
pub fn count_per_day_last_seven_days<T: Timestamped>(
    records: &[T],
    now: DateTime<Utc>,
) -> [i64; TRAILING_DAYS] {
    let mut counts = [0_i64; TRAILING_DAYS];

    for (slot, count) in counts.iter_mut().enumerate() {
        let day = Some(now - Duration::days((TRAILING_DAYS - 1 - slot) as i64));
        *count = records
            .iter()
            .filter_map(|record| record.timestamp())
            .filter(|ts| is_same_day(day, Some(*ts)).unwrap_or(false))
            .count() as i64;
    }

    counts
}

fn week_change<T: Timestamped>(kind: &str, records: &[T], now: DateTime<Utc>) -> f64 {
    let counts = count_weeks(records, now);
    let change = percent_change_of(counts);
    tracing::debug!(kind, current = counts.current, last = counts.last, change, "week counts");
    change
}

/// Dashboard numbers for administrators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub change_exam_user: f64,
    pub change_question: f64,
    pub change_account: f64,
    pub change_exam: f64,
    pub exam_user_last_seven_days: [i64; TRAILING_DAYS],
}

#[derive(Clone)]
pub struct StatisticsService {
    exam_users: Arc<dyn ExamUserRepository>,
    questions: Arc<dyn QuestionRepository>,
    users: Arc<dyn UserRepository>,
    exams: Arc<dyn ExamRepository>,
}

impl StatisticsService {
    pub fn new(
        exam_users: Arc<dyn ExamUserRepository>,
        questions: Arc<dyn QuestionRepository>,
        users: Arc<dyn UserRepository>,
        exams: Arc<dyn ExamRepository>,
    ) -> Self {
        Self {
            exam_users,
            questions,
            users,
            exams,
        }
    }

    /// Change in finished attempts.
    pub async fn change_exam_user(&self, now: DateTime<Utc>) -> Result<f64, AppError> {
        let attempts = self.exam_users.list_by_time_finish_desc().await?;
        Ok(week_change("exam_user", &attempts, now))
    }

    /// Change in questions added to the bank.
    pub async fn change_question(&self, now: DateTime<Utc>) -> Result<f64, AppError> {
        let questions = self.questions.list_by_created_date_desc().await?;
        Ok(week_change("question", &questions, now))
    }

    /// Change in registered (not deleted) accounts.
    pub async fn change_account(&self, now: DateTime<Utc>) -> Result<f64, AppError> {
        let users = self.users.list_active_by_created_date_desc().await?;
        Ok(week_change("account", &users, now))
    }

    /// Change in canceled exams.
    pub async fn change_exam(&self, now: DateTime<Utc>) -> Result<f64, AppError> {
        let exams = self.exams.list_canceled_by_created_date_desc().await?;
        Ok(week_change("exam", &exams, now))
    }

    pub async fn count_exam_user_last_seven_days(
        &self,
        now: DateTime<Utc>,
    ) -> Result<[i64; TRAILING_DAYS], AppError> {
        let attempts = self.exam_users.list_by_time_finish_desc().await?;
        Ok(count_per_day_last_seven_days(&attempts, now))
    }

    pub async fn dashboard(&self, now: DateTime<Utc>) -> Result<DashboardStats, AppError> {
        Ok(DashboardStats {
            change_exam_user: self.change_exam_user(now).await?,
            change_question: self.change_question(now).await?,
            change_account: self.change_account(now).await?,
            change_exam: self.change_exam(now).await?,
            exam_user_last_seven_days: self.count_exam_user_last_seven_days(now).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // Wednesday of ISO week 24
        Utc.with_ymd_and_hms(2023, 6, 14, 12, 0, 0).unwrap()
    }

    fn weeks_ago(weeks: i64, n: usize) -> Vec<DateTime<Utc>> {
        vec![now() - Duration::weeks(weeks); n]
    }

    #[test]
    fn test_percent_change_formula() {
        assert_eq!(percent_change_of(WeekCounts { current: 3, last: 2 }), 50.0);
        assert_eq!(percent_change_of(WeekCounts { current: 4, last: 0 }), 400.0);
        assert_eq!(percent_change_of(WeekCounts { current: 0, last: 5 }), -500.0);
        assert_eq!(percent_change_of(WeekCounts { current: 0, last: 0 }), 0.0);
        assert_eq!(percent_change_of(WeekCounts { current: 1, last: 3 }), -66.67);
    }

    #[test]
    fn test_scan_stops_at_older_record() {
        let mut records = weeks_ago(0, 1);
        records.extend(weeks_ago(1, 1));
        records.extend(weeks_ago(3, 1));
        // Out of order on purpose: never reached.
        records.extend(weeks_ago(0, 2));

        assert_eq!(count_weeks(&records, now()), WeekCounts { current: 1, last: 1 });
        assert_eq!(percent_change(&records, now()), 0.0);
    }

    #[test]
    fn test_week_change_uses_the_same_scan() {
        let mut records = weeks_ago(0, 3);
        records.extend(weeks_ago(1, 2));
        records.extend(weeks_ago(3, 1));

        assert_eq!(week_change("exam", &records, now()), 50.0);
        assert_eq!(week_change("exam", &records, now()), percent_change(&records, now()));
    }

    #[test]
    fn test_records_without_timestamp_are_skipped() {
        let records = vec![None, Some(now()), None, Some(now() - Duration::weeks(1))];
        assert_eq!(count_weeks(&records, now()), WeekCounts { current: 1, last: 1 });
    }

    #[test]
    fn test_seven_day_buckets_oldest_first() {
        let records = vec![
            now(),
            now() - Duration::hours(2),
            now() - Duration::days(1),
            now() - Duration::days(6),
            now() - Duration::days(7),
        ];

        assert_eq!(
            count_per_day_last_seven_days(&records, now()),
            [1, 0, 0, 0, 0, 1, 2]
        );
    }

    #[test]
    fn test_seven_day_buckets_use_calendar_days() {
        let midnight = Utc.with_ymd_and_hms(2023, 6, 14, 0, 0, 0).unwrap();
        let just_before = midnight - Duration::seconds(1);

        let counts = count_per_day_last_seven_days(&[just_before], midnight);
        assert_eq!(counts, [0, 0, 0, 0, 0, 1, 0]);
    }
}
