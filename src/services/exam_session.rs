// src/services/exam_session.rs

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::AppError,
    models::exam::{Exam, ExamUser},
};

/// Checks that a learner may open the exam right now.
pub fn ensure_accessible(exam: Option<Exam>, now: DateTime<Utc>) -> Result<Exam, AppError> {
    let exam = exam.ok_or_else(|| AppError::NotFound("Exam not found".to_string()))?;

    if exam.canceled || exam.locked {
        return Err(AppError::BadRequest("exam is locked".to_string()));
    }
    if exam.begin_exam.is_some_and(|begin| now < begin) {
        return Err(AppError::BadRequest("exam has not started".to_string()));
    }
    if exam.finish_exam.is_some_and(|finish| now > finish) {
        return Err(AppError::BadRequest("exam is closed".to_string()));
    }

    Ok(exam)
}

/// Seconds the learner has left on this attempt.
///
/// Counts down from the exam duration since `time_start` and never runs past
/// `finish_exam`. An attempt that has not started gets the full duration.
pub fn remaining_seconds(exam_user: &ExamUser, exam: &Exam, now: DateTime<Utc>) -> i64 {
    let duration = Duration::minutes(i64::from(exam.duration_exam));

    let mut deadline = match exam_user.time_start {
        Some(start) if exam_user.is_started => start + duration,
        _ => now + duration,
    };
    if let Some(finish) = exam.finish_exam {
        deadline = deadline.min(finish);
    }

    (deadline - now).num_seconds().max(0)
}
