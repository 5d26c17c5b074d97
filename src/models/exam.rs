// src/models/exam.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::choice::{AnswerSheet, ExamQuestionPoint};
use crate::error::AppError;

/// Represents the 'exams' table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: i64,
    pub title: String,
    pub course_id: i64,
    pub locked: bool,
    pub canceled: bool,
    pub begin_exam: Option<DateTime<Utc>>,
    pub finish_exam: Option<DateTime<Utc>>,
    /// Minutes.
    pub duration_exam: i32,
    /// JSON array of `ExamQuestionPoint`.
    pub question_data: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

impl Exam {
    /// Parses the per-question points stored on the exam.
    pub fn question_points(&self) -> Result<Vec<ExamQuestionPoint>, AppError> {
        match self.question_data.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(raw)?),
            _ => Ok(Vec::new()),
        }
    }
}

/// Represents the 'exam_users' table: one attempt of one user at one exam.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamUser {
    pub id: i64,
    pub exam_id: i64,
    pub username: String,
    pub is_started: bool,
    pub is_finished: bool,
    /// Seconds left when the attempt was last saved.
    pub remaining_time: i32,
    pub time_start: Option<DateTime<Utc>>,
    pub time_finish: Option<DateTime<Utc>>,
    /// -1.0 until graded.
    pub total_point: f64,
    /// JSON array of `AnswerSheet`.
    pub answer_sheet: Option<String>,
}

impl ExamUser {
    pub fn answer_sheets(&self) -> Result<Vec<AnswerSheet>, AppError> {
        match self.answer_sheet.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(raw)?),
            _ => Ok(Vec::new()),
        }
    }
}
