// src/models/course.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'courses' table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub course_code: String,
    pub intake_id: Option<i64>,
}

/// Per-course progress card shown on a learner's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChart {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub count_exam: i64,
    /// Mean point over completed attempts.
    pub total_point: f64,
    pub change_rating: f64,
    /// -1, 0 or 1: this week vs last week.
    pub compare_last_week: i32,
}
