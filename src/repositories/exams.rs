// src/repositories/exams.rs

use async_trait::async_trait;

use super::{ExamRepository, PgStore};
use crate::{error::AppError, models::exam::Exam};

const COLUMNS: &str = "\
    e.id, e.title, p.course_id, e.locked, e.canceled, e.begin_exam, e.finish_exam, \
    e.duration_exam, e.question_data, e.created_date";

#[async_trait]
impl ExamRepository for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>, AppError> {
        let exam = sqlx::query_as::<_, Exam>(&format!(
            "SELECT {COLUMNS}
             FROM exams e
             JOIN parts p ON p.id = e.part_id
             WHERE e.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(exam)
    }

    async fn list_canceled_by_created_date_desc(&self) -> Result<Vec<Exam>, AppError> {
        let exams = sqlx::query_as::<_, Exam>(&format!(
            "SELECT {COLUMNS}
             FROM exams e
             JOIN parts p ON p.id = e.part_id
             WHERE e.canceled = TRUE
             ORDER BY e.created_date DESC"
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(exams)
    }
}
