// src/repositories/exam_users.rs

use async_trait::async_trait;

use super::{ExamUserRepository, PgStore};
use crate::{config::UNGRADED_POINT, error::AppError, models::exam::ExamUser};

const COLUMNS: &str = "\
    eu.id, eu.exam_id, u.username, eu.is_started, eu.is_finished, eu.remaining_time, \
    eu.time_start, eu.time_finish, eu.total_point, eu.answer_sheet";

#[async_trait]
impl ExamUserRepository for PgStore {
    async fn list_by_time_finish_desc(&self) -> Result<Vec<ExamUser>, AppError> {
        let attempts = sqlx::query_as::<_, ExamUser>(&format!(
            "SELECT {COLUMNS}
             FROM exam_users eu
             JOIN users u ON u.id = eu.user_id
             ORDER BY eu.time_finish DESC NULLS LAST"
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(attempts)
    }

    async fn list_complete(
        &self,
        course_id: i64,
        username: &str,
    ) -> Result<Vec<ExamUser>, AppError> {
        sqlx::query_as::<_, ExamUser>(&format!(
            "SELECT {COLUMNS}
             FROM exam_users eu
             JOIN users u ON u.id = eu.user_id
             JOIN exams e ON e.id = eu.exam_id
             WHERE e.course_id = $1 AND u.username = $2 AND eu.total_point > $3
             ORDER BY eu.time_finish DESC NULLS LAST"
        ))
        .bind(course_id)
        .bind(username)
        .bind(UNGRADED_POINT)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch completed exams of {} in course {}: {:?}",
                username,
                course_id,
                e
            );
            AppError::InternalServerError(e.to_string())
        })
    }

    async fn list_finished_by_exam(&self, exam_id: i64) -> Result<Vec<ExamUser>, AppError> {
        let attempts = sqlx::query_as::<_, ExamUser>(&format!(
            "SELECT {COLUMNS}
             FROM exam_users eu
             JOIN users u ON u.id = eu.user_id
             WHERE eu.exam_id = $1 AND eu.is_finished = TRUE
             ORDER BY eu.id"
        ))
        .bind(exam_id)
        .fetch_all(self.pool())
        .await?;

        Ok(attempts)
    }
}
