// src/repositories/questions.rs

use async_trait::async_trait;

use super::{PgStore, QuestionRepository};
use crate::{error::AppError, models::question::Question};

const COLUMNS: &str = "\
    q.id, q.question_text, qt.type_code, q.difficulty_level, q.point, q.deleted, q.created_date";

#[async_trait]
impl QuestionRepository for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS}
             FROM questions q
             LEFT JOIN question_types qt ON qt.id = q.question_type_id
             WHERE q.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch question {}: {:?}", id, e);
            AppError::InternalServerError(e.to_string())
        })
    }

    async fn list_by_created_date_desc(&self) -> Result<Vec<Question>, AppError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS}
             FROM questions q
             LEFT JOIN question_types qt ON qt.id = q.question_type_id
             ORDER BY q.created_date DESC"
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }
}
