// src/repositories/courses.rs

use async_trait::async_trait;

use super::{CourseRepository, PgStore};
use crate::{error::AppError, models::course::Course};

#[async_trait]
impl CourseRepository for PgStore {
    async fn list_by_intake(&self, intake_id: i64) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT c.id, c.name, c.course_code, ci.intake_id
             FROM courses c
             JOIN course_intakes ci ON ci.course_id = c.id
             WHERE ci.intake_id = $1
             ORDER BY c.id",
        )
        .bind(intake_id)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list courses of intake {}: {:?}", intake_id, e);
            AppError::InternalServerError(e.to_string())
        })
    }
}
