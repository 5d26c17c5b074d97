// src/repositories/choices.rs

use async_trait::async_trait;

use super::{ChoiceRepository, PgStore};
use crate::{error::AppError, models::choice::ChoiceFacts};

#[async_trait]
impl ChoiceRepository for PgStore {
    async fn find_facts(&self, id: i64) -> Result<Option<ChoiceFacts>, AppError> {
        sqlx::query_as::<_, ChoiceFacts>(
            "SELECT choice_text, is_corrected FROM choices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch choice {}: {:?}", id, e);
            AppError::InternalServerError(e.to_string())
        })
    }
}
