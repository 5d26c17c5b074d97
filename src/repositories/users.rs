// src/repositories/users.rs

use async_trait::async_trait;

use super::{PgStore, UserRepository};
use crate::{error::AppError, models::user::User};

const COLUMNS: &str = "id, username, intake_id, deleted, created_date";

#[async_trait]
impl UserRepository for PgStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn list_active_by_created_date_desc(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {COLUMNS}
             FROM users
             WHERE deleted = FALSE
             ORDER BY created_date DESC"
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(users)
    }
}
