// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'users' table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Intake (cohort) the user belongs to; staff accounts have none.
    pub intake_id: Option<i64>,

    /// Soft-delete flag.
    pub deleted: bool,

    pub created_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// The authenticated caller, handed in by the invocation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

impl CurrentUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
