// src/repositories/mod.rs

//! Read-side collaborators of the grading and statistics services.
//!
//! Services only see these traits; `PgStore` is the Postgres-backed
//! implementation and tests plug in in-memory fakes.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        choice::ChoiceFacts,
        course::Course,
        exam::{Exam, ExamUser},
        question::Question,
        user::User,
    },
};

pub mod choices;
pub mod courses;
pub mod exam_users;
pub mod exams;
pub mod questions;
pub mod users;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError>;

    /// All questions, newest first.
    async fn list_by_created_date_desc(&self) -> Result<Vec<Question>, AppError>;
}

#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    async fn find_facts(&self, id: i64) -> Result<Option<ChoiceFacts>, AppError>;
}

#[async_trait]
pub trait ExamUserRepository: Send + Sync {
    /// Every attempt, most recently finished first.
    async fn list_by_time_finish_desc(&self) -> Result<Vec<ExamUser>, AppError>;

    /// Graded attempts of `username` on exams of `course_id`.
    async fn list_complete(&self, course_id: i64, username: &str)
    -> Result<Vec<ExamUser>, AppError>;

    async fn list_finished_by_exam(&self, exam_id: i64) -> Result<Vec<ExamUser>, AppError>;
}

#[async_trait]
pub trait ExamRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>, AppError>;

    /// Canceled exams, newest first.
    async fn list_canceled_by_created_date_desc(&self) -> Result<Vec<Exam>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Users that are not soft-deleted, newest first.
    async fn list_active_by_created_date_desc(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_by_intake(&self, intake_id: i64) -> Result<Vec<Course>, AppError>;
}

/// Postgres implementation of every repository trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
