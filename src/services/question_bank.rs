// src/services/question_bank.rs

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{DifficultyLevel, NewQuestion, Question},
};

/// A question that passed validation and carries its difficulty point.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuestion {
    pub question_text: String,
    pub type_code: String,
    pub difficulty_level: DifficultyLevel,
    pub point: i32,
}

impl PreparedQuestion {
    /// The row as it is written to the bank.
    pub fn into_question(self, id: i64, created_date: DateTime<Utc>) -> Question {
        Question {
            id,
            question_text: self.question_text,
            type_code: Some(self.type_code),
            difficulty_level: Some(self.difficulty_level.as_str().to_string()),
            point: self.point,
            deleted: false,
            created_date: Some(created_date),
        }
    }
}

/// Validates a question before it is saved to the bank.
///
/// The stored point always comes from the difficulty level; the submitted
/// point only has to be non-negative.
pub fn prepare_question(question: NewQuestion) -> Result<PreparedQuestion, AppError> {
    question.validate()?;

    let difficulty_level = question.difficulty_level.ok_or_else(|| {
        AppError::InvalidArgument("Difficulty level is required".to_string())
    })?;

    Ok(PreparedQuestion {
        question_text: question.question_text,
        type_code: question.type_code.code().to_string(),
        difficulty_level,
        point: difficulty_level.point(),
    })
}
