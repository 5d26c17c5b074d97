// src/models/question.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::{
    config::{EASY_POINT, HARD_POINT, MEDIUM_POINT},
    error::AppError,
};

/// Represents a row of the question bank, joined with its type code.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    pub question_text: String,

    /// Type code: 'TF', 'MC' or 'MS'.
    /// `None` when the question type row carries no code.
    pub type_code: Option<String>,

    /// 'EASY', 'MEDIUM' or 'HARD'.
    pub difficulty_level: Option<String>,

    /// Base point; an exam may override it per question.
    pub point: i32,

    pub deleted: bool,

    pub created_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl Question {
    /// Resolves the grading strategy for this question.
    pub fn question_type(&self) -> Result<QuestionType, AppError> {
        match self.type_code.as_deref() {
            Some(code) => code.parse(),
            None => Err(AppError::InvalidState(format!(
                "Question {} has no type code",
                self.id
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "TF")]
    TrueFalse,
    #[serde(rename = "MC")]
    MultipleChoice,
    #[serde(rename = "MS")]
    MultiSelect,
}

impl QuestionType {
    pub fn code(self) -> &'static str {
        match self {
            QuestionType::TrueFalse => "TF",
            QuestionType::MultipleChoice => "MC",
            QuestionType::MultiSelect => "MS",
        }
    }
}

impl FromStr for QuestionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TF" => Ok(QuestionType::TrueFalse),
            "MC" => Ok(QuestionType::MultipleChoice),
            "MS" => Ok(QuestionType::MultiSelect),
            other => Err(AppError::InvalidState(format!(
                "Unrecognized question type code '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn point(self) -> i32 {
        match self {
            DifficultyLevel::Easy => EASY_POINT,
            DifficultyLevel::Medium => MEDIUM_POINT,
            DifficultyLevel::Hard => HARD_POINT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "EASY",
            DifficultyLevel::Medium => "MEDIUM",
            DifficultyLevel::Hard => "HARD",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(DifficultyLevel::Easy),
            "MEDIUM" => Ok(DifficultyLevel::Medium),
            "HARD" => Ok(DifficultyLevel::Hard),
            other => Err(AppError::InvalidArgument(format!(
                "Unknown difficulty level '{}'",
                other
            ))),
        }
    }
}

/// DTO for adding a question to the bank.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 2000))]
    pub question_text: String,
    pub type_code: QuestionType,
    pub difficulty_level: Option<DifficultyLevel>,
    #[validate(range(min = 0, message = "Point must not be negative."))]
    pub point: i32,
}
