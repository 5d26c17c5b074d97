// src/models/choice.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::question::Question;

/// A choice as echoed back inside a learner's answer sheet.
/// Text and flag come from the client and are only compared, never trusted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Choice {
    pub id: i64,
    pub choice_text: String,
    /// 1 = correct, 0 = incorrect.
    pub is_corrected: i32,
}

/// Canonical facts about a choice, read from the `choices` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ChoiceFacts {
    pub choice_text: String,
    pub is_corrected: i32,
}

/// Learner's submitted choices for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSheet {
    pub question_id: i64,
    pub choices: Vec<Choice>,
    pub point: i32,
}

/// Point a question is worth inside one exam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionPoint {
    pub question_id: i64,
    pub point: i32,
}

/// A submitted choice with its real correctness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceCorrect {
    pub choice: Choice,
    pub is_real_correct: i32,
}

/// Grading outcome for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceList {
    pub question: Question,
    pub point: i32,
    pub is_selected_correct: bool,
    /// One entry per submitted choice, in submission order.
    pub choices: Vec<ChoiceCorrect>,
}

/// Graded attempt of one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub exam_id: i64,
    pub username: String,
    pub total_point: f64,
    pub choice_lists: Vec<ChoiceList>,
}

/// How many attempts got a question right.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionExamReport {
    pub question: Question,
    pub correct_total: i64,
}
