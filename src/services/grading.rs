// src/services/grading.rs

use std::{collections::HashMap, sync::Arc};

use crate::{
    config::TRUE_LITERAL,
    error::AppError,
    models::{
        choice::{
            AnswerSheet, ChoiceCorrect, ChoiceFacts, ChoiceList, ExamQuestionPoint, ExamResult,
            QuestionExamReport,
        },
        exam::{Exam, ExamUser},
        question::QuestionType,
    },
    repositories::{ChoiceRepository, ExamRepository, ExamUserRepository, QuestionRepository},
};

/// Grades answer sheets against the question bank.
///
/// Holds only read-only collaborators, so one instance can be shared across
/// requests.
#[derive(Clone)]
pub struct GradingService {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    exams: Arc<dyn ExamRepository>,
    exam_users: Arc<dyn ExamUserRepository>,
}

impl GradingService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        exams: Arc<dyn ExamRepository>,
        exam_users: Arc<dyn ExamUserRepository>,
    ) -> Self {
        Self {
            questions,
            choices,
            exams,
            exam_users,
        }
    }

    /// Grades every answer sheet, in submission order.
    ///
    /// * Missing question or choice: `NotFound`.
    /// * Question without a known type code: `InvalidState`.
    /// * Sheet without a matching `ExamQuestionPoint`: `InvalidArgument`.
    ///
    /// Any failure aborts the whole call; no partial report is returned.
    pub async fn grade_submission(
        &self,
        answer_sheets: &[AnswerSheet],
        question_points: &[ExamQuestionPoint],
    ) -> Result<Vec<ChoiceList>, AppError> {
        let mut choice_lists = Vec::with_capacity(answer_sheets.len());
        for sheet in answer_sheets {
            choice_lists.push(self.grade_answer(sheet, question_points).await?);
        }
        Ok(choice_lists)
    }

    async fn grade_answer(
        &self,
        sheet: &AnswerSheet,
        question_points: &[ExamQuestionPoint],
    ) -> Result<ChoiceList, AppError> {
        let question = self
            .questions
            .find_by_id(sheet.question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question {} not found", sheet.question_id))
            })?;

        let question_type = question.question_type().inspect_err(|e| {
            tracing::error!("Cannot grade question {}: {}", question.id, e);
        })?;

        let (is_selected_correct, choices) = match question_type {
            QuestionType::TrueFalse => self.grade_true_false(sheet).await?,
            // Multi-select is judged choice by choice, exactly like single choice.
            QuestionType::MultipleChoice | QuestionType::MultiSelect => {
                self.grade_by_choice(sheet).await?
            }
        };

        let point = point_for(sheet.question_id, question_points)?;

        tracing::debug!(
            question_id = question.id,
            question_type = %question_type,
            is_selected_correct,
            point,
            "graded answer"
        );

        Ok(ChoiceList {
            question,
            point,
            is_selected_correct,
            choices,
        })
    }

    /// The selected text must match the stored text of that choice; each
    /// choice is flagged by whether it reads "True".
    async fn grade_true_false(
        &self,
        sheet: &AnswerSheet,
    ) -> Result<(bool, Vec<ChoiceCorrect>), AppError> {
        let selected = sheet.choices.first().ok_or_else(|| {
            AppError::InvalidArgument(format!(
                "True/false answer for question {} has no choice",
                sheet.question_id
            ))
        })?;

        let facts = self.choice_facts(selected.id).await?;
        let is_selected_correct = selected.choice_text == facts.choice_text;

        let choices = sheet
            .choices
            .iter()
            .map(|choice| ChoiceCorrect {
                choice: choice.clone(),
                is_real_correct: i32::from(choice.choice_text == TRUE_LITERAL),
            })
            .collect();

        Ok((is_selected_correct, choices))
    }

    /// Each submitted flag must equal the stored flag of that choice.
    async fn grade_by_choice(
        &self,
        sheet: &AnswerSheet,
    ) -> Result<(bool, Vec<ChoiceCorrect>), AppError> {
        let mut all_match = !sheet.choices.is_empty();
        let mut choices = Vec::with_capacity(sheet.choices.len());

        for choice in &sheet.choices {
            let facts = self.choice_facts(choice.id).await?;
            all_match &= choice.is_corrected == facts.is_corrected;
            choices.push(ChoiceCorrect {
                choice: choice.clone(),
                is_real_correct: facts.is_corrected,
            });
        }

        Ok((all_match, choices))
    }

    async fn choice_facts(&self, choice_id: i64) -> Result<ChoiceFacts, AppError> {
        self.choices
            .find_facts(choice_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Choice {} not found", choice_id)))
    }

    /// Grades one finished attempt using the points stored on its exam.
    pub async fn grade_exam_user(
        &self,
        exam: &Exam,
        exam_user: &ExamUser,
    ) -> Result<ExamResult, AppError> {
        let question_points = exam.question_points()?;
        let answer_sheets = exam_user.answer_sheets()?;
        let choice_lists = self.grade_submission(&answer_sheets, &question_points).await?;

        Ok(ExamResult {
            exam_id: exam.id,
            username: exam_user.username.clone(),
            total_point: total_point(&choice_lists),
            choice_lists,
        })
    }

    /// Counts, per question, how many finished attempts answered it correctly.
    /// Questions are listed in the order they are first met.
    pub async fn question_report(
        &self,
        exam: &Exam,
        exam_users: &[ExamUser],
    ) -> Result<Vec<QuestionExamReport>, AppError> {
        let question_points = exam.question_points()?;
        let mut reports: Vec<QuestionExamReport> = Vec::new();
        let mut index: HashMap<i64, usize> = HashMap::new();

        for exam_user in exam_users.iter().filter(|eu| eu.is_finished) {
            let answer_sheets = exam_user.answer_sheets()?;
            let choice_lists = self.grade_submission(&answer_sheets, &question_points).await?;

            for choice_list in choice_lists {
                let slot = *index.entry(choice_list.question.id).or_insert_with(|| {
                    reports.push(QuestionExamReport {
                        question: choice_list.question.clone(),
                        correct_total: 0,
                    });
                    reports.len() - 1
                });
                if choice_list.is_selected_correct {
                    reports[slot].correct_total += 1;
                }
            }
        }

        Ok(reports)
    }

    /// Loads an exam and its finished attempts, then builds the question report.
    pub async fn question_report_for_exam(
        &self,
        exam_id: i64,
    ) -> Result<Vec<QuestionExamReport>, AppError> {
        let exam = self
            .exams
            .find_by_id(exam_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Exam {} not found", exam_id)))?;
        let exam_users = self.exam_users.list_finished_by_exam(exam_id).await?;

        tracing::debug!(exam_id, attempts = exam_users.len(), "building question report");
        self.question_report(&exam, &exam_users).await
    }
}

fn point_for(question_id: i64, question_points: &[ExamQuestionPoint]) -> Result<i32, AppError> {
    question_points
        .iter()
        .find(|qp| qp.question_id == question_id)
        .map(|qp| qp.point)
        .ok_or_else(|| {
            AppError::InvalidArgument(format!("No point allocated for question {}", question_id))
        })
}

/// Sum of the points of correctly answered questions.
pub fn total_point(choice_lists: &[ChoiceList]) -> f64 {
    choice_lists
        .iter()
        .filter(|cl| cl.is_selected_correct)
        .map(|cl| f64::from(cl.point))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_for_matches_question_id() {
        let points = vec![
            ExamQuestionPoint { question_id: 1, point: 5 },
            ExamQuestionPoint { question_id: 2, point: 15 },
        ];

        assert_eq!(point_for(2, &points), Ok(15));
        assert!(matches!(point_for(3, &points), Err(AppError::InvalidArgument(_))));
    }
}
