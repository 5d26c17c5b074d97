// tests/common/mod.rs

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use exam_core::{
    error::AppError,
    models::{
        choice::{AnswerSheet, Choice, ChoiceFacts, ExamQuestionPoint},
        course::Course,
        exam::{Exam, ExamUser},
        question::Question,
        user::User,
    },
    repositories::{
        ChoiceRepository, CourseRepository, ExamRepository, ExamUserRepository,
        QuestionRepository, UserRepository,
    },
};

/// In-memory stand-in for every repository, recording lookups.
#[derive(Default)]
pub struct FakeStore {
    pub questions: Vec<Question>,
    pub choices: HashMap<i64, ChoiceFacts>,
    pub exam_users: Vec<ExamUser>,
    pub complete_exams: HashMap<(i64, String), Vec<ExamUser>>,
    pub exams: Vec<Exam>,
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub question_lookups: AtomicUsize,
    pub choice_lookups: Mutex<Vec<i64>>,
}

impl FakeStore {
    pub fn question_lookups(&self) -> usize {
        self.question_lookups.load(Ordering::SeqCst)
    }

    pub fn choice_lookups(&self) -> Vec<i64> {
        self.choice_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionRepository for FakeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        self.question_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn list_by_created_date_desc(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.questions.clone())
    }
}

#[async_trait]
impl ChoiceRepository for FakeStore {
    async fn find_facts(&self, id: i64) -> Result<Option<ChoiceFacts>, AppError> {
        self.choice_lookups.lock().unwrap().push(id);
        Ok(self.choices.get(&id).cloned())
    }
}

#[async_trait]
impl ExamUserRepository for FakeStore {
    async fn list_by_time_finish_desc(&self) -> Result<Vec<ExamUser>, AppError> {
        Ok(self.exam_users.clone())
    }

    async fn list_complete(
        &self,
        course_id: i64,
        username: &str,
    ) -> Result<Vec<ExamUser>, AppError> {
        Ok(self
            .complete_exams
            .get(&(course_id, username.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn list_finished_by_exam(&self, exam_id: i64) -> Result<Vec<ExamUser>, AppError> {
        Ok(self
            .exam_users
            .iter()
            .filter(|eu| eu.exam_id == exam_id && eu.is_finished)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ExamRepository for FakeStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>, AppError> {
        Ok(self.exams.iter().find(|e| e.id == id).cloned())
    }

    async fn list_canceled_by_created_date_desc(&self) -> Result<Vec<Exam>, AppError> {
        Ok(self.exams.iter().filter(|e| e.canceled).cloned().collect())
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_active_by_created_date_desc(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.iter().filter(|u| !u.deleted).cloned().collect())
    }
}

#[async_trait]
impl CourseRepository for FakeStore {
    async fn list_by_intake(&self, intake_id: i64) -> Result<Vec<Course>, AppError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.intake_id == Some(intake_id))
            .cloned()
            .collect())
    }
}

/// Wednesday 2023-06-14 12:00 UTC, ISO week 24.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 14, 12, 0, 0).unwrap()
}

pub fn question(id: i64, type_code: Option<&str>) -> Question {
    Question {
        id,
        question_text: format!("Question {}", id),
        type_code: type_code.map(str::to_string),
        difficulty_level: Some("MEDIUM".to_string()),
        point: 10,
        deleted: false,
        created_date: None,
    }
}

pub fn choice(id: i64, choice_text: &str, is_corrected: i32) -> Choice {
    Choice {
        id,
        choice_text: choice_text.to_string(),
        is_corrected,
    }
}

pub fn facts(choice_text: &str, is_corrected: i32) -> ChoiceFacts {
    ChoiceFacts {
        choice_text: choice_text.to_string(),
        is_corrected,
    }
}

pub fn sheet(question_id: i64, choices: Vec<Choice>, point: i32) -> AnswerSheet {
    AnswerSheet {
        question_id,
        choices,
        point,
    }
}

pub fn point(question_id: i64, point: i32) -> ExamQuestionPoint {
    ExamQuestionPoint { question_id, point }
}

pub fn exam_user(id: i64, time_finish: Option<DateTime<Utc>>, total_point: f64) -> ExamUser {
    ExamUser {
        id,
        exam_id: 1,
        username: "user1".to_string(),
        is_started: true,
        is_finished: true,
        remaining_time: 0,
        time_start: None,
        time_finish,
        total_point,
        answer_sheet: None,
    }
}

pub fn exam(id: i64, question_data: &str) -> Exam {
    Exam {
        id,
        title: format!("Exam {}", id),
        course_id: 1,
        locked: false,
        canceled: false,
        begin_exam: None,
        finish_exam: None,
        duration_exam: 60,
        question_data: Some(question_data.to_string()),
        created_date: None,
    }
}
