// src/models/mod.rs

pub mod choice;
pub mod course;
pub mod exam;
pub mod question;
pub mod user;

use chrono::{DateTime, Utc};

/// Anything the dashboard buckets by week or day.
pub trait Timestamped {
    fn timestamp(&self) -> Option<DateTime<Utc>>;
}

impl Timestamped for exam::ExamUser {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.time_finish
    }
}

impl Timestamped for exam::Exam {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }
}

impl Timestamped for question::Question {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }
}

impl Timestamped for user::User {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }
}

impl Timestamped for DateTime<Utc> {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl Timestamped for Option<DateTime<Utc>> {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        *self
    }
}
