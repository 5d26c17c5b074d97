// src/services/mod.rs

pub mod chart;
pub mod exam_session;
pub mod grading;
pub mod question_bank;
pub mod statistics;
