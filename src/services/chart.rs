// src/services/chart.rs

use std::{cmp::Ordering, sync::Arc};

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::{
        Timestamped,
        course::{Course, CourseChart},
        exam::ExamUser,
        user::CurrentUser,
    },
    repositories::{CourseRepository, ExamUserRepository, UserRepository},
    services::statistics::WeekCounts,
    utils::{
        dates::{is_last_week, is_same_week},
        round_two_decimals,
    },
};

/// Builds the per-course progress cards of the current learner.
#[derive(Clone)]
pub struct ChartService {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    exam_users: Arc<dyn ExamUserRepository>,
}

impl ChartService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        courses: Arc<dyn CourseRepository>,
        exam_users: Arc<dyn ExamUserRepository>,
    ) -> Self {
        Self {
            users,
            courses,
            exam_users,
        }
    }

    /// One chart per course of the user's intake.
    ///
    /// Fails with `NotFound` when the user does not exist and with
    /// `InvalidState` when a course has no completed attempt to average.
    pub async fn course_charts(
        &self,
        current_user: &CurrentUser,
        now: DateTime<Utc>,
    ) -> Result<Vec<CourseChart>, AppError> {
        let user = self
            .users
            .find_by_username(&current_user.username)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User '{}' not found", current_user.username))
            })?;

        let Some(intake_id) = user.intake_id else {
            return Ok(Vec::new());
        };

        let courses = self.courses.list_by_intake(intake_id).await?;
        let mut charts = Vec::with_capacity(courses.len());
        for course in courses {
            let attempts = self
                .exam_users
                .list_complete(course.id, &current_user.username)
                .await?;
            charts.push(course_chart(&course, &attempts, now)?);
        }

        Ok(charts)
    }
}

/// Summarises one course. Unlike the dashboard counters every attempt is
/// looked at, whatever its order.
pub fn course_chart(
    course: &Course,
    attempts: &[ExamUser],
    now: DateTime<Utc>,
) -> Result<CourseChart, AppError> {
    if attempts.is_empty() {
        return Err(AppError::InvalidState(format!(
            "Course {} has no completed exam to average",
            course.id
        )));
    }

    let mut counts = WeekCounts::default();
    for attempt in attempts {
        let ts = attempt.timestamp();
        if ts.is_none() {
            continue;
        }
        if is_same_week(Some(now), ts)? {
            counts.current += 1;
        } else if is_last_week(Some(now), ts)? {
            counts.last += 1;
        }
    }

    let total_point =
        attempts.iter().map(|a| a.total_point).sum::<f64>() / attempts.len() as f64;

    Ok(CourseChart {
        course_id: course.id,
        course_code: course.course_code.clone(),
        course_name: course.name.clone(),
        count_exam: attempts.len() as i64,
        total_point,
        change_rating: change_rating(counts),
        compare_last_week: match counts.current.cmp(&counts.last) {
            Ordering::Greater => 1,
            Ordering::Equal => 0,
            Ordering::Less => -1,
        },
    })
}

/// Size of the change between the two weeks; the direction is carried by
/// `compare_last_week`, so an empty current week still rates positive.
pub fn change_rating(counts: WeekCounts) -> f64 {
    let WeekCounts { current, last } = counts;
    let rating = match (current, last) {
        (0, 0) => 0.0,
        (current, 0) => 100.0 * current as f64,
        (0, last) => 100.0 * last as f64,
        (current, last) => (current - last) as f64 / last as f64 * 100.0,
    };
    round_two_decimals(rating)
}
