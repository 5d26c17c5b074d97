// src/config.rs

use std::env;
use dotenvy::dotenv;

use crate::error::AppError;

/// Text a true/false choice must carry to count as "True".
pub const TRUE_LITERAL: &str = "True";

/// Points awarded per difficulty level.
pub const EASY_POINT: i32 = 5;
pub const MEDIUM_POINT: i32 = 10;
pub const HARD_POINT: i32 = 15;

/// Width of the daily attempts chart.
pub const TRAILING_DAYS: usize = 7;

/// `total_point` of an attempt that has not been graded yet.
pub const UNGRADED_POINT: f64 = -1.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub log_dir: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::InvalidArgument("DATABASE_URL must be set".to_string()))?;

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                AppError::InvalidArgument(format!("DB_MAX_CONNECTIONS is not a number: {}", e))
            })?,
            Err(_) => 5,
        };

        Ok(Self {
            database_url,
            rust_log,
            log_dir,
            db_max_connections,
        })
    }
}
